//! Comment storage
//!
//! Comments live under composite keys "{post ulid}:{comment ulid}", so
//! one range scan fetches a post's thread in creation order.

use crate::error::EduError;
use crate::types::{Comment, PostId};
use redb::{ReadableTable, TableDefinition};

use super::Storage;

/// Table for comments (key: "{post}:{comment}", value: postcard-encoded Comment)
pub(crate) const COMMENTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("comments");

impl Storage {
    /// Save a comment under its post.
    pub fn save_comment(&self, comment: &Comment) -> Result<(), EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let write_txn = db_guard.begin_write()?;
        {
            let mut table = write_txn.open_table(COMMENTS_TABLE)?;
            let serialized = postcard::to_allocvec(comment)
                .map_err(|e| EduError::Serialization(e.to_string()))?;
            let key = format!(
                "{}:{}",
                comment.post.to_string_repr(),
                comment.id.to_string_repr()
            );
            table.insert(key.as_str(), serialized.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load a post's comments, oldest first.
    pub fn list_comments(&self, post_id: &PostId) -> Result<Vec<Comment>, EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(COMMENTS_TABLE)?;

        let key = post_id.to_string_repr();
        let start = format!("{}:", key);
        let end = format!("{};", key);

        let mut comments = Vec::new();
        for entry in table.range(start.as_str()..end.as_str())? {
            let (_, value) = entry?;
            let comment: Comment = postcard::from_bytes(value.value())
                .map_err(|e| EduError::Serialization(e.to_string()))?;
            comments.push(comment);
        }
        Ok(comments)
    }

    /// Number of comments under a post.
    pub fn comment_count(&self, post_id: &PostId) -> Result<u64, EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(COMMENTS_TABLE)?;

        let key = post_id.to_string_repr();
        let start = format!("{}:", key);
        let end = format!("{};", key);
        Ok(table.range(start.as_str()..end.as_str())?.count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserId;
    use tempfile::TempDir;

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_dir.path().join("test.redb")).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_comments_listed_oldest_first() {
        let (storage, _temp) = create_test_storage();
        let post = PostId::new();
        let author = UserId::new();

        for text in ["first", "second", "third"] {
            storage
                .save_comment(&Comment::new(post.clone(), author.clone(), text))
                .unwrap();
            std::thread::sleep(std::time::Duration::from_millis(2));
        }

        let contents: Vec<_> = storage
            .list_comments(&post)
            .unwrap()
            .into_iter()
            .map(|c| c.content)
            .collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_comments_scoped_to_their_post() {
        let (storage, _temp) = create_test_storage();
        let post_a = PostId::new();
        let post_b = PostId::new();
        let author = UserId::new();

        storage
            .save_comment(&Comment::new(post_a.clone(), author.clone(), "on a"))
            .unwrap();
        storage
            .save_comment(&Comment::new(post_b.clone(), author, "on b"))
            .unwrap();

        assert_eq!(storage.comment_count(&post_a).unwrap(), 1);
        assert_eq!(storage.comment_count(&post_b).unwrap(), 1);
        assert_eq!(storage.list_comments(&post_a).unwrap()[0].content, "on a");
    }

    #[test]
    fn test_no_comments_is_empty() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.list_comments(&PostId::new()).unwrap().is_empty());
    }
}
