//! Helpful-vote storage
//!
//! One mark per user per post, keyed "{post}:{user}". The post's
//! denormalized count is updated in the same transaction as the mark,
//! so the two can't drift.

use crate::error::EduError;
use crate::types::{Post, PostId, UserId};
use redb::{ReadableTable, TableDefinition};

use super::posts::POSTS_TABLE;
use super::Storage;

/// Table for helpful marks (key: "{post}:{user}", value: empty)
pub(crate) const HELPFULS_TABLE: TableDefinition<&str, &[u8]> =
    TableDefinition::new("helpful_marks");

fn mark_key(post_id: &PostId, user_id: &UserId) -> String {
    format!("{}:{}", post_id.to_string_repr(), user_id.to_string_repr())
}

impl Storage {
    /// Has this user already marked this post helpful?
    pub fn has_helpful_mark(&self, post_id: &PostId, user_id: &UserId) -> Result<bool, EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(HELPFULS_TABLE)?;
        let key = mark_key(post_id, user_id);
        Ok(table.get(key.as_str())?.is_some())
    }

    /// Insert a mark without touching the post count. Only used by tests
    /// and the delete cascade; normal voting goes through
    /// [`Storage::toggle_helpful`].
    pub fn insert_helpful_mark(&self, post_id: &PostId, user_id: &UserId) -> Result<(), EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let write_txn = db_guard.begin_write()?;
        {
            let mut table = write_txn.open_table(HELPFULS_TABLE)?;
            let key = mark_key(post_id, user_id);
            table.insert(key.as_str(), b"".as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Toggle a user's helpful vote on a post.
    ///
    /// Inserts or removes the mark and updates the post's count in one
    /// transaction. The count clamps at zero. Returns
    /// `(now_voted, new_count)`.
    pub fn toggle_helpful(
        &self,
        post_id: &PostId,
        user_id: &UserId,
    ) -> Result<(bool, u32), EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let write_txn = db_guard.begin_write()?;
        let result = {
            let mut marks = write_txn.open_table(HELPFULS_TABLE)?;
            let mut posts = write_txn.open_table(POSTS_TABLE)?;

            let post_key = post_id.to_string_repr();
            let mut post: Post = match posts.get(post_key.as_str())? {
                Some(data) => postcard::from_bytes(data.value())
                    .map_err(|e| EduError::Serialization(e.to_string()))?,
                None => return Err(EduError::PostNotFound(post_id.to_string())),
            };

            let key = mark_key(post_id, user_id);
            let now_voted = if marks.get(key.as_str())?.is_some() {
                marks.remove(key.as_str())?;
                post.helpful_count = post.helpful_count.saturating_sub(1);
                false
            } else {
                marks.insert(key.as_str(), b"".as_slice())?;
                post.helpful_count += 1;
                true
            };

            let serialized = postcard::to_allocvec(&post)
                .map_err(|e| EduError::Serialization(e.to_string()))?;
            posts.insert(post_key.as_str(), serialized.as_slice())?;

            (now_voted, post.helpful_count)
        };
        write_txn.commit()?;
        Ok(result)
    }

    /// Number of marks on a post (ground truth for the denormalized count).
    pub fn helpful_mark_count(&self, post_id: &PostId) -> Result<u64, EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(HELPFULS_TABLE)?;

        let key = post_id.to_string_repr();
        let start = format!("{}:", key);
        let end = format!("{};", key);
        Ok(table.range(start.as_str()..end.as_str())?.count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_dir.path().join("test.redb")).unwrap();
        (storage, temp_dir)
    }

    fn saved_post(storage: &Storage) -> Post {
        let post = Post::new("T", "c", "Physics", UserId::new());
        storage.save_post(&post).unwrap();
        post
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let (storage, _temp) = create_test_storage();
        let post = saved_post(&storage);
        let voter = UserId::new();

        let (voted, count) = storage.toggle_helpful(&post.id, &voter).unwrap();
        assert!(voted);
        assert_eq!(count, 1);
        assert!(storage.has_helpful_mark(&post.id, &voter).unwrap());

        let (voted, count) = storage.toggle_helpful(&post.id, &voter).unwrap();
        assert!(!voted);
        assert_eq!(count, 0);
        assert!(!storage.has_helpful_mark(&post.id, &voter).unwrap());
    }

    #[test]
    fn test_count_tracks_distinct_voters() {
        let (storage, _temp) = create_test_storage();
        let post = saved_post(&storage);

        for _ in 0..3 {
            storage.toggle_helpful(&post.id, &UserId::new()).unwrap();
        }

        let loaded = storage.load_post(&post.id).unwrap().unwrap();
        assert_eq!(loaded.helpful_count, 3);
        assert_eq!(storage.helpful_mark_count(&post.id).unwrap(), 3);
    }

    #[test]
    fn test_count_never_goes_negative() {
        let (storage, _temp) = create_test_storage();
        let mut post = saved_post(&storage);
        let voter = UserId::new();

        // A count that drifted to zero with a mark still present
        storage.insert_helpful_mark(&post.id, &voter).unwrap();
        post.helpful_count = 0;
        storage.save_post(&post).unwrap();

        let (_, count) = storage.toggle_helpful(&post.id, &voter).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_toggle_on_missing_post_errors() {
        let (storage, _temp) = create_test_storage();
        let result = storage.toggle_helpful(&PostId::new(), &UserId::new());
        assert!(matches!(result, Err(EduError::PostNotFound(_))));
    }
}
