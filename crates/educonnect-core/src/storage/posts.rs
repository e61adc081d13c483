//! Study post storage
//!
//! Posts are keyed by their ulid string. Ulids sort by creation time,
//! so iterating the table ascending and reversing gives newest-first
//! without a secondary index.

use crate::error::EduError;
use crate::types::{Post, PostId};
use redb::{ReadableTable, TableDefinition};

use super::comments::COMMENTS_TABLE;
use super::helpfuls::HELPFULS_TABLE;
use super::Storage;

/// Table for posts (key: post ulid string, value: postcard-encoded Post)
pub(crate) const POSTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("posts");

impl Storage {
    /// Save a post.
    ///
    /// Overwrites an existing post with the same id (helpful-count
    /// updates and attachment edits go through here).
    pub fn save_post(&self, post: &Post) -> Result<(), EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let write_txn = db_guard.begin_write()?;
        {
            let mut table = write_txn.open_table(POSTS_TABLE)?;
            let serialized = postcard::to_allocvec(post)
                .map_err(|e| EduError::Serialization(e.to_string()))?;
            let key = post.id.to_string_repr();
            table.insert(key.as_str(), serialized.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load a post by id.
    pub fn load_post(&self, post_id: &PostId) -> Result<Option<Post>, EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(POSTS_TABLE)?;
        let key = post_id.to_string_repr();

        match table.get(key.as_str())? {
            Some(data) => {
                let post: Post = postcard::from_bytes(data.value())
                    .map_err(|e| EduError::Serialization(e.to_string()))?;
                Ok(Some(post))
            }
            None => Ok(None),
        }
    }

    /// Load all posts, newest first.
    pub fn list_posts(&self) -> Result<Vec<Post>, EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(POSTS_TABLE)?;

        let mut posts = Vec::new();
        for entry in table.iter()? {
            let (_, value) = entry?;
            let post: Post = postcard::from_bytes(value.value())
                .map_err(|e| EduError::Serialization(e.to_string()))?;
            posts.push(post);
        }
        posts.reverse();
        Ok(posts)
    }

    /// Load posts in one subject, newest first.
    pub fn list_posts_by_subject(&self, subject: &str) -> Result<Vec<Post>, EduError> {
        let mut posts = self.list_posts()?;
        posts.retain(|p| p.subject == subject);
        Ok(posts)
    }

    /// Case-insensitive substring search over titles and content,
    /// newest first.
    pub fn search_posts(&self, term: &str) -> Result<Vec<Post>, EduError> {
        let needle = term.to_lowercase();
        let mut posts = self.list_posts()?;
        posts.retain(|p| {
            p.title.to_lowercase().contains(&needle) || p.content.to_lowercase().contains(&needle)
        });
        Ok(posts)
    }

    /// Delete a post together with its comments and helpful marks.
    pub fn delete_post(&self, post_id: &PostId) -> Result<(), EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let write_txn = db_guard.begin_write()?;
        {
            let key = post_id.to_string_repr();
            let mut posts = write_txn.open_table(POSTS_TABLE)?;
            let mut comments = write_txn.open_table(COMMENTS_TABLE)?;
            let mut helpfuls = write_txn.open_table(HELPFULS_TABLE)?;

            posts.remove(key.as_str())?;

            // Composite keys are "{post}:{suffix}"; ';' is ':' + 1, so this
            // range covers exactly the post's prefix.
            let start = format!("{}:", key);
            let end = format!("{};", key);

            let comment_keys: Vec<String> = {
                let mut keys = Vec::new();
                for entry in comments.range(start.as_str()..end.as_str())? {
                    let (k, _) = entry?;
                    keys.push(k.value().to_string());
                }
                keys
            };
            for k in comment_keys {
                comments.remove(k.as_str())?;
            }

            let helpful_keys: Vec<String> = {
                let mut keys = Vec::new();
                for entry in helpfuls.range(start.as_str()..end.as_str())? {
                    let (k, _) = entry?;
                    keys.push(k.value().to_string());
                }
                keys
            };
            for k in helpful_keys {
                helpfuls.remove(k.as_str())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Number of posts.
    pub fn post_count(&self) -> Result<u64, EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(POSTS_TABLE)?;
        Ok(table.iter()?.count() as u64)
    }
}
