//! Persistent storage using redb.
//!
//! This module provides ACID-compliant storage for:
//! - User accounts (plus an email index for sign-in)
//! - Study posts
//! - Comments (keyed under their post)
//! - Helpful-vote marks (one per user per post)
//! - Direct messages (keyed under their receiver)
//! - Subject categories
//! - Attached resource files (content-addressed)
//! - The signed-in session

use crate::error::EduError;
use crate::types::UserId;
use parking_lot::RwLock;
use redb::{Database, TableDefinition};
use std::path::Path;
use std::sync::Arc;

// Submodules
mod categories;
mod comments;
mod helpfuls;
mod messages;
mod posts;
mod resources;
mod users;

// Table handles pulled in for Storage::new
use categories::CATEGORIES_TABLE;
use comments::COMMENTS_TABLE;
use helpfuls::HELPFULS_TABLE;
use messages::MESSAGES_TABLE;
use posts::POSTS_TABLE;
use resources::RESOURCES_TABLE;
use users::{EMAIL_INDEX_TABLE, USERS_TABLE};

/// Table for the signed-in session (single fixed key)
const SESSION_TABLE: TableDefinition<&str, &str> = TableDefinition::new("session");

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Get a reference to the shared database handle
    pub fn db_handle(&self) -> Arc<RwLock<Database>> {
        self.db.clone()
    }
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create all required tables
    pub fn new(path: impl AsRef<Path>) -> Result<Self, EduError> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Open/create database
        let db = Database::create(path)?;

        // Initialize all tables
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(USERS_TABLE)?;
            let _ = write_txn.open_table(EMAIL_INDEX_TABLE)?;
            let _ = write_txn.open_table(POSTS_TABLE)?;
            let _ = write_txn.open_table(COMMENTS_TABLE)?;
            let _ = write_txn.open_table(HELPFULS_TABLE)?;
            let _ = write_txn.open_table(MESSAGES_TABLE)?;
            let _ = write_txn.open_table(CATEGORIES_TABLE)?;
            let _ = write_txn.open_table(RESOURCES_TABLE)?;
            let _ = write_txn.open_table(SESSION_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Session Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Session storage key (there is at most one signed-in user)
    const SESSION_KEY: &'static str = "current_user";

    /// Persist the signed-in user so desktop restarts and CLI
    /// invocations stay signed in.
    pub fn save_session(&self, user_id: &UserId) -> Result<(), EduError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            let id = user_id.to_string_repr();
            table.insert(Self::SESSION_KEY, id.as_str())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the signed-in user's id.
    ///
    /// Returns `None` when nobody is signed in or the stored id no
    /// longer parses.
    pub fn load_session(&self) -> Result<Option<UserId>, EduError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;

        match table.get(Self::SESSION_KEY)? {
            Some(v) => Ok(UserId::from_string(v.value()).ok()),
            None => Ok(None),
        }
    }

    /// Clear the signed-in session.
    pub fn clear_session(&self) -> Result<(), EduError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.remove(Self::SESSION_KEY)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");
        let storage = Storage::new(&db_path).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_storage_can_be_created() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");
        let storage = Storage::new(&db_path);
        assert!(storage.is_ok());
    }

    #[test]
    fn test_storage_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested/path/to/test.redb");
        let storage = Storage::new(&db_path);
        assert!(storage.is_ok());
        assert!(db_path.exists());
    }

    #[test]
    fn test_session_starts_empty() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.load_session().unwrap().is_none());
    }

    #[test]
    fn test_session_save_and_load() {
        let (storage, _temp) = create_test_storage();

        let user_id = UserId::new();
        storage.save_session(&user_id).unwrap();
        assert_eq!(storage.load_session().unwrap(), Some(user_id));
    }

    #[test]
    fn test_session_clear() {
        let (storage, _temp) = create_test_storage();

        storage.save_session(&UserId::new()).unwrap();
        storage.clear_session().unwrap();
        assert!(storage.load_session().unwrap().is_none());
    }

    #[test]
    fn test_session_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");

        let user_id = UserId::new();
        {
            let storage = Storage::new(&db_path).unwrap();
            storage.save_session(&user_id).unwrap();
        }
        {
            let storage = Storage::new(&db_path).unwrap();
            assert_eq!(storage.load_session().unwrap(), Some(user_id));
        }
    }
}
