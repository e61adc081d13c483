//! User account storage
//!
//! Accounts are stored under their ulid key; a second table maps the
//! lowercased email to that key so sign-in doesn't scan. Both tables
//! are written in one transaction so the index can't drift.

use crate::error::EduError;
use crate::types::{User, UserId};
use redb::{ReadableTable, TableDefinition};

use super::Storage;

/// Table for user accounts (key: user ulid string, value: postcard-encoded User)
pub(crate) const USERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("users");

/// Email index (key: lowercased email, value: user ulid string)
pub(crate) const EMAIL_INDEX_TABLE: TableDefinition<&str, &str> =
    TableDefinition::new("user_emails");

impl Storage {
    /// Save a user and keep the email index in step.
    ///
    /// Overwrites an existing account with the same id (profile edits
    /// go through here too).
    pub fn save_user(&self, user: &User) -> Result<(), EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let write_txn = db_guard.begin_write()?;
        {
            let mut users = write_txn.open_table(USERS_TABLE)?;
            let mut emails = write_txn.open_table(EMAIL_INDEX_TABLE)?;

            let serialized = postcard::to_allocvec(user)
                .map_err(|e| EduError::Serialization(e.to_string()))?;
            let key = user.id.to_string_repr();
            users.insert(key.as_str(), serialized.as_slice())?;
            emails.insert(user.email.as_str(), key.as_str())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load a user by id.
    pub fn load_user(&self, user_id: &UserId) -> Result<Option<User>, EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(USERS_TABLE)?;
        let key = user_id.to_string_repr();

        match table.get(key.as_str())? {
            Some(data) => {
                let user: User = postcard::from_bytes(data.value())
                    .map_err(|e| EduError::Serialization(e.to_string()))?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// Look up a user by email (case-insensitive).
    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>, EduError> {
        let normalized = email.trim().to_lowercase();

        let user_id = {
            let db = self.db_handle();
            let db_guard = db.read();
            let read_txn = db_guard.begin_read()?;
            let table = read_txn.open_table(EMAIL_INDEX_TABLE)?;
            match table.get(normalized.as_str())? {
                Some(v) => UserId::from_string(v.value()).ok(),
                None => None,
            }
        };

        match user_id {
            Some(id) => self.load_user(&id),
            None => Ok(None),
        }
    }

    /// Load all users.
    pub fn list_users(&self) -> Result<Vec<User>, EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(USERS_TABLE)?;

        let mut users = Vec::new();
        for entry in table.iter()? {
            let (_, value) = entry?;
            let user: User = postcard::from_bytes(value.value())
                .map_err(|e| EduError::Serialization(e.to_string()))?;
            users.push(user);
        }
        Ok(users)
    }

    /// Number of registered accounts.
    pub fn user_count(&self) -> Result<u64, EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(USERS_TABLE)?;
        Ok(table.iter()?.count() as u64)
    }
}
