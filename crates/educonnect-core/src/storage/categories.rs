//! Subject category storage
//!
//! Categories are just names; the name is the key, so inserts are
//! naturally idempotent and listing comes back alphabetical.

use crate::error::EduError;
use redb::{ReadableTable, TableDefinition};

use super::Storage;

/// Table for categories (key: category name, value: empty)
pub(crate) const CATEGORIES_TABLE: TableDefinition<&str, &[u8]> =
    TableDefinition::new("categories");

impl Storage {
    /// Add a category; re-adding an existing name is a no-op.
    pub fn add_category(&self, name: &str) -> Result<(), EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let write_txn = db_guard.begin_write()?;
        {
            let mut table = write_txn.open_table(CATEGORIES_TABLE)?;
            table.insert(name, b"".as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// All category names, alphabetical.
    pub fn list_categories(&self) -> Result<Vec<String>, EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(CATEGORIES_TABLE)?;

        let mut names = Vec::new();
        for entry in table.iter()? {
            let (key, _) = entry?;
            names.push(key.value().to_string());
        }
        Ok(names)
    }

    /// Whether a category exists.
    pub fn has_category(&self, name: &str) -> Result<bool, EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(CATEGORIES_TABLE)?;
        Ok(table.get(name)?.is_some())
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

    #[test]
    fn test_add_and_list_alphabetical() {
        let (storage, _temp) = create_test_storage();

        storage.add_category("Physics").unwrap();
        storage.add_category("Biology").unwrap();
        storage.add_category("Mathematics").unwrap();

        assert_eq!(
            storage.list_categories().unwrap(),
            vec!["Biology", "Mathematics", "Physics"]
        );
    }

    #[test]
    fn test_add_is_idempotent() {
        let (storage, _temp) = create_test_storage();

        storage.add_category("History").unwrap();
        storage.add_category("History").unwrap();

        assert_eq!(storage.list_categories().unwrap(), vec!["History"]);
    }

    #[test]
    fn test_has_category() {
        let (storage, _temp) = create_test_storage();

        storage.add_category("Programming").unwrap();
        assert!(storage.has_category("Programming").unwrap());
        assert!(!storage.has_category("Alchemy").unwrap());
    }
}
