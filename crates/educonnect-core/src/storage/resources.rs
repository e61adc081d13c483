//! Resource file storage - content-addressed attachment bytes
//!
//! Stores attached files in redb with BLAKE3 content hashes as keys.
//! Two students uploading the same worksheet share one copy.

use crate::error::EduError;
use redb::TableDefinition;

use super::Storage;

/// Table for resource bytes (key: BLAKE3 hash hex string, value: raw bytes)
pub(crate) const RESOURCES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("resources");

impl Storage {
    /// Save resource bytes and return their content hash.
    ///
    /// If the same content is already stored, returns the existing hash
    /// without re-storing.
    pub fn save_resource(&self, data: Vec<u8>) -> Result<String, EduError> {
        let hash = blake3::hash(&data);
        let hash_hex = hash.to_hex().to_string();

        let db = self.db_handle();
        let db_guard = db.read();

        // Content-addressed deduplication
        {
            let read_txn = db_guard.begin_read()?;
            let table = read_txn.open_table(RESOURCES_TABLE)?;
            if table.get(hash_hex.as_str())?.is_some() {
                return Ok(hash_hex);
            }
        }

        let write_txn = db_guard.begin_write()?;
        {
            let mut table = write_txn.open_table(RESOURCES_TABLE)?;
            table.insert(hash_hex.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;

        Ok(hash_hex)
    }

    /// Load resource bytes by content hash.
    ///
    /// Returns `None` if the resource doesn't exist.
    pub fn load_resource(&self, hash_hex: &str) -> Result<Option<Vec<u8>>, EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(RESOURCES_TABLE)?;

        if let Some(data) = table.get(hash_hex)? {
            Ok(Some(data.value().to_vec()))
        } else {
            Ok(None)
        }
    }

    /// Check if a resource exists by hash.
    pub fn resource_exists(&self, hash_hex: &str) -> Result<bool, EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(RESOURCES_TABLE)?;

        Ok(table.get(hash_hex)?.is_some())
    }

    /// Get the size of a stored resource in bytes.
    pub fn resource_size(&self, hash_hex: &str) -> Result<Option<usize>, EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(RESOURCES_TABLE)?;

        if let Some(data) = table.get(hash_hex)? {
            Ok(Some(data.value().len()))
        } else {
            Ok(None)
        }
    }

    /// Delete a resource by hash.
    ///
    /// Returns `Ok(())` even if the resource doesn't exist. Content is
    /// shared between identical attachments, so deleting affects every
    /// post referencing this hash.
    pub fn delete_resource(&self, hash_hex: &str) -> Result<(), EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let write_txn = db_guard.begin_write()?;
        {
            let mut table = write_txn.open_table(RESOURCES_TABLE)?;
            table.remove(hash_hex)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_resource() {
        let temp_dir = tempdir().unwrap();
        let storage = Storage::new(temp_dir.path().join("test.db")).unwrap();

        let data = b"worksheet contents".to_vec();
        let hash = storage.save_resource(data.clone()).unwrap();
        assert!(!hash.is_empty());

        let loaded = storage.load_resource(&hash).unwrap();
        assert_eq!(loaded, Some(data));
    }

    #[test]
    fn test_content_addressing_dedups() {
        let temp_dir = tempdir().unwrap();
        let storage = Storage::new(temp_dir.path().join("test.db")).unwrap();

        let data = b"same notes".to_vec();
        let hash1 = storage.save_resource(data.clone()).unwrap();
        let hash2 = storage.save_resource(data).unwrap();
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_different_content_different_hash() {
        let temp_dir = tempdir().unwrap();
        let storage = Storage::new(temp_dir.path().join("test.db")).unwrap();

        let hash1 = storage.save_resource(b"chapter one".to_vec()).unwrap();
        let hash2 = storage.save_resource(b"chapter two".to_vec()).unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_resource_exists_and_size() {
        let temp_dir = tempdir().unwrap();
        let storage = Storage::new(temp_dir.path().join("test.db")).unwrap();

        let data = b"sized content".to_vec();
        let hash = storage.save_resource(data.clone()).unwrap();

        assert!(storage.resource_exists(&hash).unwrap());
        assert_eq!(storage.resource_size(&hash).unwrap(), Some(data.len()));
        assert!(!storage.resource_exists("nonexistent").unwrap());
        assert_eq!(storage.resource_size("nonexistent").unwrap(), None);
    }

    #[test]
    fn test_delete_resource() {
        let temp_dir = tempdir().unwrap();
        let storage = Storage::new(temp_dir.path().join("test.db")).unwrap();

        let hash = storage.save_resource(b"delete me".to_vec()).unwrap();
        assert!(storage.resource_exists(&hash).unwrap());

        storage.delete_resource(&hash).unwrap();
        assert!(!storage.resource_exists(&hash).unwrap());
    }
}
