//! Direct message storage
//!
//! Messages are keyed "{receiver}:{message}" so an inbox is one range
//! scan. Nothing here indexes by sender; the product only ever shows
//! received mail.

use crate::error::EduError;
use crate::types::{DirectMessage, UserId};
use redb::{ReadableTable, TableDefinition};

use super::Storage;

/// Table for messages (key: "{receiver}:{message}", value: postcard-encoded DirectMessage)
pub(crate) const MESSAGES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("messages");

impl Storage {
    /// Save a message into its receiver's inbox.
    pub fn save_message(&self, message: &DirectMessage) -> Result<(), EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let write_txn = db_guard.begin_write()?;
        {
            let mut table = write_txn.open_table(MESSAGES_TABLE)?;
            let serialized = postcard::to_allocvec(message)
                .map_err(|e| EduError::Serialization(e.to_string()))?;
            let key = format!(
                "{}:{}",
                message.receiver.to_string_repr(),
                message.id.to_string_repr()
            );
            table.insert(key.as_str(), serialized.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load a user's received messages, newest first.
    pub fn inbox(&self, receiver: &UserId) -> Result<Vec<DirectMessage>, EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(MESSAGES_TABLE)?;

        let key = receiver.to_string_repr();
        let start = format!("{}:", key);
        let end = format!("{};", key);

        let mut messages = Vec::new();
        for entry in table.range(start.as_str()..end.as_str())? {
            let (_, value) = entry?;
            let message: DirectMessage = postcard::from_bytes(value.value())
                .map_err(|e| EduError::Serialization(e.to_string()))?;
            messages.push(message);
        }
        messages.reverse();
        Ok(messages)
    }

    /// Count a user's unread messages.
    pub fn unread_count(&self, receiver: &UserId) -> Result<u64, EduError> {
        Ok(self
            .inbox(receiver)?
            .iter()
            .filter(|m| !m.is_read)
            .count() as u64)
    }

    /// Mark everything in a user's inbox read.
    pub fn mark_inbox_read(&self, receiver: &UserId) -> Result<(), EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let write_txn = db_guard.begin_write()?;
        {
            let mut table = write_txn.open_table(MESSAGES_TABLE)?;

            let key = receiver.to_string_repr();
            let start = format!("{}:", key);
            let end = format!("{};", key);

            let unread: Vec<(String, DirectMessage)> = {
                let mut found = Vec::new();
                for entry in table.range(start.as_str()..end.as_str())? {
                    let (k, value) = entry?;
                    let message: DirectMessage = postcard::from_bytes(value.value())
                        .map_err(|e| EduError::Serialization(e.to_string()))?;
                    if !message.is_read {
                        found.push((k.value().to_string(), message));
                    }
                }
                found
            };

            for (k, mut message) in unread {
                message.is_read = true;
                let serialized = postcard::to_allocvec(&message)
                    .map_err(|e| EduError::Serialization(e.to_string()))?;
                table.insert(k.as_str(), serialized.as_slice())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Total number of stored messages.
    pub fn message_count(&self) -> Result<u64, EduError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(MESSAGES_TABLE)?;
        Ok(table.iter()?.count() as u64)
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
    fn test_inbox_newest_first() {
        let (storage, _temp) = create_test_storage();
        let receiver = UserId::new();
        let sender = UserId::new();

        for text in ["oldest", "middle", "newest"] {
            storage
                .save_message(&DirectMessage::new(sender.clone(), receiver.clone(), text))
                .unwrap();
            std::thread::sleep(std::time::Duration::from_millis(2));
        }

        let contents: Vec<_> = storage
            .inbox(&receiver)
            .unwrap()
            .into_iter()
            .map(|m| m.content)
            .collect();
        assert_eq!(contents, vec!["newest", "middle", "oldest"]);
    }

    #[test]
    fn test_inbox_scoped_to_receiver() {
        let (storage, _temp) = create_test_storage();
        let alice = UserId::new();
        let bob = UserId::new();

        storage
            .save_message(&DirectMessage::new(bob.clone(), alice.clone(), "for alice"))
            .unwrap();
        storage
            .save_message(&DirectMessage::new(alice.clone(), bob.clone(), "for bob"))
            .unwrap();

        let alice_inbox = storage.inbox(&alice).unwrap();
        assert_eq!(alice_inbox.len(), 1);
        assert_eq!(alice_inbox[0].content, "for alice");
    }

    #[test]
    fn test_mark_inbox_read() {
        let (storage, _temp) = create_test_storage();
        let receiver = UserId::new();

        storage
            .save_message(&DirectMessage::new(UserId::new(), receiver.clone(), "hey"))
            .unwrap();
        storage
            .save_message(&DirectMessage::new(UserId::new(), receiver.clone(), "hi"))
            .unwrap();
        assert_eq!(storage.unread_count(&receiver).unwrap(), 2);

        storage.mark_inbox_read(&receiver).unwrap();
        assert_eq!(storage.unread_count(&receiver).unwrap(), 0);
        assert!(storage.inbox(&receiver).unwrap().iter().all(|m| m.is_read));
    }

    #[test]
    fn test_empty_inbox() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.inbox(&UserId::new()).unwrap().is_empty());
        assert_eq!(storage.unread_count(&UserId::new()).unwrap(), 0);
    }
}
