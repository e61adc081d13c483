//! Direct messages between students

use serde::{Deserialize, Serialize};

use crate::types::{MessageId, UserId};

/// A direct message in a user's inbox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectMessage {
    /// Unique identifier
    pub id: MessageId,
    /// Sending account
    pub sender: UserId,
    /// Receiving account
    pub receiver: UserId,
    /// Message body
    pub content: String,
    /// Unix timestamp of sending
    pub created_at: i64,
    /// Set once the receiver has opened their inbox
    pub is_read: bool,
}

impl DirectMessage {
    /// Create a new unread message
    pub fn new(sender: UserId, receiver: UserId, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            sender,
            receiver,
            content: content.into(),
            created_at: chrono::Utc::now().timestamp(),
            is_read: false,
        }
    }

    /// Relative age for inbox display
    pub fn relative_time(&self) -> String {
        relative_time(self.created_at)
    }
}

/// Format a unix timestamp as a relative age: "Just now", "5m ago",
/// "2h ago", "Yesterday", "3d ago".
pub fn relative_time(timestamp: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let diff_secs = now - timestamp;

    if diff_secs < 60 {
        "Just now".to_string()
    } else if diff_secs < 3600 {
        format!("{}m ago", diff_secs / 60)
    } else if diff_secs < 86400 {
        format!("{}h ago", diff_secs / 3600)
    } else if diff_secs < 172800 {
        "Yesterday".to_string()
    } else {
        format!("{}d ago", diff_secs / 86400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_aged(secs_ago: i64) -> DirectMessage {
        let mut msg = DirectMessage::new(UserId::new(), UserId::new(), "hi");
        msg.created_at = chrono::Utc::now().timestamp() - secs_ago;
        msg
    }

    #[test]
    fn test_new_message_is_unread() {
        let msg = DirectMessage::new(UserId::new(), UserId::new(), "hello");
        assert!(!msg.is_read);
        assert_eq!(msg.content, "hello");
    }

    #[test]
    fn test_relative_time_just_now() {
        assert_eq!(message_aged(5).relative_time(), "Just now");
    }

    #[test]
    fn test_relative_time_minutes() {
        assert_eq!(message_aged(5 * 60).relative_time(), "5m ago");
    }

    #[test]
    fn test_relative_time_hours() {
        assert_eq!(message_aged(2 * 3600).relative_time(), "2h ago");
    }

    #[test]
    fn test_relative_time_yesterday() {
        assert_eq!(message_aged(30 * 3600).relative_time(), "Yesterday");
    }

    #[test]
    fn test_relative_time_days() {
        assert_eq!(message_aged(3 * 86400 + 60).relative_time(), "3d ago");
    }
}
