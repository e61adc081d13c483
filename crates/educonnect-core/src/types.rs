//! Core types for EduConnect

use serde::{Deserialize, Serialize};
use ulid::Ulid;

pub mod comment;
pub mod message;
pub mod post;
pub mod resource;
pub mod user;

pub use comment::Comment;
pub use message::DirectMessage;
pub use post::Post;
pub use resource::{allowed_extension, ResourceRef, ALLOWED_EXTENSIONS, MAX_RESOURCE_BYTES};
pub use user::User;

/// Unique identifier for a user account
///
/// Uses ULID for time-ordered unique identifiers that sort lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Ulid);

impl UserId {
    /// Create a new UserId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Create a UserId from a ULID
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Convert to string representation
    pub fn to_string_repr(&self) -> String {
        self.0.to_string()
    }

    /// Parse from string representation
    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        let ulid = Ulid::from_string(s)?;
        Ok(Self(ulid))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// Unique identifier for a study post
///
/// ULIDs embed their creation time, so post ids double as a
/// newest-first sort key in storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub Ulid);

impl PostId {
    /// Create a new PostId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Create a PostId from a ULID
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Convert to string representation
    pub fn to_string_repr(&self) -> String {
        self.0.to_string()
    }

    /// Parse from string representation
    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        let ulid = Ulid::from_string(s)?;
        Ok(Self(ulid))
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "post_{}", self.0)
    }
}

/// Unique identifier for a comment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub Ulid);

impl CommentId {
    /// Create a new CommentId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Convert to string representation
    pub fn to_string_repr(&self) -> String {
        self.0.to_string()
    }

    /// Parse from string representation
    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        let ulid = Ulid::from_string(s)?;
        Ok(Self(ulid))
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "comment_{}", self.0)
    }
}

/// Unique identifier for a direct message
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Ulid);

impl MessageId {
    /// Create a new MessageId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Convert to string representation
    pub fn to_string_repr(&self) -> String {
        self.0.to_string()
    }

    /// Parse from string representation
    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        let ulid = Ulid::from_string(s)?;
        Ok(Self(ulid))
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "message_{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_new() {
        let a = UserId::new();
        let b = UserId::new();
        // Should generate different IDs
        assert_ne!(a, b);
    }

    #[test]
    fn test_user_id_display() {
        let id = UserId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("user_"));
    }

    #[test]
    fn test_post_id_display() {
        let id = PostId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("post_"));
    }

    #[test]
    fn test_post_id_string_roundtrip() {
        let id = PostId::new();
        let repr = id.to_string_repr();
        let parsed = PostId::from_string(&repr).expect("Failed to parse");
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_post_ids_sort_by_creation() {
        let first = PostId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = PostId::new();
        assert!(first.to_string_repr() < second.to_string_repr());
    }

    #[test]
    fn test_comment_id_display() {
        let id = CommentId::new();
        assert!(format!("{}", id).starts_with("comment_"));
    }

    #[test]
    fn test_message_id_display() {
        let id = MessageId::new();
        assert!(format!("{}", id).starts_with("message_"));
    }
}
