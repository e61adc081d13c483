//! Comments under study posts

use serde::{Deserialize, Serialize};

use crate::types::{CommentId, PostId, UserId};

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier
    pub id: CommentId,
    /// Post this comment belongs to
    pub post: PostId,
    /// Author account
    pub author: UserId,
    /// Comment body
    pub content: String,
    /// Unix timestamp of creation
    pub created_at: i64,
}

impl Comment {
    /// Create a new comment
    pub fn new(post: PostId, author: UserId, content: impl Into<String>) -> Self {
        Self {
            id: CommentId::new(),
            post,
            author,
            content: content.into(),
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Relative age for display
    pub fn relative_time(&self) -> String {
        crate::types::message::relative_time(self.created_at)
    }
}
