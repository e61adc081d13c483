//! Study posts
//!
//! A post is a piece of shared study material: markdown content under a
//! subject category, optionally with an external link or an attached
//! resource file.

use serde::{Deserialize, Serialize};

use crate::types::{PostId, ResourceRef, UserId};

/// A study post in the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier
    pub id: PostId,
    /// Post title
    pub title: String,
    /// Markdown body
    pub content: String,
    /// Subject category name, e.g. "Mathematics"
    pub subject: String,
    /// Optional external resource URL
    pub resource_link: Option<String>,
    /// Optional attached file, content-addressed
    pub resource: Option<ResourceRef>,
    /// Author account
    pub author: UserId,
    /// Unix timestamp of creation
    pub created_at: i64,
    /// Denormalized helpful-vote count, kept in step with the vote marks
    pub helpful_count: u32,
}

impl Post {
    /// Create a new post with no votes and no attachments
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        subject: impl Into<String>,
        author: UserId,
    ) -> Self {
        Self {
            id: PostId::new(),
            title: title.into(),
            content: content.into(),
            subject: subject.into(),
            resource_link: None,
            resource: None,
            author,
            created_at: chrono::Utc::now().timestamp(),
            helpful_count: 0,
        }
    }

    /// Content preview for feed cards, truncated on a char boundary
    /// with a trailing ellipsis when cut.
    pub fn preview(&self, max_chars: usize) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}...", head.trim_end())
        } else {
            head
        }
    }

    /// Relative age for card display
    pub fn relative_time(&self) -> String {
        crate::types::message::relative_time(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(content: &str) -> Post {
        Post::new("Title", content, "Mathematics", UserId::new())
    }

    #[test]
    fn test_new_post_defaults() {
        let post = sample_post("Body");
        assert_eq!(post.helpful_count, 0);
        assert!(post.resource_link.is_none());
        assert!(post.resource.is_none());
    }

    #[test]
    fn test_preview_short_content_untouched() {
        let post = sample_post("short body");
        assert_eq!(post.preview(150), "short body");
    }

    #[test]
    fn test_preview_truncates_with_ellipsis() {
        let post = sample_post(&"x".repeat(200));
        let preview = post.preview(150);
        assert_eq!(preview.chars().count(), 153);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let post = sample_post("héllo wörld with ünïcödé content");
        // Must not panic on multi-byte boundaries
        let _ = post.preview(7);
    }
}
