//! UI Components for EduConnect.
//!
//! Warm notebook aesthetic components.

pub mod cards;
mod comment_section;
mod markdown;
mod message_compose;
mod nav_header;
mod resource_panel;

pub use comment_section::CommentSection;
pub use markdown::Markdown;
pub use message_compose::MessageCompose;
pub use nav_header::{NavHeader, NavLocation};
pub use resource_panel::ResourceSection;
