//! EduConnect Core Library
//!
//! Peer-learning platform where students share study posts, swap
//! resources, and message each other.
//!
//! ## Overview
//!
//! EduConnect is a local-first study network for students. Accounts,
//! posts grouped by subject, comments, helpful votes, direct messages,
//! and attached resource files all live in a single embedded database
//! under the user's data directory. The desktop app and the CLI both
//! drive the same [`EduEngine`] facade.
//!
//! ## Core Principles
//!
//! - **Local-first**: everything works offline, nothing phones home
//! - **One facade**: the engine owns the session, callers never juggle ids
//! - **Content-addressed files**: attachments are deduplicated by hash
//!
//! ## Quick Start
//!
//! ```ignore
//! use educonnect_core::EduEngine;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = EduEngine::new("~/.local/share/educonnect")?;
//!
//!     // Register an account (also signs in)
//!     engine.register("maya@school.edu", "Maya Chen", "Riverside High", "pw")?;
//!
//!     // Share notes
//!     let post = engine.create_post(
//!         "Visualizing the quadratic formula",
//!         "Completing the square, graphed step by step...",
//!         "Mathematics",
//!         None,
//!     )?;
//!
//!     // Browse the feed
//!     for post in engine.list_posts()? {
//!         println!("[{}] {} ({} helpful)", post.subject, post.title, post.helpful_count);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod engine;
pub mod error;
pub mod seed;
pub mod storage;
pub mod types;

// Re-exports
pub use engine::{EduEngine, EngineInfo};
pub use error::{EduError, EduResult};
pub use seed::{DEFAULT_CATEGORIES, DEMO_PASSWORD};
pub use storage::Storage;
pub use types::*;
