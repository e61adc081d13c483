//! Engine context provider for EduConnect.
//!
//! Provides the EduEngine instance to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(engine));
//!
//! // In child components
//! let engine = use_engine();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use educonnect_core::{EduEngine, User};
use tokio::sync::RwLock;

/// Shared engine type for context.
///
/// The engine is wrapped in Arc<RwLock<>> to allow:
/// - Multiple components to read concurrently
/// - Safe mutation when needed
pub type SharedEngine = Arc<RwLock<Option<EduEngine>>>;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Hook to access the EduEngine from context.
///
/// Returns a Signal containing the shared engine state.
///
/// # Example
///
/// ```ignore
/// let engine = use_engine();
///
/// // Read engine state
/// if let Some(ref eng) = *engine.read().await {
///     let posts = eng.list_posts()?;
/// }
/// ```
pub fn use_engine() -> Signal<SharedEngine> {
    use_context::<Signal<SharedEngine>>()
}

/// Hook to check if the engine is initialized.
///
/// Returns a reactive signal that updates when engine state changes.
pub fn use_engine_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Hook to access the signed-in user from context.
///
/// Mirrors the engine's session so components can render account state
/// without taking the engine lock. Pages that sign in, sign out, or
/// edit the profile update this signal after the engine call succeeds.
pub fn use_session() -> Signal<Option<User>> {
    use_context::<Signal<Option<User>>>()
}
