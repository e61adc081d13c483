//! EduConnect UI Components
//!
//! This crate provides the Dioxus building blocks for the EduConnect
//! desktop app: form controls, subject pills, the mobile navigation
//! model, and the card reveal animation.
//!
//! ## Design Philosophy
//!
//! The UI reads like a well-kept notebook:
//! - **Ink (#1f2430)**: Body text on warm paper backgrounds
//! - **Indigo (#4f5dff)**: Links, buttons, interactive elements
//! - **Teal (#0fa3a3)**: Subjects, tags, secondary accents
//! - **Amber (#f5a623)**: Helpful votes and highlights
//!
//! ## Motion
//!
//! Cards fade in once, staggered top to bottom, when a page first
//! renders; see [`reveal`]. Nothing animates after that first pass.

pub mod components;
pub mod nav;
pub mod reveal;

pub use components::*;
pub use nav::*;
pub use reveal::*;
