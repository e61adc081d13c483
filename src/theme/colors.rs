//! Color constants for the EduConnect palette
//!
//! Warm paper backgrounds with indigo actions, teal subjects, and
//! amber votes. Mirrors the CSS custom properties in styles.rs.

#![allow(dead_code)]

// === PAPER (Backgrounds) ===
pub const PAPER: &str = "#faf7f2";
pub const PAPER_RAISED: &str = "#ffffff";
pub const PAPER_BORDER: &str = "#e6e0d6";

// === INK (Text) ===
pub const INK: &str = "#1f2430";
pub const INK_SOFT: &str = "rgba(31, 36, 48, 0.72)";
pub const INK_MUTED: &str = "rgba(31, 36, 48, 0.5)";

// === INDIGO (Actions, Links) ===
pub const INDIGO: &str = "#4f5dff";
pub const INDIGO_DEEP: &str = "#3a46d6";
pub const INDIGO_WASH: &str = "rgba(79, 93, 255, 0.12)";

// === TEAL (Subjects, Tags) ===
pub const TEAL: &str = "#0fa3a3";
pub const TEAL_WASH: &str = "rgba(15, 163, 163, 0.12)";

// === AMBER (Helpful votes, Highlights) ===
pub const AMBER: &str = "#f5a623";
pub const AMBER_WASH: &str = "rgba(245, 166, 35, 0.15)";

// === SEMANTIC ===
pub const DANGER: &str = "#d64550";
pub const SUCCESS: &str = "#2e9e5b";
