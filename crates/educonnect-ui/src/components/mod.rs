//! Reusable form and layout components
//!
//! All components lean on the shared stylesheet in the desktop app:
//! - Inter for body text, Fraunces for headings
//! - Indigo for actions, teal for subjects, amber for votes

mod button;
mod category_pills;
mod input;

pub use button::*;
pub use category_pills::*;
pub use input::*;
