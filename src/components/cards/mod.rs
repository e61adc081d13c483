//! Feed Card System
//!
//! Cards for the home grid and feed lists. Entry motion is handled by
//! the reveal plan, so cards only describe their content here.

mod hero_card;
mod post_card;

pub use hero_card::HeroCard;
pub use post_card::PostCard;
