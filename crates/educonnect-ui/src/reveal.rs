//! Staggered card reveal
//!
//! When a page first renders real content it counts its cards, top to
//! bottom, and builds a [`RevealPlan`]. Every planned card starts
//! hidden (transparent, nudged 12px down) and gets one timer; when the
//! timer fires the card turns on its transition and eases to its final
//! place. The plan is built once: cards that show up later are outside
//! the plan and render in place with no animation, and a card that
//! unmounts before its timer fires just drops the timer.
//!
//! Delays are staggered so the page appears to deal itself out:
//! 80ms for the first card, then 40ms more for each card after it.

use std::time::Duration;

use dioxus::prelude::*;

/// Delay before the first card reveals
pub const REVEAL_BASE_DELAY_MS: u64 = 80;
/// Additional delay per card after the first
pub const REVEAL_STAGGER_MS: u64 = 40;

/// Inline style for a card waiting on its timer
pub const HIDDEN_STYLE: &str = "opacity: 0; transform: translateY(12px);";
/// Inline style once the timer fires; the transition rides along so
/// the change eases instead of snapping
pub const VISIBLE_STYLE: &str =
    "transition: opacity 0.6s ease, transform 0.6s ease; opacity: 1; transform: translateY(0);";

/// One page's worth of reveal timing, fixed at first content render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealPlan {
    count: usize,
}

impl RevealPlan {
    /// Plan for `count` cards in document order.
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Number of cards in the plan.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the plan covers no cards at all. An empty plan
    /// schedules nothing.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Delay for the card at `index`, or `None` if the card is outside
    /// the plan (added after the page settled).
    pub fn delay(&self, index: usize) -> Option<Duration> {
        if index >= self.count {
            return None;
        }
        Some(Duration::from_millis(
            REVEAL_BASE_DELAY_MS + index as u64 * REVEAL_STAGGER_MS,
        ))
    }

    /// Delay of the last card, after which the page is fully revealed.
    pub fn last_delay(&self) -> Option<Duration> {
        self.count.checked_sub(1).and_then(|last| self.delay(last))
    }

    /// How many cards have revealed once `elapsed` has passed.
    pub fn revealed_after(&self, elapsed: Duration) -> usize {
        let elapsed_ms = elapsed.as_millis() as u64;
        if elapsed_ms < REVEAL_BASE_DELAY_MS {
            return 0;
        }
        let fired = (elapsed_ms - REVEAL_BASE_DELAY_MS) / REVEAL_STAGGER_MS + 1;
        (fired as usize).min(self.count)
    }
}

/// Per-card reveal hook.
///
/// Pass the card's delay from [`RevealPlan::delay`]. Returns the inline
/// style for the card's current phase: hidden until the timer fires,
/// then visible with its transition. Cards outside the plan (`None`)
/// get no inline style and render wherever the stylesheet puts them.
pub fn use_reveal_style(delay: Option<Duration>) -> String {
    let mut revealed = use_signal(|| false);

    // One timer per mounted card; dropped with the component if the
    // card goes away first.
    use_future(move || async move {
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
            revealed.set(true);
        }
    });

    match delay {
        None => String::new(),
        Some(_) if revealed() => VISIBLE_STYLE.to_string(),
        Some(_) => HIDDEN_STYLE.to_string(),
    }
}
