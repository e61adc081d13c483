//! Mobile navigation toggle
//!
//! On narrow windows the nav links collapse into a panel behind a
//! hamburger button. The open/closed state lives in [`MobileNavState`];
//! the panel's CSS class carries an `open` marker and the stylesheet
//! does the rest. Clicking the button is the only thing that moves the
//! state: no outside-click dismissal, no keyboard shortcuts, no
//! debouncing. Every click lands.

use dioxus::prelude::*;

/// Open/closed state of the collapsed navigation panel.
///
/// Obtained through [`MobileNavState::wire`], which refuses to produce
/// a state unless both halves of the mechanism are present. A page
/// without a hamburger button or without a panel simply carries no
/// state and no click handler, and nothing happens there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileNavState {
    open: bool,
}

impl MobileNavState {
    /// A closed panel. The panel always starts closed.
    pub fn closed() -> Self {
        Self { open: false }
    }

    /// Wire up the toggle, if the page has both the button and the
    /// panel. Returns `None` when either is missing; absence is a
    /// normal layout, not an error.
    pub fn wire(has_trigger: bool, has_panel: bool) -> Option<Self> {
        (has_trigger && has_panel).then(Self::closed)
    }

    /// Flip the panel. Toggling twice lands back where it started.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Whether the panel is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// CSS class for the panel element; the `open` marker is the only
    /// thing that changes.
    pub fn panel_class(&self) -> &'static str {
        if self.open {
            "mobile-nav open"
        } else {
            "mobile-nav"
        }
    }
}

impl Default for MobileNavState {
    fn default() -> Self {
        Self::closed()
    }
}

/// The hamburger button that drives the panel
#[component]
pub fn MobileNavToggle(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "mobile-nav-toggle",
            "aria-label": "Menu",
            onclick: move |_| onclick.call(()),
            "\u{2630}"
        }
    }
}

/// The collapsible panel; its class comes straight from the state
#[derive(Clone, PartialEq, Props)]
pub struct MobileNavPanelProps {
    /// Panel state from the wired toggle
    pub state: MobileNavState,
    /// The nav links
    pub children: Element,
}

#[component]
pub fn MobileNavPanel(props: MobileNavPanelProps) -> Element {
    rsx! {
        nav { class: "{props.state.panel_class()}", {props.children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_starts_closed() {
        assert!(!MobileNavState::closed().is_open());
        assert!(!MobileNavState::default().is_open());
    }

    #[test]
    fn wire_requires_both_halves() {
        assert!(MobileNavState::wire(false, false).is_none());
        assert!(MobileNavState::wire(true, false).is_none());
        assert!(MobileNavState::wire(false, true).is_none());

        let state = MobileNavState::wire(true, true).unwrap();
        assert!(!state.is_open());
    }

    #[test]
    fn toggle_opens_then_closes() {
        let mut state = MobileNavState::closed();

        state.toggle();
        assert!(state.is_open());

        state.toggle();
        assert!(!state.is_open());
    }

    #[test]
    fn double_toggle_is_identity_from_any_state() {
        for start_open in [false, true] {
            let mut state = MobileNavState::closed();
            if start_open {
                state.toggle();
            }
            let before = state;

            state.toggle();
            state.toggle();
            assert_eq!(state, before);
        }
    }

    #[test]
    fn panel_class_carries_open_marker() {
        let mut state = MobileNavState::closed();
        assert_eq!(state.panel_class(), "mobile-nav");

        state.toggle();
        assert_eq!(state.panel_class(), "mobile-nav open");
    }
}
