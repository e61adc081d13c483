//! Navigation Header Component
//!
//! Desktop: horizontal header with logo, nav links, session controls
//! Mobile: hamburger toggle plus a collapsible link panel

use dioxus::prelude::*;
use educonnect_ui::nav::{MobileNavPanel, MobileNavState, MobileNavToggle};

use crate::app::Route;
use crate::context::{use_engine, use_engine_ready, use_session};

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Feed,
    Search,
    Messages,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::Feed => "Feed",
            NavLocation::Search => "Search",
            NavLocation::Messages => "Messages",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::Feed => Route::Feed {},
            NavLocation::Search => Route::Search {},
            NavLocation::Messages => Route::Messages {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app, if it maps to a nav link
    pub current: Option<NavLocation>,
    /// Minimal mode renders only the logo (used on auth pages)
    #[props(default)]
    pub minimal: bool,
}

/// Navigation Header component
///
/// Desktop header with:
/// - Left: "EduConnect" logo linking home
/// - Center: Navigation links with an unread badge on Messages
/// - Right: Session controls (avatar + sign out, or sign in + join)
///
/// On narrow windows the link row collapses behind a hamburger. The
/// collapsed panel holds exactly the link list; clicking the hamburger
/// flips it open or shut and nothing else touches that state.
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();
    let mut session = use_session();
    let navigator = use_navigator();

    let locations = [
        NavLocation::Home,
        NavLocation::Feed,
        NavLocation::Search,
        NavLocation::Messages,
    ];

    // The toggle exists only in the full header; the panel exists only
    // when there are links to show. Both absent halves leave the state
    // unwired and every click path a quiet no-op.
    let has_trigger = !props.minimal;
    let has_panel = !props.minimal && !locations.is_empty();
    let mut nav_state: Signal<Option<MobileNavState>> =
        use_signal(move || MobileNavState::wire(has_trigger, has_panel));

    let mut unread: Signal<u64> = use_signal(|| 0);

    // Refresh the unread badge when the engine comes up. The header
    // remounts on navigation, so this stays current without polling.
    use_effect(move || {
        if engine_ready() {
            spawn(async move {
                let shared = engine();
                let guard = shared.read().await;
                if let Some(ref eng) = *guard {
                    if let Ok(count) = eng.unread_count() {
                        unread.set(count);
                    }
                }
            });
        }
    });

    let toggle_nav = move |_: ()| {
        nav_state.with_mut(|state| {
            if let Some(st) = state {
                st.toggle();
            }
        });
    };

    let sign_out = move |_| {
        spawn(async move {
            let shared = engine();
            let mut guard = shared.write().await;
            if let Some(ref mut eng) = *guard {
                if let Err(e) = eng.sign_out() {
                    tracing::error!("Failed to sign out: {}", e);
                    return;
                }
            }
            drop(guard);
            session.set(None);
            navigator.push(Route::Home {});
        });
    };

    let user = session();

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                // Left: logo
                Link { to: Route::Home {}, class: "app-logo",
                    "Edu"
                    span { class: "logo-accent", "Connect" }
                }

                if !props.minimal {
                    // Center: navigation links (hidden on mobile via CSS)
                    nav { class: "nav-links",
                        for location in &locations {
                            Link {
                                to: location.route(),
                                class: if Some(*location) == props.current { "nav-link active" } else { "nav-link" },

                                span { "{location.display_name()}" }

                                if *location == NavLocation::Messages && unread() > 0 {
                                    span { class: "nav-badge", "{unread()}" }
                                }
                            }
                        }
                    }

                    // Right: session controls + mobile hamburger
                    div { class: "nav-session",
                        if let Some(ref u) = user {
                            Link {
                                to: Route::Profile { id: u.id.to_string_repr() },
                                class: "nav-avatar",
                                "aria-label": "Your profile",
                                "{initial(&u.name)}"
                            }
                            button {
                                r#type: "button",
                                class: "btn-badge",
                                onclick: sign_out,
                                "Sign out"
                            }
                        } else {
                            Link { to: Route::Login {}, class: "nav-link", "Sign in" }
                            Link { to: Route::Register {}, class: "btn-primary", "Join" }
                        }

                        if nav_state().is_some() {
                            MobileNavToggle { onclick: toggle_nav }
                        }
                    }
                }
            }
        }

        // Mobile link panel (styled closed until the toggle opens it)
        if let Some(state) = nav_state() {
            MobileNavPanel { state,
                for location in &locations {
                    Link {
                        to: location.route(),
                        class: if Some(*location) == props.current { "nav-link active" } else { "nav-link" },
                        "{location.display_name()}"
                    }
                }
            }
        }
    }
}

/// First letter of a display name, for the avatar circle
fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}
