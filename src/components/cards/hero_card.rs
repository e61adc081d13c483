//! Home page hero banner

use std::time::Duration;

use dioxus::prelude::*;
use educonnect_ui::reveal::use_reveal_style;

use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct HeroCardProps {
    /// Whether someone is signed in (switches the call to action)
    pub signed_in: bool,
    /// Reveal delay from the home page's reveal plan
    pub delay: Option<Duration>,
}

/// The hero banner at the top of the home page.
///
/// First slot in the home reveal plan, so it fades in just ahead of
/// the featured cards below it.
#[component]
pub fn HeroCard(props: HeroCardProps) -> Element {
    let reveal = use_reveal_style(props.delay);

    rsx! {
        section {
            class: "hero-card",
            style: "{reveal}",

            h1 { class: "hero-title", "Learn together, out loud." }
            p { class: "hero-tagline",
                "Share what you just figured out, swap study notes, and "
                "mark the explanations that finally made something click."
            }

            div { class: "hero-actions",
                if props.signed_in {
                    Link { to: Route::NewPost {}, class: "btn-hero", "Share something" }
                    Link { to: Route::Feed {}, class: "btn-ghost", "Browse the feed" }
                } else {
                    Link { to: Route::Register {}, class: "btn-hero", "Join EduConnect" }
                    Link { to: Route::Login {}, class: "btn-ghost", "Sign in" }
                }
            }
        }
    }
}
