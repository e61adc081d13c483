//! Home page - hero banner plus the newest study posts.

use dioxus::prelude::*;
use educonnect_core::Post;
use educonnect_ui::reveal::RevealPlan;

use crate::components::cards::{HeroCard, PostCard};
use crate::components::{NavHeader, NavLocation};
use crate::context::{use_engine, use_engine_ready, use_session};
use crate::pages::post_rows;

/// The home page shows this many of the newest posts
const FEATURED_LIMIT: usize = 6;

/// Home page component.
///
/// The hero banner and the featured cards share one reveal plan, fixed
/// the first time content renders: the hero takes slot 0 and each
/// featured card follows it down the page.
#[component]
pub fn Home() -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();
    let session = use_session();

    // Featured posts, paired with author name and comment count
    let mut featured: Signal<Vec<(Post, String, u64)>> = use_signal(Vec::new);
    let mut loading = use_signal(|| true);
    let mut plan: Signal<Option<RevealPlan>> = use_signal(|| None);

    // Load the featured posts when the engine comes up
    use_effect(move || {
        if engine_ready() {
            spawn(async move {
                let shared = engine();
                let guard = shared.read().await;
                if let Some(ref eng) = *guard {
                    match eng.featured_posts(FEATURED_LIMIT) {
                        Ok(posts) => {
                            let rows = post_rows(eng, posts);
                            // One slot for the hero, one per card. Set
                            // once; later refreshes reuse the plan.
                            if plan().is_none() {
                                plan.set(Some(RevealPlan::new(rows.len() + 1)));
                            }
                            featured.set(rows);
                        }
                        Err(e) => tracing::error!("Failed to load featured posts: {}", e),
                    }
                }
                loading.set(false);
            });
        }
    });

    rsx! {
        div { class: "app-shell",
            NavHeader { current: Some(NavLocation::Home) }

            main { class: "page-content",
                HeroCard {
                    signed_in: session().is_some(),
                    delay: plan().and_then(|p| p.delay(0)),
                }

                if loading() {
                    div { class: "loading-state",
                        p { class: "muted", "Loading the feed..." }
                    }
                } else if featured().is_empty() {
                    div { class: "empty-state",
                        h2 { class: "section-header", "Nothing here yet" }
                        p { class: "muted", "Be the first to share something you figured out." }
                    }
                } else {
                    h2 { class: "section-header", "Fresh from the feed" }
                    div { class: "card-grid",
                        for (index, (post, author, comments)) in featured().into_iter().enumerate() {
                            PostCard {
                                key: "{post.id.to_string_repr()}",
                                delay: plan().and_then(|p| p.delay(index + 1)),
                                post,
                                author,
                                comments,
                            }
                        }
                    }
                }
            }

            footer { class: "app-footer",
                span { "students teaching students" }
            }
        }
    }
}
