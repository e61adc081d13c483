//! Search page - keyword search across post titles and content.

use dioxus::prelude::*;
use educonnect_core::Post;
use educonnect_ui::reveal::RevealPlan;
use educonnect_ui::SearchInput;

use crate::components::cards::PostCard;
use crate::components::{NavHeader, NavLocation};
use crate::context::{use_engine, use_engine_ready};
use crate::pages::post_rows;

/// Search page component.
///
/// Results refresh as the term changes; a blank term shows the prompt
/// instead of the whole feed. Only the first batch of results animates
/// in: the reveal plan is pinned to the term that produced it, and
/// any later search renders its results in place.
#[component]
pub fn Search() -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();

    let mut term = use_signal(String::new);
    let mut results: Signal<Vec<(Post, String, u64)>> = use_signal(Vec::new);

    // The plan and the term it was built for
    let mut plan: Signal<Option<(String, RevealPlan)>> = use_signal(|| None);

    // Re-run the search whenever the term changes
    use_effect(move || {
        let current = term();
        if engine_ready() {
            spawn(async move {
                let shared = engine();
                let guard = shared.read().await;
                if let Some(ref eng) = *guard {
                    match eng.search_posts(&current) {
                        Ok(found) => {
                            let rows = post_rows(eng, found);
                            if plan().is_none() && !rows.is_empty() {
                                plan.set(Some((current.clone(), RevealPlan::new(rows.len()))));
                            }
                            results.set(rows);
                        }
                        Err(e) => tracing::error!("Search failed: {}", e),
                    }
                }
            });
        }
    });

    let query = term();
    let blank = query.trim().is_empty();
    let count = results().len();

    rsx! {
        div { class: "app-shell",
            NavHeader { current: Some(NavLocation::Search) }

            main { class: "page-content",
                div { class: "page-header",
                    h1 { class: "page-title", "Search" }
                }

                SearchInput {
                    value: term(),
                    oninput: move |s: String| term.set(s),
                }

                if blank {
                    div { class: "empty-state",
                        p { class: "muted", "Search by topic, title, or anything from a post." }
                    }
                } else if results().is_empty() {
                    div { class: "empty-state",
                        h2 { class: "section-header", "No matches" }
                        p { class: "muted", "Nothing matches \"{query}\". Try a shorter term." }
                    }
                } else {
                    p { class: "muted",
                        if count == 1 {
                            "1 result for \"{query}\""
                        } else {
                            "{count} results for \"{query}\""
                        }
                    }
                    div { class: "feed-list",
                        for (index, (post, author, comments)) in results().into_iter().enumerate() {
                            PostCard {
                                key: "{post.id.to_string_repr()}",
                                delay: plan()
                                    .filter(|(planned_term, _)| *planned_term == query)
                                    .and_then(|(_, p)| p.delay(index)),
                                post,
                                author,
                                comments,
                            }
                        }
                    }
                }
            }
        }
    }
}
