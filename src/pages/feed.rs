//! Feed page - every study post, filterable by subject.

use dioxus::prelude::*;
use educonnect_core::Post;
use educonnect_ui::reveal::RevealPlan;
use educonnect_ui::{subject_filter_options, CategoryPills, ALL_SUBJECTS};

use crate::app::Route;
use crate::components::cards::PostCard;
use crate::components::{NavHeader, NavLocation};
use crate::context::{use_engine, use_engine_ready, use_session};
use crate::pages::post_rows;

/// Feed page component.
///
/// The reveal plan covers the unfiltered list shown on first render.
/// Switching the subject filter swaps the list without animating it
/// again; filtered views are later content and render in place.
#[component]
pub fn Feed() -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();
    let session = use_session();

    let mut posts: Signal<Vec<(Post, String, u64)>> = use_signal(Vec::new);
    let mut subjects: Signal<Vec<String>> = use_signal(Vec::new);
    let mut selected: Signal<String> = use_signal(|| ALL_SUBJECTS.to_string());
    let mut loading = use_signal(|| true);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    // Fixed at the first content render; the filter never rebuilds it
    let mut plan: Signal<Option<RevealPlan>> = use_signal(|| None);
    let mut filtered = use_signal(|| false);

    // Initial load: subjects for the pills, then the full feed
    use_effect(move || {
        if engine_ready() {
            spawn(async move {
                let shared = engine();
                let guard = shared.read().await;
                if let Some(ref eng) = *guard {
                    match eng.categories() {
                        Ok(list) => subjects.set(list),
                        Err(e) => tracing::error!("Failed to load subjects: {}", e),
                    }
                    match eng.list_posts() {
                        Ok(list) => {
                            let rows = post_rows(eng, list);
                            if plan().is_none() {
                                plan.set(Some(RevealPlan::new(rows.len())));
                            }
                            posts.set(rows);
                        }
                        Err(e) => error.set(Some(format!("Failed to load the feed: {}", e))),
                    }
                }
                loading.set(false);
            });
        }
    });

    // Swap the list when a pill is clicked
    let select_subject = move |subject: String| {
        selected.set(subject.clone());
        filtered.set(true);

        spawn(async move {
            let shared = engine();
            let guard = shared.read().await;
            if let Some(ref eng) = *guard {
                let result = if subject == ALL_SUBJECTS {
                    eng.list_posts()
                } else {
                    eng.list_posts_by_subject(&subject)
                };
                match result {
                    Ok(list) => posts.set(post_rows(eng, list)),
                    Err(e) => error.set(Some(format!("Failed to filter the feed: {}", e))),
                }
            }
        });
    };

    rsx! {
        div { class: "app-shell",
            NavHeader { current: Some(NavLocation::Feed) }

            main { class: "page-content",
                div { class: "page-header",
                    h1 { class: "page-title", "Study feed" }
                    if session().is_some() {
                        Link { to: Route::NewPost {}, class: "btn-primary", "Share a post" }
                    }
                }

                CategoryPills {
                    categories: subject_filter_options(&subjects()),
                    selected: selected(),
                    on_select: select_subject,
                }

                if let Some(err) = error() {
                    div { class: "error-banner",
                        span { "{err}" }
                        button {
                            class: "error-dismiss",
                            onclick: move |_| error.set(None),
                            "dismiss"
                        }
                    }
                }

                if loading() {
                    div { class: "loading-state",
                        p { class: "muted", "Loading the feed..." }
                    }
                } else if posts().is_empty() {
                    div { class: "empty-state",
                        h2 { class: "section-header", "No posts here" }
                        if selected() == ALL_SUBJECTS {
                            p { class: "muted", "The feed is empty. Share the first post!" }
                        } else {
                            p { class: "muted", "Nothing in {selected()} yet. Maybe you know something?" }
                        }
                    }
                } else {
                    div { class: "feed-list",
                        for (index, (post, author, comments)) in posts().into_iter().enumerate() {
                            PostCard {
                                key: "{post.id.to_string_repr()}",
                                delay: if filtered() { None } else { plan().and_then(|p| p.delay(index)) },
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

