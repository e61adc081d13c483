//! Post detail page - full post with votes, comments, and attachments.

use dioxus::prelude::*;
use educonnect_core::{Comment, EduEngine, Post, PostId};
use educonnect_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::components::{CommentSection, Markdown, NavHeader, ResourceSection};
use crate::context::{use_engine, use_engine_ready, use_session};

/// Post detail page component.
///
/// Loads the post for the route's id plus its comments and the
/// signed-in user's vote state. An id that doesn't parse or doesn't
/// resolve renders the not-found state instead of erroring.
#[component]
pub fn PostDetail(id: String) -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();
    let session = use_session();
    let navigator = use_navigator();

    let post_id = PostId::from_string(&id).ok();

    // The post paired with its author's display name
    let mut detail: Signal<Option<(Post, String)>> = use_signal(|| None);
    let mut comments: Signal<Vec<(Comment, String)>> = use_signal(Vec::new);
    let mut voted = use_signal(|| false);
    let mut loading = use_signal(|| true);
    let mut comment_busy = use_signal(|| false);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let load_id = post_id.clone();
    use_effect(move || {
        if engine_ready() {
            let Some(pid) = load_id.clone() else {
                loading.set(false);
                return;
            };
            spawn(async move {
                let shared = engine();
                let guard = shared.read().await;
                if let Some(ref eng) = *guard {
                    match eng.get_post(&pid) {
                        Ok(post) => {
                            let author = eng
                                .get_user(&post.author)
                                .map(|u| u.name)
                                .unwrap_or_else(|_| "Unknown".to_string());
                            detail.set(Some((post, author)));

                            match eng.comments(&pid) {
                                Ok(list) => comments.set(comment_rows(eng, list)),
                                Err(e) => tracing::error!("Failed to load comments: {}", e),
                            }
                            voted.set(eng.has_voted(&pid).unwrap_or(false));
                        }
                        Err(e) => {
                            tracing::warn!("Post lookup failed: {}", e);
                        }
                    }
                }
                loading.set(false);
            });
        }
    });

    let vote_id = post_id.clone();
    let toggle_vote = move |_| {
        let Some(pid) = vote_id.clone() else { return };
        spawn(async move {
            let shared = engine();
            let mut guard = shared.write().await;
            if let Some(ref mut eng) = *guard {
                match eng.toggle_helpful(&pid) {
                    Ok((now_voted, count)) => {
                        voted.set(now_voted);
                        detail.with_mut(|d| {
                            if let Some((post, _)) = d {
                                post.helpful_count = count;
                            }
                        });
                    }
                    Err(e) => error.set(Some(format!("{}", e))),
                }
            }
        });
    };

    let comment_id = post_id.clone();
    let submit_comment = move |text: String| {
        let Some(pid) = comment_id.clone() else { return };
        comment_busy.set(true);
        spawn(async move {
            let shared = engine();
            let mut guard = shared.write().await;
            if let Some(ref mut eng) = *guard {
                if let Err(e) = eng.add_comment(&pid, &text) {
                    error.set(Some(format!("{}", e)));
                }
                // Reload so the new comment shows with its author
                match eng.comments(&pid) {
                    Ok(list) => comments.set(comment_rows(eng, list)),
                    Err(e) => tracing::error!("Failed to reload comments: {}", e),
                }
            }
            comment_busy.set(false);
        });
    };

    let delete_id = post_id.clone();
    let delete_post = move |_| {
        let Some(pid) = delete_id.clone() else { return };
        spawn(async move {
            let shared = engine();
            let mut guard = shared.write().await;
            if let Some(ref mut eng) = *guard {
                if let Err(e) = eng.delete_post(&pid) {
                    error.set(Some(format!("{}", e)));
                    return;
                }
            }
            drop(guard);
            navigator.push(Route::Feed {});
        });
    };

    let user = session();
    let signed_in = user.is_some();
    let is_author = match (&user, &detail()) {
        (Some(u), Some((post, _))) => u.id == post.author,
        _ => false,
    };

    rsx! {
        div { class: "app-shell",
            NavHeader { current: None }

            main { class: "page-content",
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
                        p { class: "muted", "Loading post..." }
                    }
                } else if let Some((post, author)) = detail() {
                    article {
                        header { class: "post-detail-header",
                            span { class: "subject-chip", "{post.subject}" }
                            span { class: "muted", "{post.relative_time()}" }
                        }

                        h1 { class: "post-detail-title", "{post.title}" }
                        p { class: "muted",
                            "by "
                            Link {
                                to: Route::Profile { id: post.author.to_string_repr() },
                                "{author}"
                            }
                        }

                        div { class: "post-detail-body",
                            Markdown { content: post.content.clone() }
                        }

                        if let Some(ref link) = post.resource_link {
                            a { class: "resource-link", href: "{link}", "\u{1F517} {link}" }
                        }

                        ResourceSection {
                            post_id: post.id.clone(),
                            resource: post.resource.clone(),
                            is_author,
                            on_attached: move |res| {
                                detail.with_mut(|d| {
                                    if let Some((p, _)) = d {
                                        p.resource = Some(res);
                                    }
                                });
                            },
                        }

                        div { class: "post-actions",
                            Button {
                                variant: ButtonVariant::Vote,
                                class: voted().then(|| "voted".to_string()),
                                disabled: !signed_in,
                                onclick: toggle_vote,
                                if voted() {
                                    "\u{2605} Helpful ({post.helpful_count})"
                                } else {
                                    "\u{2606} Helpful ({post.helpful_count})"
                                }
                            }
                            if !signed_in {
                                span { class: "muted", "Sign in to mark posts helpful." }
                            }
                            if is_author {
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    onclick: delete_post,
                                    "Delete post"
                                }
                            }
                        }

                        CommentSection {
                            comments: comments(),
                            signed_in,
                            submitting: comment_busy(),
                            on_submit: submit_comment,
                        }
                    }
                } else {
                    div { class: "empty-state",
                        h2 { class: "section-header", "Post not found" }
                        p { class: "muted",
                            "It may have been deleted. "
                            Link { to: Route::Feed {}, "Back to the feed" }
                        }
                    }
                }
            }
        }
    }
}

/// Pair comments with their authors' display names
fn comment_rows(eng: &EduEngine, comments: Vec<Comment>) -> Vec<(Comment, String)> {
    comments
        .into_iter()
        .map(|comment| {
            let author = eng
                .get_user(&comment.author)
                .map(|u| u.name)
                .unwrap_or_else(|_| "Unknown".to_string());
            (comment, author)
        })
        .collect()
}
