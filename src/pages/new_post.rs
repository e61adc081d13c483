//! New post page - compose and share a study post.

use std::path::PathBuf;

use dioxus::prelude::*;
use educonnect_core::ALLOWED_EXTENSIONS;
use educonnect_ui::{CategoryPills, Input, TextArea};
use rfd::FileDialog;

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};
use crate::context::{use_engine, use_engine_ready, use_session};

/// Post composer page.
///
/// Title, content, and subject are required; the link and the file are
/// optional extras. A picked file is read and attached right after the
/// post is created, then the composer hands off to the detail page.
#[component]
pub fn NewPost() -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();
    let session = use_session();
    let navigator = use_navigator();

    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut link = use_signal(String::new);
    let mut picked: Signal<Option<PathBuf>> = use_signal(|| None);

    let mut subjects: Signal<Vec<String>> = use_signal(Vec::new);
    let mut submitting = use_signal(|| false);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    // Subject pills come from the category table
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
                }
            });
        }
    });

    let pick_file = move |_| {
        spawn(async move {
            let choice = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("study files", ALLOWED_EXTENSIONS)
                    .set_title("Attach a file")
                    .pick_file()
            })
            .await;

            if let Ok(Some(path)) = choice {
                picked.set(Some(path));
            }
        });
    };

    let submit = move |_| {
        if submitting() {
            return;
        }
        submitting.set(true);
        error.set(None);

        spawn(async move {
            // Read the picked file before touching the engine so the
            // lock isn't held across file IO
            let mut file_data: Option<(String, Vec<u8>)> = None;
            if let Some(path) = picked() {
                let filename = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("attachment")
                    .to_string();
                match tokio::fs::read(&path).await {
                    Ok(data) => file_data = Some((filename, data)),
                    Err(e) => tracing::error!("Failed to read picked file: {}", e),
                }
            }

            let shared = engine();
            let mut guard = shared.write().await;
            let Some(ref mut eng) = *guard else {
                submitting.set(false);
                return;
            };

            let post = match eng.create_post(&title(), &content(), &subject(), Some(&link())) {
                Ok(post) => post,
                Err(e) => {
                    error.set(Some(format!("{}", e)));
                    submitting.set(false);
                    return;
                }
            };

            // The file rides along after the post exists. An attach
            // failure keeps the post; the detail page offers a retry.
            if let Some((filename, data)) = file_data {
                if let Err(e) = eng.attach_resource(&post.id, &filename, data) {
                    tracing::error!("Failed to attach file to new post: {}", e);
                }
            }

            drop(guard);
            navigator.push(Route::PostDetail {
                id: post.id.to_string_repr(),
            });
        });
    };

    let picked_name = picked().and_then(|p| {
        p.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_string())
    });

    rsx! {
        div { class: "app-shell",
            NavHeader { current: None }

            main { class: "page-content",
                div { class: "page-header",
                    h1 { class: "page-title", "Share a post" }
                }

                if session().is_none() {
                    div { class: "empty-state",
                        h2 { class: "section-header", "Sign in to share" }
                        p { class: "muted",
                            Link { to: Route::Login {}, "Sign in" }
                            " or "
                            Link { to: Route::Register {}, "create an account" }
                            " to post to the feed."
                        }
                    }
                } else {
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

                    Input {
                        value: title(),
                        oninput: move |s: String| title.set(s),
                        label: "Title".to_string(),
                        placeholder: "What did you figure out?".to_string(),
                        required: true,
                    }

                    TextArea {
                        value: content(),
                        oninput: move |s: String| content.set(s),
                        label: "Notes".to_string(),
                        hint: "markdown supported".to_string(),
                        placeholder: "Explain it like you'd explain it to a classmate...".to_string(),
                        rows: 8,
                        required: true,
                    }

                    div { class: "form-field",
                        span { class: "input-label", "Subject" }
                        CategoryPills {
                            categories: subjects(),
                            selected: subject(),
                            on_select: move |s: String| subject.set(s),
                        }
                    }

                    Input {
                        value: link(),
                        oninput: move |s: String| link.set(s),
                        label: "Resource link".to_string(),
                        hint: "optional".to_string(),
                        placeholder: "https://...".to_string(),
                    }

                    div { class: "form-field",
                        span { class: "input-label", "Attachment" }
                        if let Some(name) = picked_name {
                            div { class: "attachment-chip",
                                span { "\u{1F4CE} {name}" }
                                button {
                                    r#type: "button",
                                    class: "btn-badge",
                                    onclick: move |_| picked.set(None),
                                    "Remove"
                                }
                            }
                        } else {
                            button {
                                r#type: "button",
                                class: "btn-ghost",
                                onclick: pick_file,
                                "Attach a file"
                            }
                            span { class: "muted", " PDF, images, and office docs up to 10 MB." }
                        }
                    }

                    div { class: "post-actions",
                        button {
                            r#type: "button",
                            class: "btn-primary",
                            disabled: submitting(),
                            onclick: submit,
                            if submitting() { "Sharing..." } else { "Share post" }
                        }
                    }
                }
            }
        }
    }
}
