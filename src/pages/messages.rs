//! Messages page - direct message inbox plus a compose form.
//!
//! Unread rows keep their highlight for the visit that loads them;
//! the stored flags are cleared right after so the nav badge resets.

use dioxus::prelude::*;
use educonnect_core::{DirectMessage, User, UserId};
use educonnect_ui::TextArea;

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};
use crate::context::{use_engine, use_engine_ready, use_session};

/// Messages page component
#[component]
pub fn Messages() -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();
    let session = use_session();

    let mut inbox: Signal<Vec<(DirectMessage, String)>> = use_signal(Vec::new);
    let mut recipients: Signal<Vec<User>> = use_signal(Vec::new);
    let mut loading = use_signal(|| true);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let mut recipient = use_signal(String::new);
    let mut draft = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut notice: Signal<Option<String>> = use_signal(|| None);

    use_effect(move || {
        if engine_ready() && session().is_some() {
            spawn(async move {
                let shared = engine();
                let mut had_unread = false;
                {
                    let guard = shared.read().await;
                    if let Some(ref eng) = *guard {
                        match eng.inbox() {
                            Ok(list) => {
                                had_unread = list.iter().any(|m| !m.is_read);
                                let rows = list
                                    .into_iter()
                                    .map(|msg| {
                                        let sender = eng
                                            .get_user(&msg.sender)
                                            .map(|u| u.name)
                                            .unwrap_or_else(|_| "Unknown".to_string());
                                        (msg, sender)
                                    })
                                    .collect();
                                inbox.set(rows);
                            }
                            Err(e) => error.set(Some(format!("{}", e))),
                        }

                        let me = session().map(|u| u.id);
                        match eng.list_users() {
                            Ok(users) => recipients.set(
                                users
                                    .into_iter()
                                    .filter(|u| Some(&u.id) != me.as_ref())
                                    .collect(),
                            ),
                            Err(e) => tracing::error!("Failed to list accounts: {}", e),
                        }
                    }
                }
                // Clear the stored flags now that the highlights are on screen
                if had_unread {
                    let mut guard = shared.write().await;
                    if let Some(ref mut eng) = *guard {
                        if let Err(e) = eng.mark_inbox_read() {
                            tracing::warn!("Failed to mark inbox read: {}", e);
                        }
                    }
                }
                loading.set(false);
            });
        }
    });

    let send = move |_| {
        let repr = recipient();
        let Ok(to) = UserId::from_string(&repr) else {
            error.set(Some("Choose a classmate first.".to_string()));
            return;
        };
        let body = draft();
        if body.trim().is_empty() {
            return;
        }
        sending.set(true);
        spawn(async move {
            let shared = engine();
            let mut guard = shared.write().await;
            if let Some(ref mut eng) = *guard {
                match eng.send_message(&to, &body) {
                    Ok(_) => {
                        draft.set(String::new());
                        recipient.set(String::new());
                        notice.set(Some("Message sent.".to_string()));
                    }
                    Err(e) => error.set(Some(format!("{}", e))),
                }
            }
            sending.set(false);
        });
    };

    rsx! {
        div { class: "app-shell",
            NavHeader { current: Some(NavLocation::Messages) }

            main { class: "page-content",
                div { class: "page-header",
                    h1 { class: "page-title", "Messages" }
                }

                if session().is_none() {
                    div { class: "empty-state",
                        h2 { class: "section-header", "Sign in to see your inbox" }
                        p { class: "muted",
                            Link { to: Route::Login {}, "Sign in" }
                            " or "
                            Link { to: Route::Register {}, "create an account" }
                            " to message classmates."
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

                    section { class: "profile-section",
                        h2 { class: "section-header", "Send a message" }

                        div { class: "form-field",
                            span { class: "input-label", "To" }
                            select {
                                class: "recipient-select",
                                value: "{recipient()}",
                                onchange: move |e| {
                                    recipient.set(e.value());
                                    notice.set(None);
                                },
                                option { value: "", "Choose a classmate..." }
                                for user in recipients() {
                                    option {
                                        value: "{user.id.to_string_repr()}",
                                        "{user.name} ({user.school})"
                                    }
                                }
                            }
                        }

                        TextArea {
                            value: draft(),
                            oninput: move |s: String| {
                                draft.set(s);
                                notice.set(None);
                            },
                            placeholder: "Write your message...".to_string(),
                            rows: 3,
                        }

                        div { class: "post-actions",
                            if let Some(note) = notice() {
                                span { class: "muted", "{note}" }
                            }
                            button {
                                r#type: "button",
                                class: "btn-primary",
                                disabled: sending() || draft().trim().is_empty(),
                                onclick: send,
                                if sending() { "Sending..." } else { "Send" }
                            }
                        }
                    }

                    section { class: "profile-section",
                        h2 { class: "section-header", "Inbox" }

                        if loading() {
                            div { class: "loading-state",
                                p { class: "muted", "Loading messages..." }
                            }
                        } else if inbox().is_empty() {
                            div { class: "empty-state",
                                p { class: "muted", "No messages yet. Start a conversation above." }
                            }
                        } else {
                            div { class: "message-list",
                                for (msg, sender) in inbox() {
                                    div {
                                        key: "{msg.id.to_string_repr()}",
                                        class: if msg.is_read { "message-row" } else { "message-row unread" },
                                        div { class: "message-head",
                                            Link {
                                                class: "message-sender",
                                                to: Route::Profile { id: msg.sender.to_string_repr() },
                                                "{sender}"
                                            }
                                            span { class: "message-time", "{msg.relative_time()}" }
                                        }
                                        p { class: "message-body", "{msg.content}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
