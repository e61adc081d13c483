//! Message Compose Modal
//!
//! Modal dialog for composing and sending a direct message to another
//! student.

use dioxus::prelude::*;
use educonnect_ui::{Button, ButtonVariant, CloseButton, TextArea};

/// Message compose modal for sending direct messages
#[component]
pub fn MessageCompose(
    /// Recipient's display name
    recipient_name: String,
    /// Handler called when message is sent (receives message content)
    on_send: EventHandler<String>,
    /// Handler called when modal is closed
    on_close: EventHandler<()>,
) -> Element {
    let mut message_content = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let handle_send = move |_| {
        let content = message_content();
        if content.trim().is_empty() {
            return;
        }

        sending.set(true);
        on_send.call(content);
    };

    let handle_close = move |_| {
        on_close.call(());
    };

    // Handle keyboard shortcuts
    let handle_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Escape {
            on_close.call(());
        } else if e.key() == Key::Enter && e.modifiers().ctrl() {
            // Ctrl+Enter to send
            let content = message_content();
            if !content.trim().is_empty() {
                sending.set(true);
                on_send.call(content);
            }
        }
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: handle_close,
            onkeydown: handle_keydown,

            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),

                // Header
                header { class: "modal-header",
                    h2 { class: "modal-title", "Send Message" }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }

                // Recipient info
                div { class: "message-recipient",
                    span { class: "muted", "To: " }
                    span { class: "message-sender", "{recipient_name}" }
                }

                TextArea {
                    value: message_content(),
                    oninput: move |s: String| message_content.set(s),
                    placeholder: "Type your message...".to_string(),
                    rows: 4,
                    disabled: sending(),
                }

                // Actions
                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        disabled: sending(),
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        disabled: sending() || message_content().trim().is_empty(),
                        onclick: handle_send,
                        if sending() {
                            "Sending..."
                        } else {
                            "Send"
                        }
                    }
                }
            }
        }
    }
}
