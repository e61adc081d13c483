//! Comment list and composer for the post detail page

use dioxus::prelude::*;
use educonnect_core::Comment;
use educonnect_ui::{Button, TextArea};

use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct CommentSectionProps {
    /// Comments in conversation order, paired with author display names
    pub comments: Vec<(Comment, String)>,
    /// Whether the composer should be shown
    pub signed_in: bool,
    /// Disables the composer while a submit is in flight
    pub submitting: bool,
    /// Called with the draft text when the user posts a comment
    pub on_submit: EventHandler<String>,
}

/// Comments under a post, plus a composer for signed-in users.
///
/// The parent owns loading and refreshing; this component only renders
/// what it is handed and reports new drafts upward.
#[component]
pub fn CommentSection(props: CommentSectionProps) -> Element {
    let mut draft = use_signal(String::new);

    let count = props.comments.len();
    let can_post = !draft().trim().is_empty() && !props.submitting;

    let submit = move |_| {
        let text = draft().trim().to_string();
        if text.is_empty() {
            return;
        }
        props.on_submit.call(text);
        draft.set(String::new());
    };

    rsx! {
        section { class: "comment-section",
            h2 { class: "section-header",
                if count == 1 {
                    "1 comment"
                } else {
                    "{count} comments"
                }
            }

            if count > 0 {
                div { class: "comment-list",
                    for (comment, author) in props.comments.iter() {
                        div { class: "comment-item", key: "{comment.id.to_string_repr()}",
                            div { class: "comment-head",
                                span { class: "comment-author", "{author}" }
                                span { class: "comment-time", "{comment.relative_time()}" }
                            }
                            p { class: "comment-body", "{comment.content}" }
                        }
                    }
                }
            } else {
                p { class: "muted", "No comments yet. Say something helpful." }
            }

            if props.signed_in {
                div { class: "comment-composer",
                    TextArea {
                        value: draft(),
                        placeholder: "Add to the discussion...".to_string(),
                        rows: 3,
                        disabled: props.submitting,
                        oninput: move |s: String| draft.set(s),
                    }
                    Button {
                        disabled: !can_post,
                        onclick: submit,
                        if props.submitting { "Posting..." } else { "Post comment" }
                    }
                }
            } else {
                p { class: "muted",
                    Link { to: Route::Login {}, "Sign in" }
                    " to join the discussion."
                }
            }
        }
    }
}
