//! Post card for feed lists and the home grid

use std::time::Duration;

use dioxus::prelude::*;
use educonnect_core::Post;
use educonnect_ui::reveal::use_reveal_style;

use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct PostCardProps {
    /// The post to display
    pub post: Post,
    /// Author display name
    pub author: String,
    /// Comment count for the meta row
    pub comments: u64,
    /// Reveal delay assigned by the page's reveal plan, if any
    pub delay: Option<Duration>,
}

/// A single post in a feed list or card grid.
///
/// Cards handed a reveal delay mount hidden and fade in when the delay
/// elapses. Cards without one (rendered after the first pass) appear
/// immediately.
#[component]
pub fn PostCard(props: PostCardProps) -> Element {
    let reveal = use_reveal_style(props.delay);
    let post = &props.post;

    rsx! {
        article {
            class: "card post-card",
            style: "{reveal}",

            div { class: "post-card-header",
                span { class: "subject-chip", "{post.subject}" }
                span { class: "muted", "{post.relative_time()}" }
            }

            h3 { class: "post-title",
                Link {
                    to: Route::PostDetail { id: post.id.to_string_repr() },
                    "{post.title}"
                }
            }

            p { class: "post-preview", "{post.preview(160)}" }

            div { class: "post-meta",
                span { class: "meta-author", "{props.author}" }
                span { class: "meta-helpful", "{post.helpful_count} helpful" }
                span { "{props.comments} comments" }
                if post.resource.is_some() {
                    span { "\u{1F4CE} attachment" }
                }
            }
        }
    }
}
