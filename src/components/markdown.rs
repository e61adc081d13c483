//! Markdown rendering for post bodies

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Render markdown content as HTML.
///
/// Post bodies are markdown; comments and messages stay plain text.
#[component]
pub fn Markdown(
    /// Markdown content to render
    content: ReadOnlySignal<String>,
) -> Element {
    // Convert markdown to HTML
    let html_content = use_memo(move || {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);

        let content_str = content();
        let parser = Parser::new_ext(&content_str, options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    });

    rsx! {
        div {
            class: "markdown-body",
            dangerous_inner_html: "{html_content()}",
        }
    }
}
