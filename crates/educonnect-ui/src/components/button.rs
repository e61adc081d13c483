//! Buttons for the study-sharing surfaces.
//!
//! One `Button` component with a variant per visual role:
//! - Primary: filled indigo, the main action on a page
//! - Badge: small pill button for inline actions
//! - Hero: large call-to-action on the home hero card
//! - Vote: amber helpful-vote toggle
//! - Ghost: bordered secondary action

use dioxus::prelude::*;

/// Visual role of a [`Button`]. Maps one-to-one onto a stylesheet
/// class, so what each role looks like lives entirely in CSS.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Badge,
    Hero,
    Vote,
    Ghost,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Badge => "btn-badge",
            ButtonVariant::Hero => "btn-hero",
            ButtonVariant::Vote => "btn-vote",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual role; defaults to the primary action style
    #[props(default)]
    pub variant: ButtonVariant,
    /// Extra classes appended after the variant class, e.g. a
    /// `"voted"` marker on the vote button
    #[props(default)]
    pub class: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
    pub onclick: EventHandler<()>,
    pub children: Element,
}

/// Click-action button.
///
/// Always renders `type="button"`; the forms here submit through
/// handlers, never through native form submission.
///
/// ```rust,ignore
/// Button {
///     variant: ButtonVariant::Vote,
///     class: voted().then(|| "voted".to_string()),
///     onclick: toggle_vote,
///     "Helpful"
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: compose_class(props.variant.class(), props.class.as_deref()),
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Compact square button holding a single glyph.
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The glyph (character or element)
    pub children: Element,
    pub onclick: EventHandler<()>,
    /// Accessible label, since a glyph alone says nothing
    pub aria_label: String,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    rsx! {
        button {
            class: compose_class("icon-btn", props.class.as_deref()),
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Modal dismiss button with the multiplication-sign glyph.
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}

/// Join a base class with an optional modifier list.
fn compose_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_classes_match_stylesheet() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Badge.class(), "btn-badge");
        assert_eq!(ButtonVariant::Hero.class(), "btn-hero");
        assert_eq!(ButtonVariant::Vote.class(), "btn-vote");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn default_variant_is_primary() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn compose_class_appends_only_real_modifiers() {
        assert_eq!(compose_class("btn-vote", None), "btn-vote");
        assert_eq!(compose_class("btn-vote", Some("")), "btn-vote");
        assert_eq!(compose_class("btn-vote", Some("voted")), "btn-vote voted");
    }
}
