//! Form controls for the study-sharing forms.
//!
//! Each control wraps itself in a `.form-field` block so pages can
//! stack them without extra layout markup. Labels link to their
//! control through a generated element id.

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;

/// Single-line text input.
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current value
    pub value: String,
    /// Called with the full new value on every keystroke
    pub oninput: EventHandler<String>,
    /// Label rendered above the control
    #[props(default)]
    pub label: Option<String>,
    /// Short parenthetical after the label, e.g. "optional"
    #[props(default)]
    pub hint: Option<String>,
    /// HTML input type: text, email, password
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = false)]
    pub required: bool,
}

/// Labeled text input used across the auth and composer forms.
///
/// ```rust,ignore
/// Input {
///     value: email(),
///     oninput: move |s: String| email.set(s),
///     label: "Email".to_string(),
///     input_type: "email".to_string(),
///     placeholder: "you@school.edu".to_string(),
///     required: true,
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = field_id("input");

    rsx! {
        div { class: "form-field",
            FieldLabel { target: id.clone(), label: props.label, hint: props.hint }
            input {
                id: "{id}",
                class: "input-field",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Multi-line text area.
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Current value
    pub value: String,
    /// Called with the full new value on every keystroke
    pub oninput: EventHandler<String>,
    /// Label rendered above the control
    #[props(default)]
    pub label: Option<String>,
    /// Short parenthetical after the label, e.g. "markdown supported"
    #[props(default)]
    pub hint: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Visible rows; post composers use more, comment boxes fewer
    #[props(default = 4)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Multi-line input for post bodies, comments, and messages.
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = field_id("textarea");

    rsx! {
        div { class: "form-field",
            FieldLabel { target: id.clone(), label: props.label, hint: props.hint }
            textarea {
                id: "{id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Search box with a leading magnifier glyph.
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search term
    pub value: String,
    /// Called with the full new term on every keystroke
    pub oninput: EventHandler<String>,
    #[props(default = "Search study posts...".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                class: "input-field search-input",
                r#type: "search",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Label row shared by [`Input`] and [`TextArea`]. Renders nothing
/// when the field has no label.
#[component]
fn FieldLabel(target: String, label: Option<String>, hint: Option<String>) -> Element {
    let Some(text) = label else {
        return rsx! {};
    };
    rsx! {
        label { class: "input-label", r#for: "{target}",
            "{text}"
            if let Some(hint) = hint {
                span { class: "input-hint", " ({hint})" }
            }
        }
    }
}

/// Page-unique element id so labels can point at their control.
fn field_id(kind: &str) -> String {
    static NEXT: AtomicU32 = AtomicU32::new(0);
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    format!("{kind}-{n}")
}
