//! Subject Pills Component
//!
//! Horizontal row of subject filter pills for the feed and composer.
//! Selected pill gets a filled indigo background.

use dioxus::prelude::*;

/// Label for the pill that clears the subject filter
pub const ALL_SUBJECTS: &str = "All";

/// Prepend the "All" option to a subject list for the feed filter
pub fn subject_filter_options(subjects: &[String]) -> Vec<String> {
    let mut options = Vec::with_capacity(subjects.len() + 1);
    options.push(ALL_SUBJECTS.to_string());
    options.extend(subjects.iter().cloned());
    options
}

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// List of available subjects
    pub categories: Vec<String>,
    /// Currently selected subject
    pub selected: String,
    /// Handler called when a subject is selected
    pub on_select: EventHandler<String>,
}

/// Displays a horizontal row of selectable subject pills
///
/// # Example
///
/// ```rust,ignore
/// let mut selected = use_signal(|| "All".to_string());
///
/// rsx! {
///     CategoryPills {
///         categories: subject_filter_options(&engine_categories),
///         selected: selected(),
///         on_select: move |subject| selected.set(subject)
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    rsx! {
        div {
            class: "category-pills",
            role: "radiogroup",
            "aria-label": "Subject selection",
            for cat in props.categories.iter() {
                {
                    let chosen = cat.clone();
                    let on_select = props.on_select;
                    rsx! {
                        CategoryPill {
                            label: cat.clone(),
                            selected: props.selected == *cat,
                            on_click: move |_| on_select.call(chosen.clone()),
                        }
                    }
                }
            }
        }
    }
}

/// A single subject pill. [`CategoryPills`] renders one per subject;
/// also usable on its own where a row does not fit.
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillProps {
    /// The subject label
    pub label: String,
    /// Whether this pill is selected
    #[props(default = false)]
    pub selected: bool,
    /// Handler called when clicked
    pub on_click: EventHandler<()>,
}

#[component]
pub fn CategoryPill(props: CategoryPillProps) -> Element {
    rsx! {
        button {
            class: if props.selected { "pill selected" } else { "pill" },
            role: "radio",
            "aria-checked": if props.selected { "true" } else { "false" },
            onclick: move |_| props.on_click.call(()),
            "{props.label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use educonnect_core::DEFAULT_CATEGORIES;

    #[test]
    fn filter_options_lead_with_all() {
        let subjects: Vec<String> = DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect();
        let options = subject_filter_options(&subjects);

        assert_eq!(options.len(), DEFAULT_CATEGORIES.len() + 1);
        assert_eq!(options[0], ALL_SUBJECTS);
        assert_eq!(options[1], "Mathematics");
    }

    #[test]
    fn filter_options_on_empty_list() {
        let options = subject_filter_options(&[]);
        assert_eq!(options, vec![ALL_SUBJECTS.to_string()]);
    }
}
