//! Registration page.

use dioxus::prelude::*;
use educonnect_ui::{Button, Input};

use crate::app::Route;
use crate::components::NavHeader;
use crate::context::{use_engine, use_session};

/// Registration page component
#[component]
pub fn Register() -> Element {
    let engine = use_engine();
    let mut session = use_session();
    let navigator = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut school = use_signal(String::new);
    let mut interests = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    // Already signed in: go straight to the feed
    use_effect(move || {
        if session().is_some() {
            navigator.push(Route::Feed {});
        }
    });

    let submit = move |_| {
        if password() != confirm() {
            error.set(Some("Passwords do not match.".to_string()));
            return;
        }
        submitting.set(true);
        spawn(async move {
            let shared = engine();
            let wanted = interests();
            let result = {
                let mut guard = shared.write().await;
                match *guard {
                    Some(ref mut eng) => {
                        let mut outcome = eng.register(&email(), &name(), &school(), &password());
                        if outcome.is_ok() && !wanted.trim().is_empty() {
                            outcome = eng.update_profile("", &wanted, "", "");
                        }
                        Some(outcome)
                    }
                    None => None,
                }
            };
            match result {
                Some(Ok(user)) => {
                    session.set(Some(user));
                    navigator.push(Route::Feed {});
                }
                Some(Err(e)) => error.set(Some(format!("{}", e))),
                None => {}
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "app-shell",
            NavHeader { current: None, minimal: true }

            main { class: "auth-page",
                div { class: "auth-card",
                    h1 { class: "auth-title", "Join EduConnect" }
                    p { class: "auth-subtitle", "Students teaching students." }

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
                        value: name(),
                        oninput: move |s: String| name.set(s),
                        label: "Full name".to_string(),
                        required: true,
                    }

                    Input {
                        value: email(),
                        oninput: move |s: String| email.set(s),
                        label: "Email".to_string(),
                        input_type: "email".to_string(),
                        placeholder: "you@school.edu".to_string(),
                        required: true,
                    }

                    Input {
                        value: school(),
                        oninput: move |s: String| school.set(s),
                        label: "School".to_string(),
                        required: true,
                    }

                    Input {
                        value: interests(),
                        oninput: move |s: String| interests.set(s),
                        label: "Interests".to_string(),
                        hint: "optional, comma separated".to_string(),
                        placeholder: "physics, chess, web design".to_string(),
                    }

                    Input {
                        value: password(),
                        oninput: move |s: String| password.set(s),
                        label: "Password".to_string(),
                        input_type: "password".to_string(),
                        required: true,
                    }

                    Input {
                        value: confirm(),
                        oninput: move |s: String| confirm.set(s),
                        label: "Confirm password".to_string(),
                        input_type: "password".to_string(),
                        required: true,
                    }

                    div { class: "post-actions",
                        Button {
                            disabled: submitting(),
                            onclick: submit,
                            if submitting() { "Creating account..." } else { "Create account" }
                        }
                    }

                    p { class: "auth-switch",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
