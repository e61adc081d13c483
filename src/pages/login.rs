//! Login page.

use dioxus::prelude::*;
use educonnect_ui::{Button, Input};

use crate::app::Route;
use crate::components::NavHeader;
use crate::context::{use_engine, use_session};

/// Login page component
#[component]
pub fn Login() -> Element {
    let engine = use_engine();
    let mut session = use_session();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    // Already signed in: go straight to the feed
    use_effect(move || {
        if session().is_some() {
            navigator.push(Route::Feed {});
        }
    });

    let submit = move |_| {
        let addr = email();
        let pass = password();
        if addr.trim().is_empty() || pass.is_empty() {
            error.set(Some("Enter your email and password.".to_string()));
            return;
        }
        submitting.set(true);
        spawn(async move {
            let shared = engine();
            let result = {
                let mut guard = shared.write().await;
                match *guard {
                    Some(ref mut eng) => Some(eng.sign_in(&addr, &pass)),
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
                    h1 { class: "auth-title", "Welcome back" }
                    p { class: "auth-subtitle", "Sign in to keep learning together." }

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
                        value: email(),
                        oninput: move |s: String| email.set(s),
                        label: "Email".to_string(),
                        input_type: "email".to_string(),
                        placeholder: "you@school.edu".to_string(),
                        required: true,
                    }

                    Input {
                        value: password(),
                        oninput: move |s: String| password.set(s),
                        label: "Password".to_string(),
                        input_type: "password".to_string(),
                        required: true,
                    }

                    div { class: "post-actions",
                        Button {
                            disabled: submitting(),
                            onclick: submit,
                            if submitting() { "Signing in..." } else { "Sign in" }
                        }
                    }

                    p { class: "auth-switch",
                        "New here? "
                        Link { to: Route::Register {}, "Create an account" }
                    }
                }
            }
        }
    }
}
