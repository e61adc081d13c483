//! Profile page - a student's public profile and their posts.
//!
//! Everyone sees the profile fields and the post list. The signed-in
//! owner edits bio, interests, achievements, and projects inline.

use dioxus::prelude::*;
use educonnect_core::{Post, User, UserId};
use educonnect_ui::reveal::RevealPlan;
use educonnect_ui::{Button, ButtonVariant, TextArea};

use crate::components::cards::PostCard;
use crate::components::{MessageCompose, NavHeader};
use crate::context::{use_engine, use_engine_ready, use_session};
use crate::pages::post_rows;

/// The four profile fields the owner can edit in place
#[derive(Clone, Copy, PartialEq)]
enum ProfileField {
    Bio,
    Interests,
    Achievements,
    Projects,
}

impl ProfileField {
    const ALL: [ProfileField; 4] = [
        ProfileField::Bio,
        ProfileField::Interests,
        ProfileField::Achievements,
        ProfileField::Projects,
    ];

    fn title(self) -> &'static str {
        match self {
            ProfileField::Bio => "About",
            ProfileField::Interests => "Interests",
            ProfileField::Achievements => "Achievements",
            ProfileField::Projects => "Projects",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            ProfileField::Bio => "Nothing here yet.",
            ProfileField::Interests => "No interests listed.",
            ProfileField::Achievements => "No achievements listed.",
            ProfileField::Projects => "No projects listed.",
        }
    }

    fn value(self, user: &User) -> &str {
        match self {
            ProfileField::Bio => &user.bio,
            ProfileField::Interests => &user.interests,
            ProfileField::Achievements => &user.achievements,
            ProfileField::Projects => &user.projects,
        }
    }
}

/// Profile page component
#[component]
pub fn Profile(id: String) -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();
    let mut session = use_session();

    let user_id = UserId::from_string(&id).ok();

    let mut viewed: Signal<Option<User>> = use_signal(|| None);
    let mut posts: Signal<Vec<(Post, String, u64)>> = use_signal(Vec::new);
    let mut plan: Signal<Option<RevealPlan>> = use_signal(|| None);
    let mut loading = use_signal(|| true);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    // Inline editing state: which field, and the draft text
    let mut editing: Signal<Option<ProfileField>> = use_signal(|| None);
    let mut edit_value = use_signal(String::new);

    let mut email_copied = use_signal(|| false);
    let mut show_compose = use_signal(|| false);

    let load_id = user_id.clone();
    use_effect(move || {
        if engine_ready() {
            let Some(uid) = load_id.clone() else {
                loading.set(false);
                return;
            };
            spawn(async move {
                let shared = engine();
                let guard = shared.read().await;
                if let Some(ref eng) = *guard {
                    match eng.get_user(&uid) {
                        Ok(user) => {
                            match eng.posts_by_author(&user.id) {
                                Ok(list) => {
                                    let rows = post_rows(eng, list);
                                    if plan().is_none() {
                                        plan.set(Some(RevealPlan::new(rows.len())));
                                    }
                                    posts.set(rows);
                                }
                                Err(e) => tracing::error!("Failed to load posts: {}", e),
                            }
                            viewed.set(Some(user));
                        }
                        Err(e) => tracing::warn!("Profile lookup failed: {}", e),
                    }
                }
                loading.set(false);
            });
        }
    });

    let copy_email = move |_| {
        let Some(user) = viewed() else { return };
        spawn(async move {
            match arboard::Clipboard::new() {
                Ok(mut clipboard) => {
                    if clipboard.set_text(&user.email).is_ok() {
                        email_copied.set(true);
                        tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                        email_copied.set(false);
                    }
                }
                Err(e) => tracing::warn!("Clipboard not available: {}", e),
            }
        });
    };

    let save_edit = move |_| {
        let Some(field) = editing() else { return };
        let Some(user) = viewed() else { return };
        let draft = edit_value();
        spawn(async move {
            let (bio, interests, achievements, projects) = merged(&user, field, &draft);
            let shared = engine();
            let mut guard = shared.write().await;
            if let Some(ref mut eng) = *guard {
                match eng.update_profile(&bio, &interests, &achievements, &projects) {
                    Ok(updated) => {
                        session.set(Some(updated.clone()));
                        viewed.set(Some(updated));
                        editing.set(None);
                    }
                    Err(e) => error.set(Some(format!("{}", e))),
                }
            }
        });
    };

    let send_message = move |content: String| {
        let Some(user) = viewed() else { return };
        spawn(async move {
            let shared = engine();
            let mut guard = shared.write().await;
            if let Some(ref mut eng) = *guard {
                if let Err(e) = eng.send_message(&user.id, &content) {
                    error.set(Some(format!("{}", e)));
                }
            }
            show_compose.set(false);
        });
    };

    let current = session();
    let is_own = match (&current, &viewed()) {
        (Some(me), Some(them)) => me.id == them.id,
        _ => false,
    };
    let signed_in = current.is_some();

    rsx! {
        div { class: "app-shell",
            NavHeader { current: None }

            main { class: "page-content",
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

                if loading() {
                    div { class: "loading-state",
                        p { class: "muted", "Loading profile..." }
                    }
                } else if let Some(user) = viewed() {
                    header { class: "profile-header",
                        div { class: "profile-avatar", "{initial(&user.name)}" }
                        div { class: "profile-identity",
                            h1 { class: "profile-name", "{user.name}" }
                            p { class: "profile-school", "{user.school}" }
                            p { class: "profile-joined", "Joined {user.joined()}" }
                        }
                        div { class: "profile-actions",
                            Button {
                                variant: ButtonVariant::Badge,
                                class: if email_copied() { "copy-email-btn copied".to_string() } else { "copy-email-btn".to_string() },
                                onclick: copy_email,
                                if email_copied() { "Copied!" } else { "Copy email" }
                            }
                            if signed_in && !is_own {
                                Button {
                                    onclick: move |_| show_compose.set(true),
                                    "Send message"
                                }
                            }
                        }
                    }

                    for field in ProfileField::ALL {
                        {
                            let u = user.clone();
                            let text = field.value(&u).to_string();
                            rsx! {
                                section { class: "profile-section",
                                    div { class: "page-header",
                                        h2 { class: "section-header", "{field.title()}" }
                                        if is_own && editing() != Some(field) {
                                            button {
                                                r#type: "button",
                                                class: "btn-badge",
                                                onclick: move |_| {
                                                    edit_value.set(field.value(&u).to_string());
                                                    editing.set(Some(field));
                                                },
                                                "Edit"
                                            }
                                        }
                                    }

                                    if editing() == Some(field) {
                                        TextArea {
                                            value: edit_value(),
                                            oninput: move |s: String| edit_value.set(s),
                                            rows: 3,
                                        }
                                        div { class: "modal-actions",
                                            button {
                                                r#type: "button",
                                                class: "btn-ghost",
                                                onclick: move |_| editing.set(None),
                                                "Cancel"
                                            }
                                            button {
                                                r#type: "button",
                                                class: "btn-primary",
                                                onclick: save_edit,
                                                "Save"
                                            }
                                        }
                                    } else if field == ProfileField::Interests && !text.is_empty() {
                                        div { class: "interest-tags",
                                            for interest in user.interest_list() {
                                                span { class: "interest-tag", "{interest}" }
                                            }
                                        }
                                    } else if text.is_empty() {
                                        p { class: "muted", "{field.placeholder()}" }
                                    } else {
                                        p { class: "profile-field-text", "{text}" }
                                    }
                                }
                            }
                        }
                    }

                    section { class: "profile-section",
                        h2 { class: "section-header", "Posts by {user.name}" }
                        if posts().is_empty() {
                            p { class: "muted", "No posts yet." }
                        } else {
                            div { class: "feed-list",
                                for (index, (post, author, comments)) in posts().into_iter().enumerate() {
                                    PostCard {
                                        key: "{post.id.to_string_repr()}",
                                        delay: plan().and_then(|p| p.delay(index)),
                                        post,
                                        author,
                                        comments,
                                    }
                                }
                            }
                        }
                    }

                    if show_compose() {
                        MessageCompose {
                            recipient_name: user.name.clone(),
                            on_send: send_message,
                            on_close: move |_| show_compose.set(false),
                        }
                    }
                } else {
                    div { class: "empty-state",
                        h2 { class: "section-header", "Student not found" }
                        p { class: "muted", "This account may have been removed." }
                    }
                }
            }
        }
    }
}

/// Replace one profile field with the draft, keeping the rest
fn merged(user: &User, field: ProfileField, draft: &str) -> (String, String, String, String) {
    let mut bio = user.bio.clone();
    let mut interests = user.interests.clone();
    let mut achievements = user.achievements.clone();
    let mut projects = user.projects.clone();
    match field {
        ProfileField::Bio => bio = draft.to_string(),
        ProfileField::Interests => interests = draft.to_string(),
        ProfileField::Achievements => achievements = draft.to_string(),
        ProfileField::Projects => projects = draft.to_string(),
    }
    (bio, interests, achievements, projects)
}

/// First letter of a display name, for the avatar circle
fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}
