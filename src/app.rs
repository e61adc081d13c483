use std::sync::Arc;

use dioxus::prelude::*;
use educonnect_core::User;
use tokio::sync::RwLock;

use crate::context::{get_data_dir, SharedEngine};
use crate::pages::{Feed, Home, Login, Messages, NewPost, PostDetail, Profile, Register, Search};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home page with hero and featured posts
/// - `/feed` - Full post feed with subject filter
/// - `/search` - Keyword search across posts
/// - `/posts/new` - Compose a new study post
/// - `/posts/:id` - Post detail with comments and votes
/// - `/profile/:id` - A student's profile and posts
/// - `/messages` - Direct message inbox
/// - `/login`, `/register` - Account pages
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/feed")]
    Feed {},
    #[route("/search")]
    Search {},
    #[route("/posts/new")]
    NewPost {},
    #[route("/posts/:id")]
    PostDetail { id: String },
    #[route("/profile/:id")]
    Profile { id: String },
    #[route("/messages")]
    Messages {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
}

/// Root application component.
///
/// Provides global styles, engine context, session context, and routing.
#[component]
pub fn App() -> Element {
    // Initialize shared engine state
    let engine: Signal<SharedEngine> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut engine_ready: Signal<bool> = use_signal(|| false);
    let mut session: Signal<Option<User>> = use_signal(|| None);

    // Provide engine context to all child components
    use_context_provider(|| engine);
    use_context_provider(|| engine_ready);
    use_context_provider(|| session);

    // Initialize engine on mount
    use_effect(move || {
        spawn(async move {
            let data_dir = get_data_dir();
            match educonnect_core::EduEngine::new(&data_dir) {
                Ok(mut eng) => {
                    // First launch on an empty store gets demo content so
                    // the feed is explorable before anyone writes a post
                    if !crate::demo_disabled() {
                        match eng.seed_demo() {
                            Ok(true) => tracing::info!("Seeded demo accounts and posts"),
                            Ok(false) => {}
                            Err(e) => tracing::error!("Failed to seed demo content: {}", e),
                        }
                    }

                    // Restore whoever was signed in last run
                    match eng.current_user() {
                        Ok(user) => session.set(user),
                        Err(e) => tracing::error!("Failed to restore session: {}", e),
                    }

                    let shared = engine();
                    let mut guard = shared.write().await;
                    *guard = Some(eng);
                    drop(guard);
                    engine_ready.set(true);
                    tracing::info!("EduEngine initialized");
                }
                Err(e) => {
                    tracing::error!("Failed to initialize EduEngine: {}", e);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
