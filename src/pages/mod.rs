//! Page components for EduConnect.

use educonnect_core::{EduEngine, Post};

mod feed;
mod home;
mod login;
mod messages;
mod new_post;
mod post_detail;
mod profile;
mod register;
mod search;

pub use feed::Feed;
pub use home::Home;
pub use login::Login;
pub use messages::Messages;
pub use new_post::NewPost;
pub use post_detail::PostDetail;
pub use profile::Profile;
pub use register::Register;
pub use search::Search;

/// Pair posts with author display names and comment counts for card
/// rendering. A missing author renders as "Unknown" rather than
/// failing the whole page.
pub(crate) fn post_rows(eng: &EduEngine, posts: Vec<Post>) -> Vec<(Post, String, u64)> {
    posts
        .into_iter()
        .map(|post| {
            let author = eng
                .get_user(&post.author)
                .map(|u| u.name)
                .unwrap_or_else(|_| "Unknown".to_string());
            let comments = eng.comment_count(&post.id).unwrap_or(0);
            (post, author, comments)
        })
        .collect()
}
