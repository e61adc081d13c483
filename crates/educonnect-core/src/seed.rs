//! First-run seeding
//!
//! Two layers: the default subject categories are ensured on every
//! engine start, and demo accounts/posts can be seeded once so a fresh
//! install has a living feed. Demo accounts all share the password
//! `password123`.

use tracing::{debug, info};
use ulid::Ulid;

use crate::auth;
use crate::error::EduResult;
use crate::storage::Storage;
use crate::types::{Comment, DirectMessage, Post, PostId, User, UserId};

/// Subjects every install starts with.
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Mathematics",
    "Physics",
    "Programming",
    "Biology",
    "Chemistry",
    "History",
    "Literature",
    "English",
];

/// Demo password shared by the seeded accounts.
pub const DEMO_PASSWORD: &str = "password123";

/// Make sure the default categories exist. Safe to call on every start.
pub(crate) fn ensure_default_categories(storage: &Storage) -> EduResult<()> {
    for name in DEFAULT_CATEGORIES {
        storage.add_category(name)?;
    }
    debug!(count = DEFAULT_CATEGORIES.len(), "Ensured default categories");
    Ok(())
}

/// Seed demo users, posts, comments, votes, and messages.
///
/// Skips entirely when any user or post already exists, so it never
/// mixes generated content into a store somebody actually uses.
/// Returns `true` if content was created.
pub(crate) fn seed_demo_content(storage: &Storage) -> EduResult<bool> {
    if storage.user_count()? > 0 || storage.post_count()? > 0 {
        debug!("Store already has content, skipping demo seed");
        return Ok(false);
    }

    info!("Seeding demo content");
    let password_hash = auth::hash_password(DEMO_PASSWORD)?;

    let maya = demo_user(
        "maya.chen@riverside.edu",
        "Maya Chen",
        "Riverside High School",
        "Junior who spends too much time on math puzzles.",
        "Algebra, Robotics, Chess",
        "Regional Math Olympiad finalist",
        "Building a line-following robot with my study group",
        &password_hash,
    );
    let daniel = demo_user(
        "daniel.okafor@westwood.edu",
        "Daniel Okafor",
        "Westwood Academy",
        "Physics nerd and goalkeeper.",
        "Physics, Football, Photography",
        "School science fair winner",
        "Measuring projectile drag with slow-motion video",
        &password_hash,
    );
    let sofia = demo_user(
        "sofia.reyes@lakeview.edu",
        "Sofia Reyes",
        "Lakeview School",
        "Reader, writer, arguer.",
        "Literature, Debate, Spanish",
        "State debate semifinalist",
        "Annotated reading guide for Borges short stories",
        &password_hash,
    );
    for user in [&maya, &daniel, &sofia] {
        storage.save_user(user)?;
    }

    // Backdated so the feed opens with believable timestamps.
    let quadratics = backdated_post(
        "Visualizing the quadratic formula",
        "Completing the square finally made sense once I graphed each step. \
         Slide the constant term around and watch the vertex move; the formula \
         is just reading the vertex off the graph. Link has my worked examples.",
        "Mathematics",
        &maya,
        2,
        Some("https://www.desmos.com/calculator"),
    );
    let projectiles = backdated_post(
        "Projectile motion lab writeup",
        "We filmed a tennis ball launch at 240fps and traced the arc frame by \
         frame. Horizontal velocity stayed almost constant, vertical matched \
         -9.8 m/s^2 within 4%. Full data table inside.",
        "Physics",
        &daniel,
        5,
        None,
    );
    let poetry = backdated_post(
        "Close-reading checklist for poetry",
        "Before you write a single line of analysis: read it aloud twice, mark \
         every image, circle the turn, and only then ask what the title is \
         doing. This checklist got me through the midterm.",
        "Literature",
        &sofia,
        9,
        None,
    );
    let comprehensions = backdated_post(
        "Python list comprehensions explained",
        "A comprehension is a for loop turned inside out: the thing you append \
         comes first. Start by writing the loop, then fold it. Three worked \
         examples from easy to gnarly inside.",
        "Programming",
        &maya,
        26,
        None,
    );
    let periodic = backdated_post(
        "How I memorize the periodic table",
        "Groups before periods. Learn the first column as a story, then the \
         noble gases, and the middle fills itself in from patterns. Took me \
         two weeks at ten minutes a day.",
        "Chemistry",
        &daniel,
        50,
        None,
    );
    let revolution = backdated_post(
        "Timeline tricks for the French Revolution",
        "Anchor five dates only: 1789, 1792, 1793, 1799, 1804. Everything else \
         hangs off those. My anchor-date sheet is linked.",
        "History",
        &sofia,
        74,
        None,
    );
    let mitosis = backdated_post(
        "Cell division flashcards",
        "Made a deck covering every phase of mitosis and meiosis with the \
         classic diagrams. PMAT is not enough for the exam, you need the \
         chromosome counts at each step.",
        "Biology",
        &maya,
        98,
        Some("https://quizlet.com"),
    );
    for post in [
        &quadratics,
        &projectiles,
        &poetry,
        &comprehensions,
        &periodic,
        &revolution,
        &mitosis,
    ] {
        storage.save_post(post)?;
    }

    save_backdated_comment(
        storage,
        &quadratics.id,
        &daniel.id,
        "The graph link made this click for me, thanks!",
        1,
    )?;
    save_backdated_comment(
        storage,
        &quadratics.id,
        &sofia.id,
        "Saving this for my sister, she has the same unit next week.",
        1,
    )?;
    save_backdated_comment(
        storage,
        &projectiles.id,
        &maya.id,
        "Nice data table. What frame rate did you film at?",
        3,
    )?;

    storage.toggle_helpful(&quadratics.id, &daniel.id)?;
    storage.toggle_helpful(&quadratics.id, &sofia.id)?;
    storage.toggle_helpful(&projectiles.id, &maya.id)?;
    storage.toggle_helpful(&poetry.id, &maya.id)?;

    save_backdated_message(
        storage,
        &sofia.id,
        &maya.id,
        "Want to join our Thursday study group? We trade notes before exams.",
        20,
    )?;
    save_backdated_message(
        storage,
        &daniel.id,
        &maya.id,
        "Thanks for the quadratic post, it saved my homework tonight.",
        1,
    )?;

    info!("Demo content seeded");
    Ok(true)
}

#[allow(clippy::too_many_arguments)]
fn demo_user(
    email: &str,
    name: &str,
    school: &str,
    bio: &str,
    interests: &str,
    achievements: &str,
    projects: &str,
    password_hash: &str,
) -> User {
    let mut user = User::new(email, name, school, password_hash.to_string());
    user.bio = bio.to_string();
    user.interests = interests.to_string();
    user.achievements = achievements.to_string();
    user.projects = projects.to_string();
    user
}

/// Build a post whose id and timestamp both sit `hours_ago` in the
/// past, so the feed orders and labels it like organically old content.
fn backdated_post(
    title: &str,
    content: &str,
    subject: &str,
    author: &User,
    hours_ago: i64,
    resource_link: Option<&str>,
) -> Post {
    let created_at = chrono::Utc::now().timestamp() - hours_ago * 3600;
    let mut post = Post::new(title, content, subject, author.id.clone());
    post.id = PostId::from_ulid(Ulid::from_parts(
        (created_at * 1000) as u64,
        Ulid::new().random(),
    ));
    post.created_at = created_at;
    post.resource_link = resource_link.map(String::from);
    post
}

fn save_backdated_comment(
    storage: &Storage,
    post_id: &PostId,
    author: &UserId,
    content: &str,
    hours_ago: i64,
) -> EduResult<()> {
    let mut comment = Comment::new(post_id.clone(), author.clone(), content);
    comment.created_at -= hours_ago * 3600;
    storage.save_comment(&comment)
}

fn save_backdated_message(
    storage: &Storage,
    sender: &UserId,
    receiver: &UserId,
    content: &str,
    hours_ago: i64,
) -> EduResult<()> {
    let mut message = DirectMessage::new(sender.clone(), receiver.clone(), content);
    message.created_at -= hours_ago * 3600;
    storage.save_message(&message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_dir.path().join("test.redb")).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_default_categories_idempotent() {
        let (storage, _temp) = create_test_storage();
        ensure_default_categories(&storage).unwrap();
        ensure_default_categories(&storage).unwrap();

        let categories = storage.list_categories().unwrap();
        assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());
        // Listed alphabetically regardless of seed order
        assert_eq!(categories[0], "Biology");
    }

    #[test]
    fn test_demo_feed_is_newest_first() {
        let (storage, _temp) = create_test_storage();
        assert!(seed_demo_content(&storage).unwrap());

        let posts = storage.list_posts().unwrap();
        assert_eq!(posts.len(), 7);
        assert_eq!(posts[0].title, "Visualizing the quadratic formula");
        for pair in posts.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn test_demo_accounts_can_sign_in() {
        let (storage, _temp) = create_test_storage();
        seed_demo_content(&storage).unwrap();

        let maya = storage
            .find_user_by_email("maya.chen@riverside.edu")
            .unwrap()
            .unwrap();
        assert!(auth::verify_password(DEMO_PASSWORD, &maya.password_hash).unwrap());
    }

    #[test]
    fn test_demo_votes_and_comments_land() {
        let (storage, _temp) = create_test_storage();
        seed_demo_content(&storage).unwrap();

        let posts = storage.list_posts().unwrap();
        let quadratics = &posts[0];
        assert_eq!(quadratics.helpful_count, 2);
        assert_eq!(storage.comment_count(&quadratics.id).unwrap(), 2);
    }
}
