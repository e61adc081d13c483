//! End-to-end workflow tests through the engine facade
//!
//! These tests walk the same paths the desktop app and CLI take:
//! register, post, discuss, vote, message, attach files, restart.

use tempfile::TempDir;

use educonnect_core::{EduEngine, EduError, UserId};

fn engine_in(temp_dir: &TempDir) -> EduEngine {
    EduEngine::new(temp_dir.path()).unwrap()
}

// ============================================================================
// Account Lifecycle
// ============================================================================

/// Two students register, each landing signed in under their own account
#[test]
fn test_two_accounts_register_independently() {
    let temp = TempDir::new().unwrap();
    let mut engine = engine_in(&temp);

    let maya = engine
        .register("maya@riverside.edu", "Maya Chen", "Riverside High", "pw-maya")
        .unwrap();
    assert_eq!(engine.current_user().unwrap().unwrap().id, maya.id);

    let dan = engine
        .register("dan@westwood.edu", "Daniel Okafor", "Westwood Academy", "pw-dan")
        .unwrap();
    assert_eq!(engine.current_user().unwrap().unwrap().id, dan.id);
    assert_ne!(maya.id, dan.id);

    assert_eq!(engine.list_users().unwrap().len(), 2);
}

/// Signing out and back in round-trips through stored credentials
#[test]
fn test_sign_out_sign_in_cycle() {
    let temp = TempDir::new().unwrap();
    let mut engine = engine_in(&temp);
    engine
        .register("maya@riverside.edu", "Maya", "Riverside", "pw")
        .unwrap();

    engine.sign_out().unwrap();
    assert!(engine.current_user().unwrap().is_none());

    // Email matching is case-insensitive, password is not
    assert!(engine.sign_in("MAYA@riverside.edu", "pw").is_ok());
    engine.sign_out().unwrap();
    assert!(matches!(
        engine.sign_in("maya@riverside.edu", "PW"),
        Err(EduError::InvalidCredentials)
    ));
}

// ============================================================================
// Content Workflow
// ============================================================================

/// Post, comment, and vote as different users; counts line up
#[test]
fn test_post_discussion_workflow() {
    let temp = TempDir::new().unwrap();
    let mut engine = engine_in(&temp);

    engine
        .register("maya@riverside.edu", "Maya", "Riverside", "pw")
        .unwrap();
    let post = engine
        .create_post(
            "Visualizing the quadratic formula",
            "Completing the square, graphed.",
            "Mathematics",
            None,
        )
        .unwrap();

    engine
        .register("dan@westwood.edu", "Dan", "Westwood", "pw")
        .unwrap();
    engine.add_comment(&post.id, "This helped, thanks!").unwrap();
    let (voted, count) = engine.toggle_helpful(&post.id).unwrap();
    assert!(voted);
    assert_eq!(count, 1);

    engine
        .register("sofia@lakeview.edu", "Sofia", "Lakeview", "pw")
        .unwrap();
    engine.add_comment(&post.id, "Same here.").unwrap();
    let (_, count) = engine.toggle_helpful(&post.id).unwrap();
    assert_eq!(count, 2);

    let reloaded = engine.get_post(&post.id).unwrap();
    assert_eq!(reloaded.helpful_count, 2);
    assert_eq!(engine.comment_count(&post.id).unwrap(), 2);

    // Comments read oldest first
    let comments = engine.comments(&post.id).unwrap();
    assert_eq!(comments[0].content, "This helped, thanks!");
}

/// Subject filter and search carve up the same feed
#[test]
fn test_feed_filter_and_search() {
    let temp = TempDir::new().unwrap();
    let mut engine = engine_in(&temp);
    engine
        .register("maya@riverside.edu", "Maya", "Riverside", "pw")
        .unwrap();

    engine
        .create_post("Derivatives cheat sheet", "calculus rules", "Mathematics", None)
        .unwrap();
    engine
        .create_post("Pendulum lab", "period vs length", "Physics", None)
        .unwrap();
    engine
        .create_post("Integrals next", "more calculus", "Mathematics", None)
        .unwrap();

    assert_eq!(engine.list_posts().unwrap().len(), 3);
    assert_eq!(engine.list_posts_by_subject("Mathematics").unwrap().len(), 2);
    assert_eq!(engine.list_posts_by_subject("Physics").unwrap().len(), 1);
    assert_eq!(engine.list_posts_by_subject("Biology").unwrap().len(), 0);

    let hits = engine.search_posts("calculus").unwrap();
    assert_eq!(hits.len(), 2);
    assert!(engine.search_posts("").unwrap().is_empty());
}

/// Attach a file, read it back from another account
#[test]
fn test_resource_attachment_workflow() {
    let temp = TempDir::new().unwrap();
    let mut engine = engine_in(&temp);

    engine
        .register("maya@riverside.edu", "Maya", "Riverside", "pw")
        .unwrap();
    let post = engine
        .create_post("Cell division flashcards", "PMAT and beyond", "Biology", None)
        .unwrap();
    let resource = engine
        .attach_resource(&post.id, "flashcards.pdf", b"fake pdf".to_vec())
        .unwrap();

    // Anyone can download the attachment
    engine
        .register("dan@westwood.edu", "Dan", "Westwood", "pw")
        .unwrap();
    let post = engine.get_post(&post.id).unwrap();
    let attached = post.resource.unwrap();
    assert_eq!(attached.hash, resource.hash);
    assert_eq!(engine.load_resource(&attached.hash).unwrap(), b"fake pdf");

    // But only the author can replace it
    assert!(matches!(
        engine.attach_resource(&post.id, "other.pdf", b"x".to_vec()),
        Err(EduError::NotAllowed(_))
    ));
}

// ============================================================================
// Messaging Workflow
// ============================================================================

/// Messages land in the receiver's inbox and read state sticks
#[test]
fn test_direct_message_workflow() {
    let temp = TempDir::new().unwrap();
    let mut engine = engine_in(&temp);

    let maya = engine
        .register("maya@riverside.edu", "Maya", "Riverside", "pw")
        .unwrap();
    engine
        .register("dan@westwood.edu", "Dan", "Westwood", "pw")
        .unwrap();

    engine.send_message(&maya.id, "Study group Thursday?").unwrap();
    engine.send_message(&maya.id, "Bring the lab notes").unwrap();

    // Dan's own inbox stays empty
    assert_eq!(engine.inbox().unwrap().len(), 0);

    engine.sign_in("maya@riverside.edu", "pw").unwrap();
    assert_eq!(engine.unread_count().unwrap(), 2);

    let inbox = engine.inbox().unwrap();
    assert_eq!(inbox.len(), 2);
    assert!(!inbox[0].is_read);

    engine.mark_inbox_read().unwrap();
    assert_eq!(engine.unread_count().unwrap(), 0);
    assert!(engine.inbox().unwrap().iter().all(|m| m.is_read));
}

/// Messaging an unknown account fails cleanly
#[test]
fn test_message_unknown_receiver() {
    let temp = TempDir::new().unwrap();
    let mut engine = engine_in(&temp);
    engine
        .register("maya@riverside.edu", "Maya", "Riverside", "pw")
        .unwrap();

    let result = engine.send_message(&UserId::new(), "hello?");
    assert!(matches!(result, Err(EduError::UserNotFound(_))));
}

// ============================================================================
// Persistence Across Restarts
// ============================================================================

/// Everything written before a restart is there after it
#[test]
fn test_state_survives_restart() {
    let temp = TempDir::new().unwrap();
    let post_id;
    {
        let mut engine = engine_in(&temp);
        let maya = engine
            .register("maya@riverside.edu", "Maya", "Riverside", "pw")
            .unwrap();
        let post = engine
            .create_post("Persistent post", "still here", "History", None)
            .unwrap();
        engine.add_comment(&post.id, "me too").unwrap();
        engine.toggle_helpful(&post.id).unwrap();
        engine.send_message(&maya.id, "note to self").unwrap();
        post_id = post.id;
    }
    {
        let engine = engine_in(&temp);

        // Session restored: still signed in as Maya
        let user = engine.current_user().unwrap().unwrap();
        assert_eq!(user.email, "maya@riverside.edu");

        let post = engine.get_post(&post_id).unwrap();
        assert_eq!(post.helpful_count, 1);
        assert!(engine.has_voted(&post_id).unwrap());
        assert_eq!(engine.comment_count(&post_id).unwrap(), 1);
        assert_eq!(engine.inbox().unwrap().len(), 1);
    }
}

/// Profile edits persist and render derived fields
#[test]
fn test_profile_edit_persists() {
    let temp = TempDir::new().unwrap();
    {
        let mut engine = engine_in(&temp);
        engine
            .register("maya@riverside.edu", "Maya", "Riverside", "pw")
            .unwrap();
        engine
            .update_profile("Math puzzler", "algebra, robotics, chess", "", "")
            .unwrap();
    }
    {
        let engine = engine_in(&temp);
        let user = engine.current_user().unwrap().unwrap();
        assert_eq!(user.bio, "Math puzzler");
        assert_eq!(
            user.interest_list(),
            vec!["algebra", "robotics", "chess"]
        );
        assert!(!user.joined().is_empty());
    }
}

// ============================================================================
// Cascades & Cleanup
// ============================================================================

/// Deleting a post takes its comments and votes with it
#[test]
fn test_delete_post_cascades() {
    let temp = TempDir::new().unwrap();
    let mut engine = engine_in(&temp);

    engine
        .register("maya@riverside.edu", "Maya", "Riverside", "pw")
        .unwrap();
    let post = engine
        .create_post("Short lived", "deleted soon", "History", None)
        .unwrap();
    engine.add_comment(&post.id, "first!").unwrap();
    engine.toggle_helpful(&post.id).unwrap();

    engine.delete_post(&post.id).unwrap();

    assert!(matches!(
        engine.get_post(&post.id),
        Err(EduError::PostNotFound(_))
    ));
    assert_eq!(engine.comment_count(&post.id).unwrap(), 0);
    assert!(!engine.has_voted(&post.id).unwrap());

    // Commenting on the deleted post now fails
    assert!(matches!(
        engine.add_comment(&post.id, "too late"),
        Err(EduError::PostNotFound(_))
    ));
}

/// An empty store serves every read without errors
#[test]
fn test_empty_store_reads() {
    let temp = TempDir::new().unwrap();
    let engine = engine_in(&temp);

    assert!(engine.list_posts().unwrap().is_empty());
    assert!(engine.search_posts("anything").unwrap().is_empty());
    assert!(engine.featured_posts(6).unwrap().is_empty());
    assert!(engine.list_users().unwrap().is_empty());
    assert_eq!(engine.unread_count().unwrap(), 0);
    assert!(!engine.is_signed_in());

    let info = engine.info().unwrap();
    assert_eq!(info.users, 0);
    assert_eq!(info.posts, 0);
    assert_eq!(info.categories, 8);
}
