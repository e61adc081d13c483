//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary data directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("educonnect").expect("Failed to find educonnect binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

/// Register an account (which also signs it in)
fn register(data_dir: &TempDir, email: &str, name: &str) {
    cli_cmd(data_dir)
        .args(["account", "register", email, name, "Riverside High", "pw-123"])
        .assert()
        .success();
}

/// Extract an ID from CLI output (assumes format: "  ID: <ulid>")
fn extract_id(output: &str) -> Option<String> {
    for line in output.lines() {
        if let Some(id_part) = line.strip_prefix("  ID: ") {
            return Some(id_part.trim().to_string());
        }
    }
    None
}

/// Create a post as the signed-in user and return its ID
fn create_post(data_dir: &TempDir, title: &str, subject: &str) -> String {
    let output = cli_cmd(data_dir)
        .args(["post", "create", title, "Some study notes.", subject])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    extract_id(&stdout).expect("Failed to extract post ID")
}

// ============================================================================
// Info Command Tests
// ============================================================================

#[test]
fn test_info_command() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("EduConnect"))
        .stdout(predicate::str::contains("(not signed in)"))
        .stdout(predicate::str::contains("Data directory:"))
        .stdout(predicate::str::contains("Subjects: 8"));
}

#[test]
fn test_info_shows_signed_in_account() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");

    cli_cmd(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Signed in as: Maya Chen <maya@school.edu>",
        ))
        .stdout(predicate::str::contains("Accounts: 1"));
}

// ============================================================================
// Account Command Tests
// ============================================================================

#[test]
fn test_account_register() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args([
            "account",
            "register",
            "maya@school.edu",
            "Maya Chen",
            "Riverside High",
            "pw-123",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Registered Maya Chen <maya@school.edu>",
        ))
        .stdout(predicate::str::contains("ID:"))
        .stdout(predicate::str::contains("Signed in."));
}

#[test]
fn test_account_register_rejects_taken_email() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");

    cli_cmd(&data_dir)
        .args([
            "account",
            "register",
            "MAYA@school.edu",
            "Other Person",
            "Other School",
            "pw-456",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_account_login_logout_whoami() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");

    cli_cmd(&data_dir)
        .args(["account", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out."));

    cli_cmd(&data_dir)
        .args(["account", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in."));

    cli_cmd(&data_dir)
        .args(["account", "login", "maya@school.edu", "pw-123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as Maya Chen"));

    cli_cmd(&data_dir)
        .args(["account", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Maya Chen"))
        .stdout(predicate::str::contains("Email: maya@school.edu"))
        .stdout(predicate::str::contains("School: Riverside High"));
}

#[test]
fn test_account_login_wrong_password_fails() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");

    cli_cmd(&data_dir)
        .args(["account", "login", "maya@school.edu", "wrong-pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email or password"));
}

#[test]
fn test_account_login_unknown_email_same_error() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["account", "login", "nobody@school.edu", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email or password"));
}

// ============================================================================
// Post Command Tests
// ============================================================================

#[test]
fn test_post_create_requires_sign_in() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["post", "create", "Title", "Content", "Mathematics"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

#[test]
fn test_post_create_and_show() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");

    let output = cli_cmd(&data_dir)
        .args([
            "post",
            "create",
            "Quadratic formula tricks",
            "Complete the square first, then the formula falls out.",
            "Mathematics",
            "--link",
            "https://example.com/notes",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created post: Quadratic formula tricks"));
    let post_id = extract_id(&stdout).expect("Failed to extract post ID");

    cli_cmd(&data_dir)
        .args(["post", "show", &post_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Post: Quadratic formula tricks"))
        .stdout(predicate::str::contains("Author: Maya Chen"))
        .stdout(predicate::str::contains("Subject: Mathematics"))
        .stdout(predicate::str::contains("Link: https://example.com/notes"))
        .stdout(predicate::str::contains("Complete the square first"));
}

#[test]
fn test_post_list_empty() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["post", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found."));
}

#[test]
fn test_post_list_filters_by_subject() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");
    create_post(&data_dir, "Slope fields", "Mathematics");
    create_post(&data_dir, "Newton's laws", "Physics");

    cli_cmd(&data_dir)
        .args(["post", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Posts (2):"));

    cli_cmd(&data_dir)
        .args(["post", "list", "--subject", "Physics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Posts (1):"))
        .stdout(predicate::str::contains("Newton's laws"))
        .stdout(predicate::str::contains("Slope fields").not());
}

#[test]
fn test_post_list_respects_limit() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");
    create_post(&data_dir, "First", "Mathematics");
    create_post(&data_dir, "Second", "Mathematics");
    create_post(&data_dir, "Third", "Mathematics");

    cli_cmd(&data_dir)
        .args(["post", "list", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Posts (2):"));
}

#[test]
fn test_post_search_is_case_insensitive() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");
    create_post(&data_dir, "Quadratic formula tricks", "Mathematics");

    cli_cmd(&data_dir)
        .args(["post", "search", "QUADRATIC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quadratic formula tricks"));

    cli_cmd(&data_dir)
        .args(["post", "search", "trigonometry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts matching"));
}

#[test]
fn test_post_delete() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");
    let post_id = create_post(&data_dir, "Disposable notes", "Mathematics");

    cli_cmd(&data_dir)
        .args(["post", "delete", &post_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted post"));

    cli_cmd(&data_dir)
        .args(["post", "show", &post_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Post not found"));
}

#[test]
fn test_post_delete_requires_authorship() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");
    let post_id = create_post(&data_dir, "Maya's notes", "Mathematics");

    // Registering a second account switches the session to it
    register(&data_dir, "nino@school.edu", "Nino K");

    cli_cmd(&data_dir)
        .args(["post", "delete", &post_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only the author"));
}

#[test]
fn test_post_show_rejects_bad_id() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["post", "show", "not-a-ulid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid post ID"));
}

// ============================================================================
// Comment and Helpful Command Tests
// ============================================================================

#[test]
fn test_comment_add_shows_in_post() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");
    let post_id = create_post(&data_dir, "Slope fields", "Mathematics");

    cli_cmd(&data_dir)
        .args(["comment", "add", &post_id, "This helped, thanks!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added comment."));

    cli_cmd(&data_dir)
        .args(["post", "show", &post_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comments (1):"))
        .stdout(predicate::str::contains("Maya Chen: This helped, thanks!"));
}

#[test]
fn test_helpful_toggle_adds_then_removes() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");
    let post_id = create_post(&data_dir, "Slope fields", "Mathematics");

    cli_cmd(&data_dir)
        .args(["helpful", "toggle", &post_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked helpful. (1 total)"));

    cli_cmd(&data_dir)
        .args(["helpful", "toggle", &post_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed helpful mark. (0 total)"));
}

// ============================================================================
// Message Command Tests
// ============================================================================

#[test]
fn test_message_send_and_inbox() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");
    register(&data_dir, "nino@school.edu", "Nino K");

    // Nino (signed in last) messages Maya by email
    cli_cmd(&data_dir)
        .args(["message", "send", "maya@school.edu", "Study group Thursday?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sent to Maya Chen."));

    // Maya signs in and reads it
    cli_cmd(&data_dir)
        .args(["account", "login", "maya@school.edu", "pw-123"])
        .assert()
        .success();

    cli_cmd(&data_dir)
        .args(["message", "inbox"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 unread"))
        .stdout(predicate::str::contains("* Nino K"))
        .stdout(predicate::str::contains("Study group Thursday?"));

    // Opening the inbox marked everything read
    cli_cmd(&data_dir)
        .args(["message", "inbox"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 unread"));
}

#[test]
fn test_message_send_unknown_recipient_fails() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");

    cli_cmd(&data_dir)
        .args(["message", "send", "nobody@school.edu", "Hello?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No account matching"));
}

#[test]
fn test_message_inbox_empty() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");

    cli_cmd(&data_dir)
        .args(["message", "inbox"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inbox is empty."));
}

// ============================================================================
// Profile Command Tests
// ============================================================================

#[test]
fn test_profile_edit_merges_fields() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");

    cli_cmd(&data_dir)
        .args([
            "profile",
            "edit",
            "--bio",
            "Math olympiad hopeful",
            "--interests",
            "Algebra, Robotics",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile updated."));

    // Editing one field keeps the others
    cli_cmd(&data_dir)
        .args(["profile", "edit", "--projects", "Graphing calculator app"])
        .assert()
        .success();

    cli_cmd(&data_dir)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bio: Math olympiad hopeful"))
        .stdout(predicate::str::contains("Interests: Algebra, Robotics"))
        .stdout(predicate::str::contains("Projects: Graphing calculator app"));
}

#[test]
fn test_profile_edit_requires_a_field() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");

    cli_cmd(&data_dir)
        .args(["profile", "edit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));
}

#[test]
fn test_profile_show_other_account_by_email() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");
    register(&data_dir, "nino@school.edu", "Nino K");

    cli_cmd(&data_dir)
        .args(["profile", "show", "--user", "maya@school.edu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maya Chen (Riverside High)"))
        .stdout(predicate::str::contains("Posts: 0"));
}

// ============================================================================
// Category and Seed Command Tests
// ============================================================================

#[test]
fn test_category_list() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subjects (8):"))
        .stdout(predicate::str::contains("Mathematics"))
        .stdout(predicate::str::contains("Physics"));
}

#[test]
fn test_seed_fills_empty_store_once() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded demo accounts and posts."));

    cli_cmd(&data_dir)
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing seeded"));

    cli_cmd(&data_dir)
        .args(["post", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Posts ("));
}

#[test]
fn test_seed_accounts_can_sign_in() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir).arg("seed").assert().success();

    cli_cmd(&data_dir)
        .args(["account", "login", "maya.chen@riverside.edu", "password123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as"));
}

#[test]
fn test_seed_skips_store_with_accounts() {
    let data_dir = TempDir::new().unwrap();
    register(&data_dir, "maya@school.edu", "Maya Chen");

    cli_cmd(&data_dir)
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing seeded"));
}
