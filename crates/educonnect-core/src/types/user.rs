//! User accounts
//!
//! A user is a student account: sign-in identity plus the profile fields
//! shown on their public profile page. The password never leaves
//! [`crate::auth`] unhashed; this struct only ever carries the PHC string.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// A registered student account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Sign-in email, stored lowercased
    pub email: String,
    /// Display name
    pub name: String,
    /// School the student attends
    pub school: String,
    /// Comma-separated interests shown on the profile
    pub interests: String,
    /// Free-form bio
    pub bio: String,
    /// Free-form achievements list
    pub achievements: String,
    /// Free-form projects list
    pub projects: String,
    /// Argon2id hash in PHC string format
    pub password_hash: String,
    /// Unix timestamp of registration
    pub created_at: i64,
}

impl User {
    /// Create a new account. The email is normalized to lowercase so
    /// lookups are case-insensitive; profile fields start empty.
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        school: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            email: email.into().trim().to_lowercase(),
            name: name.into(),
            school: school.into(),
            interests: String::new(),
            bio: String::new(),
            achievements: String::new(),
            projects: String::new(),
            password_hash: password_hash.into(),
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Join date for profile display, e.g. "March 2024"
    pub fn joined(&self) -> String {
        chrono::DateTime::from_timestamp(self.created_at, 0)
            .map(|dt| dt.format("%B %Y").to_string())
            .unwrap_or_default()
    }

    /// Interests split for pill rendering; empty entries dropped
    pub fn interest_list(&self) -> Vec<String> {
        self.interests
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
