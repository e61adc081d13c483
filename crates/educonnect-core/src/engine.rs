//! Main EduEngine - the primary entry point for EduConnect
//!
//! EduEngine coordinates Storage, authentication, and the signed-in
//! session for:
//! - Account registration and sign-in
//! - Study posts, comments, and helpful votes
//! - Direct messages
//! - Attached resource files
//!
//! # Example
//!
//! ```ignore
//! use educonnect_core::EduEngine;
//!
//! let mut engine = EduEngine::new("~/.local/share/educonnect")?;
//!
//! // Register an account (also signs in)
//! engine.register("maya@school.edu", "Maya Chen", "Riverside High", "secret-pw")?;
//!
//! // Share some notes
//! let post = engine.create_post("Quadratic formula tricks", "...", "Mathematics", None)?;
//!
//! // Vote on something useful
//! engine.toggle_helpful(&post.id)?;
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::auth;
use crate::error::{EduError, EduResult};
use crate::seed;
use crate::storage::Storage;
use crate::types::{
    allowed_extension, Comment, DirectMessage, Post, PostId, ResourceRef, User, UserId,
    MAX_RESOURCE_BYTES,
};

/// Snapshot of store-wide counts for diagnostics
#[derive(Debug, Clone)]
pub struct EngineInfo {
    /// Data directory path
    pub data_dir: PathBuf,
    /// Registered accounts
    pub users: u64,
    /// Study posts
    pub posts: u64,
    /// Direct messages
    pub messages: u64,
    /// Subject categories
    pub categories: u64,
}

/// Main entry point for EduConnect
///
/// EduEngine owns the storage handle and the signed-in session. All
/// writes that require an author go through the session, so the UI and
/// CLI never pass user ids around for authorization.
pub struct EduEngine {
    /// Persistent storage for accounts, posts, messages, and resources
    storage: Storage,
    /// Data directory path
    data_dir: PathBuf,
    /// Signed-in user, mirrored in the session table
    current_user: Option<UserId>,
}

impl EduEngine {
    /// Create a new EduEngine with the given data directory
    ///
    /// This will:
    /// - Create the data directory if it doesn't exist
    /// - Initialize the storage database
    /// - Seed the default subject categories (idempotent)
    /// - Restore the signed-in session, if any
    ///
    /// # Errors
    ///
    /// Returns `EduError::Io` if the directory cannot be created.
    /// Returns `EduError::Database` if storage initialization fails.
    pub fn new(data_dir: impl AsRef<Path>) -> EduResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        info!(?data_dir, "Initializing EduEngine");

        std::fs::create_dir_all(&data_dir)?;

        let db_path = data_dir.join("educonnect.redb");
        let storage = Storage::new(&db_path)?;

        seed::ensure_default_categories(&storage)?;

        let current_user = storage.load_session()?;
        if let Some(ref user_id) = current_user {
            debug!(%user_id, "Restored signed-in session");
        }

        Ok(Self {
            storage,
            data_dir,
            current_user,
        })
    }

    /// The engine's data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Direct access to storage, for benches and diagnostics
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Store-wide counts
    pub fn info(&self) -> EduResult<EngineInfo> {
        Ok(EngineInfo {
            data_dir: self.data_dir.clone(),
            users: self.storage.user_count()?,
            posts: self.storage.post_count()?,
            messages: self.storage.message_count()?,
            categories: self.storage.list_categories()?.len() as u64,
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Accounts & Session
    // ═══════════════════════════════════════════════════════════════════════

    /// Register a new account and sign it in.
    ///
    /// All fields are required; the email must not belong to an
    /// existing account.
    pub fn register(
        &mut self,
        email: &str,
        name: &str,
        school: &str,
        password: &str,
    ) -> EduResult<User> {
        let email = email.trim();
        let name = name.trim();
        let school = school.trim();

        if email.is_empty() {
            return Err(EduError::MissingField("email"));
        }
        if name.is_empty() {
            return Err(EduError::MissingField("name"));
        }
        if school.is_empty() {
            return Err(EduError::MissingField("school"));
        }
        if password.is_empty() {
            return Err(EduError::MissingField("password"));
        }

        if self.storage.find_user_by_email(email)?.is_some() {
            return Err(EduError::EmailTaken(email.to_lowercase()));
        }

        let password_hash = auth::hash_password(password)?;
        let user = User::new(email, name, school, password_hash);
        self.storage.save_user(&user)?;

        self.set_session(user.id.clone())?;
        info!(user_id = %user.id, "Registered new account");
        Ok(user)
    }

    /// Sign in with email and password.
    ///
    /// Unknown email and wrong password produce the same error, so the
    /// sign-in form can't be used to probe for accounts.
    pub fn sign_in(&mut self, email: &str, password: &str) -> EduResult<User> {
        let user = self
            .storage
            .find_user_by_email(email)?
            .ok_or(EduError::InvalidCredentials)?;

        if !auth::verify_password(password, &user.password_hash)? {
            return Err(EduError::InvalidCredentials);
        }

        self.set_session(user.id.clone())?;
        info!(user_id = %user.id, "Signed in");
        Ok(user)
    }

    /// Sign out the current user. A no-op when nobody is signed in.
    pub fn sign_out(&mut self) -> EduResult<()> {
        if let Some(user_id) = self.current_user.take() {
            self.storage.clear_session()?;
            info!(%user_id, "Signed out");
        }
        Ok(())
    }

    /// The signed-in user's account, if any.
    pub fn current_user(&self) -> EduResult<Option<User>> {
        match &self.current_user {
            Some(id) => self.storage.load_user(id),
            None => Ok(None),
        }
    }

    /// Whether somebody is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.current_user.is_some()
    }

    fn set_session(&mut self, user_id: UserId) -> EduResult<()> {
        self.storage.save_session(&user_id)?;
        self.current_user = Some(user_id);
        Ok(())
    }

    fn require_user(&self) -> EduResult<User> {
        self.current_user()?.ok_or(EduError::NotSignedIn)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Posts
    // ═══════════════════════════════════════════════════════════════════════

    /// Create a post as the signed-in user.
    ///
    /// Title, content, and subject are required; a blank resource link
    /// is stored as no link at all.
    pub fn create_post(
        &mut self,
        title: &str,
        content: &str,
        subject: &str,
        resource_link: Option<&str>,
    ) -> EduResult<Post> {
        let author = self.require_user()?;

        let title = title.trim();
        let content = content.trim();
        let subject = subject.trim();

        if title.is_empty() {
            return Err(EduError::MissingField("title"));
        }
        if content.is_empty() {
            return Err(EduError::MissingField("content"));
        }
        if subject.is_empty() {
            return Err(EduError::MissingField("subject"));
        }

        let mut post = Post::new(title, content, subject, author.id);
        post.resource_link = resource_link
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from);

        self.storage.save_post(&post)?;
        info!(post_id = %post.id, subject = %post.subject, "Created post");
        Ok(post)
    }

    /// Attach a file to one of the signed-in user's posts.
    ///
    /// The filename's extension must be on the allowlist and the bytes
    /// under the size cap. Replaces any previous attachment reference;
    /// the bytes are content-addressed, so identical files are stored
    /// once.
    pub fn attach_resource(
        &mut self,
        post_id: &PostId,
        filename: &str,
        data: Vec<u8>,
    ) -> EduResult<ResourceRef> {
        let user = self.require_user()?;
        let mut post = self.get_post(post_id)?;
        if post.author != user.id {
            return Err(EduError::NotAllowed(
                "only the author can attach files to a post".to_string(),
            ));
        }

        if allowed_extension(filename).is_none() {
            let ext = filename
                .rsplit_once('.')
                .map(|(_, e)| e.to_lowercase())
                .unwrap_or_default();
            return Err(EduError::UnsupportedResourceType(ext));
        }

        let size = data.len() as u64;
        if size > MAX_RESOURCE_BYTES {
            return Err(EduError::ResourceTooLarge {
                size,
                limit: MAX_RESOURCE_BYTES,
            });
        }

        let hash = self.storage.save_resource(data)?;
        let resource = ResourceRef {
            hash,
            filename: filename.to_string(),
            size,
        };
        post.resource = Some(resource.clone());
        self.storage.save_post(&post)?;

        info!(post_id = %post.id, filename, size, "Attached resource");
        Ok(resource)
    }

    /// Load the bytes of an attached resource.
    pub fn load_resource(&self, hash: &str) -> EduResult<Vec<u8>> {
        self.storage
            .load_resource(hash)?
            .ok_or_else(|| EduError::ResourceNotFound(hash.to_string()))
    }

    /// Load a post by id.
    pub fn get_post(&self, post_id: &PostId) -> EduResult<Post> {
        self.storage
            .load_post(post_id)?
            .ok_or_else(|| EduError::PostNotFound(post_id.to_string()))
    }

    /// All posts, newest first.
    pub fn list_posts(&self) -> EduResult<Vec<Post>> {
        self.storage.list_posts()
    }

    /// Posts in one subject, newest first.
    pub fn list_posts_by_subject(&self, subject: &str) -> EduResult<Vec<Post>> {
        self.storage.list_posts_by_subject(subject)
    }

    /// The newest posts for the home page.
    pub fn featured_posts(&self, limit: usize) -> EduResult<Vec<Post>> {
        let mut posts = self.storage.list_posts()?;
        posts.truncate(limit);
        Ok(posts)
    }

    /// A user's posts, newest first.
    pub fn posts_by_author(&self, author: &UserId) -> EduResult<Vec<Post>> {
        let mut posts = self.storage.list_posts()?;
        posts.retain(|p| &p.author == author);
        Ok(posts)
    }

    /// Case-insensitive search over titles and content.
    ///
    /// A blank term returns no results rather than the whole feed.
    pub fn search_posts(&self, term: &str) -> EduResult<Vec<Post>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        debug!(term, "Searching posts");
        self.storage.search_posts(term)
    }

    /// Delete one of the signed-in user's posts, along with its
    /// comments and helpful marks.
    pub fn delete_post(&mut self, post_id: &PostId) -> EduResult<()> {
        let user = self.require_user()?;
        let post = self.get_post(post_id)?;
        if post.author != user.id {
            return Err(EduError::NotAllowed(
                "only the author can delete a post".to_string(),
            ));
        }
        self.storage.delete_post(post_id)?;
        info!(%post_id, "Deleted post");
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Comments & Helpful votes
    // ═══════════════════════════════════════════════════════════════════════

    /// Comment on a post as the signed-in user.
    pub fn add_comment(&mut self, post_id: &PostId, content: &str) -> EduResult<Comment> {
        let author = self.require_user()?;
        let content = content.trim();
        if content.is_empty() {
            return Err(EduError::MissingField("comment"));
        }

        // The post must still exist
        let post = self.get_post(post_id)?;

        let comment = Comment::new(post.id, author.id, content);
        self.storage.save_comment(&comment)?;
        debug!(comment_id = %comment.id, post_id = %post_id, "Added comment");
        Ok(comment)
    }

    /// A post's comments, oldest first.
    pub fn comments(&self, post_id: &PostId) -> EduResult<Vec<Comment>> {
        self.storage.list_comments(post_id)
    }

    /// Number of comments under a post.
    pub fn comment_count(&self, post_id: &PostId) -> EduResult<u64> {
        self.storage.comment_count(post_id)
    }

    /// Toggle the signed-in user's helpful vote on a post.
    ///
    /// Returns `(now_voted, new_count)`.
    pub fn toggle_helpful(&mut self, post_id: &PostId) -> EduResult<(bool, u32)> {
        let user = self.require_user()?;
        let (now_voted, count) = self.storage.toggle_helpful(post_id, &user.id)?;
        debug!(%post_id, now_voted, count, "Toggled helpful vote");
        Ok((now_voted, count))
    }

    /// Whether the signed-in user has voted on this post. `false` when
    /// signed out.
    pub fn has_voted(&self, post_id: &PostId) -> EduResult<bool> {
        match &self.current_user {
            Some(user_id) => self.storage.has_helpful_mark(post_id, user_id),
            None => Ok(false),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Messages
    // ═══════════════════════════════════════════════════════════════════════

    /// Send a direct message from the signed-in user.
    pub fn send_message(&mut self, receiver: &UserId, content: &str) -> EduResult<DirectMessage> {
        let sender = self.require_user()?;
        let content = content.trim();
        if content.is_empty() {
            return Err(EduError::MissingField("message"));
        }

        // The receiver must exist
        let receiver = self.get_user(receiver)?;

        let message = DirectMessage::new(sender.id, receiver.id, content);
        self.storage.save_message(&message)?;
        debug!(message_id = %message.id, receiver = %message.receiver, "Sent message");
        Ok(message)
    }

    /// The signed-in user's received messages, newest first.
    pub fn inbox(&self) -> EduResult<Vec<DirectMessage>> {
        let user = self.require_user()?;
        self.storage.inbox(&user.id)
    }

    /// Mark everything in the signed-in user's inbox read.
    pub fn mark_inbox_read(&mut self) -> EduResult<()> {
        let user = self.require_user()?;
        self.storage.mark_inbox_read(&user.id)
    }

    /// Unread message count for the nav badge. Zero when signed out.
    pub fn unread_count(&self) -> EduResult<u64> {
        match &self.current_user {
            Some(user_id) => self.storage.unread_count(user_id),
            None => Ok(0),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Profiles & Users
    // ═══════════════════════════════════════════════════════════════════════

    /// Load a user by id.
    pub fn get_user(&self, user_id: &UserId) -> EduResult<User> {
        self.storage
            .load_user(user_id)?
            .ok_or_else(|| EduError::UserNotFound(user_id.to_string()))
    }

    /// All registered users.
    pub fn list_users(&self) -> EduResult<Vec<User>> {
        self.storage.list_users()
    }

    /// Update the signed-in user's profile fields.
    pub fn update_profile(
        &mut self,
        bio: &str,
        interests: &str,
        achievements: &str,
        projects: &str,
    ) -> EduResult<User> {
        let mut user = self.require_user()?;
        user.bio = bio.trim().to_string();
        user.interests = interests.trim().to_string();
        user.achievements = achievements.trim().to_string();
        user.projects = projects.trim().to_string();
        self.storage.save_user(&user)?;
        info!(user_id = %user.id, "Updated profile");
        Ok(user)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Categories & Seeding
    // ═══════════════════════════════════════════════════════════════════════

    /// All subject categories, alphabetical.
    pub fn categories(&self) -> EduResult<Vec<String>> {
        self.storage.list_categories()
    }

    /// Seed demo accounts and posts so a fresh install has a living
    /// feed. Skips entirely if any user or post already exists.
    ///
    /// Returns `true` if demo content was created.
    pub fn seed_demo(&mut self) -> EduResult<bool> {
        seed::seed_demo_content(&self.storage)
    }
}
