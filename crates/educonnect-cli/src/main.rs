//! EduConnect CLI
//!
//! Thin wrapper around educonnect-core functions for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Show store information
//! educonnect info
//!
//! # Register an account (also signs in)
//! educonnect account register maya@school.edu "Maya Chen" "Riverside High" secret-pw
//!
//! # Sign in and out
//! educonnect account login maya@school.edu secret-pw
//! educonnect account logout
//!
//! # Share a post
//! educonnect post create "Quadratic formula tricks" "Complete the square first..." Mathematics
//!
//! # Browse and search
//! educonnect post list --subject Mathematics
//! educonnect post search quadratic
//!
//! # Discuss and vote
//! educonnect comment add <post_id> "This helped, thanks!"
//! educonnect helpful toggle <post_id>
//!
//! # Direct messages (recipient by account id or email)
//! educonnect message send maya@school.edu "Study group on Thursday?"
//! educonnect message inbox
//!
//! # Profiles
//! educonnect profile show
//! educonnect profile edit --bio "Physics olympiad hopeful"
//!
//! # Subjects and demo content
//! educonnect category list
//! educonnect seed
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use educonnect_core::{EduEngine, Post, PostId, User, UserId, DEMO_PASSWORD};

/// EduConnect - Student Learning Platform
#[derive(Parser)]
#[command(name = "educonnect")]
#[command(version = "0.1.0")]
#[command(about = "EduConnect - Local-first study sharing for students")]
#[command(
    long_about = "A local-first peer-learning platform where students share study posts, swap resources, and message each other. The CLI drives the same store as the desktop app."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: platform data dir + /educonnect)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show store information
    Info,

    /// Account and session management
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Study post management
    Post {
        #[command(subcommand)]
        action: PostAction,
    },

    /// Comments on posts
    Comment {
        #[command(subcommand)]
        action: CommentAction,
    },

    /// Helpful votes on posts
    Helpful {
        #[command(subcommand)]
        action: HelpfulAction,
    },

    /// Direct messages
    Message {
        #[command(subcommand)]
        action: MessageAction,
    },

    /// Profile management
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Subject categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Seed demo accounts and posts into an empty store
    Seed,
}

#[derive(Subcommand)]
enum AccountAction {
    /// Register a new account (also signs it in)
    Register {
        /// Sign-in email
        email: String,
        /// Display name
        name: String,
        /// School
        school: String,
        /// Password
        password: String,
    },
    /// Sign in with email and password
    Login {
        /// Sign-in email
        email: String,
        /// Password
        password: String,
    },
    /// Sign out the current session
    Logout,
    /// Show the signed-in account
    Whoami,
}

#[derive(Subcommand)]
enum PostAction {
    /// Create a post as the signed-in user
    Create {
        /// Post title
        title: String,
        /// Markdown body
        content: String,
        /// Subject category, e.g. "Mathematics"
        subject: String,
        /// Optional external resource URL
        #[arg(short, long)]
        link: Option<String>,
    },
    /// List posts, newest first
    List {
        /// Only posts in this subject
        #[arg(short, long)]
        subject: Option<String>,
        /// Show at most this many posts
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show a post with its comments
    Show {
        /// Post ID (ULID string)
        post_id: String,
    },
    /// Search titles and content
    Search {
        /// Search term (case-insensitive)
        term: String,
    },
    /// Delete one of your posts
    Delete {
        /// Post ID (ULID string)
        post_id: String,
    },
}

#[derive(Subcommand)]
enum CommentAction {
    /// Comment on a post
    Add {
        /// Post ID (ULID string)
        post_id: String,
        /// Comment body
        content: String,
    },
}

#[derive(Subcommand)]
enum HelpfulAction {
    /// Toggle your helpful mark on a post
    Toggle {
        /// Post ID (ULID string)
        post_id: String,
    },
}

#[derive(Subcommand)]
enum MessageAction {
    /// Send a direct message
    Send {
        /// Recipient account ID or email
        recipient: String,
        /// Message body
        content: String,
    },
    /// Show your inbox (marks it read)
    Inbox,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show a profile (your own by default)
    Show {
        /// Account ID or email to look up
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Edit your profile fields; omitted fields keep their value
    Edit {
        /// Free-form bio
        #[arg(long)]
        bio: Option<String>,
        /// Comma-separated interests
        #[arg(long)]
        interests: Option<String>,
        /// Achievements list
        #[arg(long)]
        achievements: Option<String>,
        /// Projects list
        #[arg(long)]
        projects: Option<String>,
    },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// List all subject categories
    List,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Get the default data directory (shared with the desktop app)
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("educonnect")
}

/// Parse a post ID from ULID string
fn parse_post_id(s: &str) -> Result<PostId> {
    PostId::from_string(s).map_err(|e| anyhow::anyhow!("Invalid post ID '{}': {}", s, e))
}

/// Find an account by ULID string or email
fn resolve_user(engine: &EduEngine, ident: &str) -> Result<User> {
    if let Ok(id) = UserId::from_string(ident) {
        return Ok(engine.get_user(&id)?);
    }
    let needle = ident.trim().to_lowercase();
    engine
        .list_users()?
        .into_iter()
        .find(|u| u.email == needle)
        .ok_or_else(|| anyhow::anyhow!("No account matching '{}'", ident))
}

/// Author display name, tolerating deleted accounts
fn author_name(engine: &EduEngine, author: &UserId) -> String {
    engine
        .get_user(author)
        .map(|u| u.name)
        .unwrap_or_else(|_| "Unknown".to_string())
}

fn format_timestamp(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| ts.to_string())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

fn print_post_line(engine: &EduEngine, post: &Post) {
    println!(
        "  {}  [{}] {} ({} helpful)",
        post.id.to_string_repr(),
        post.subject,
        post.title,
        post.helpful_count
    );
    println!(
        "      by {}, {}",
        author_name(engine, &post.author),
        post.relative_time()
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    tracing::debug!(data_dir = %data_dir.display(), "Opening store");
    let mut engine = EduEngine::new(&data_dir)?;

    match cli.command {
        Commands::Info => {
            let info = engine.info()?;

            println!("EduConnect v0.1.0");
            println!();
            println!("Account:");
            match engine.current_user()? {
                Some(user) => println!("  Signed in as: {} <{}>", user.name, user.email),
                None => println!("  (not signed in)"),
            }
            println!();
            println!("Data directory: {}", info.data_dir.display());
            println!("Accounts: {}", info.users);
            println!("Posts: {}", info.posts);
            println!("Messages: {}", info.messages);
            println!("Subjects: {}", info.categories);
        }

        Commands::Account { action } => match action {
            AccountAction::Register {
                email,
                name,
                school,
                password,
            } => {
                let user = engine.register(&email, &name, &school, &password)?;
                println!("Registered {} <{}>", user.name, user.email);
                println!("  ID: {}", user.id.to_string_repr());
                println!("Signed in.");
            }

            AccountAction::Login { email, password } => {
                let user = engine.sign_in(&email, &password)?;
                println!("Signed in as {} <{}>", user.name, user.email);
            }

            AccountAction::Logout => {
                engine.sign_out()?;
                println!("Signed out.");
            }

            AccountAction::Whoami => match engine.current_user()? {
                Some(user) => {
                    println!("Signed in as:");
                    println!("  Name: {}", user.name);
                    println!("  Email: {}", user.email);
                    println!("  School: {}", user.school);
                    println!("  ID: {}", user.id.to_string_repr());
                    println!("  Joined: {}", user.joined());
                }
                None => println!("Not signed in."),
            },
        },

        Commands::Post { action } => match action {
            PostAction::Create {
                title,
                content,
                subject,
                link,
            } => {
                let post = engine.create_post(&title, &content, &subject, link.as_deref())?;
                println!("Created post: {}", post.title);
                println!("  ID: {}", post.id.to_string_repr());
                println!("  Subject: {}", post.subject);
            }

            PostAction::List { subject, limit } => {
                let mut posts = match subject {
                    Some(ref s) => engine.list_posts_by_subject(s)?,
                    None => engine.list_posts()?,
                };
                if let Some(n) = limit {
                    posts.truncate(n);
                }

                if posts.is_empty() {
                    println!("No posts found.");
                } else {
                    println!("Posts ({}):", posts.len());
                    println!();
                    for post in &posts {
                        print_post_line(&engine, post);
                    }
                }
            }

            PostAction::Show { post_id } => {
                let id = parse_post_id(&post_id)?;
                let post = engine.get_post(&id)?;

                println!("Post: {}", post.title);
                println!("  ID: {}", post.id.to_string_repr());
                println!(
                    "  Author: {} ({})",
                    author_name(&engine, &post.author),
                    post.author.to_string_repr()
                );
                println!("  Subject: {}", post.subject);
                println!("  Created: {}", format_timestamp(post.created_at));
                println!("  Helpful: {}", post.helpful_count);
                if let Some(ref link) = post.resource_link {
                    println!("  Link: {}", link);
                }
                if let Some(ref resource) = post.resource {
                    println!(
                        "  Attachment: {} ({})",
                        resource.filename,
                        format_size(resource.size)
                    );
                }
                println!();
                println!("{}", post.content);

                let comments = engine.comments(&id)?;
                if !comments.is_empty() {
                    println!();
                    println!("Comments ({}):", comments.len());
                    println!();
                    for comment in &comments {
                        println!(
                            "  [{}] {}: {}",
                            comment.relative_time(),
                            author_name(&engine, &comment.author),
                            comment.content
                        );
                    }
                }
            }

            PostAction::Search { term } => {
                let posts = engine.search_posts(&term)?;
                if posts.is_empty() {
                    println!("No posts matching '{}'.", term);
                } else {
                    println!("Posts matching '{}' ({}):", term, posts.len());
                    println!();
                    for post in &posts {
                        print_post_line(&engine, post);
                    }
                }
            }

            PostAction::Delete { post_id } => {
                let id = parse_post_id(&post_id)?;
                engine.delete_post(&id)?;
                println!("Deleted post: {}", post_id);
            }
        },

        Commands::Comment { action } => match action {
            CommentAction::Add { post_id, content } => {
                let id = parse_post_id(&post_id)?;
                let comment = engine.add_comment(&id, &content)?;
                println!("Added comment.");
                println!("  ID: {}", comment.id.to_string_repr());
            }
        },

        Commands::Helpful { action } => match action {
            HelpfulAction::Toggle { post_id } => {
                let id = parse_post_id(&post_id)?;
                let (added, count) = engine.toggle_helpful(&id)?;
                if added {
                    println!("Marked helpful. ({} total)", count);
                } else {
                    println!("Removed helpful mark. ({} total)", count);
                }
            }
        },

        Commands::Message { action } => match action {
            MessageAction::Send { recipient, content } => {
                let receiver = resolve_user(&engine, &recipient)?;
                engine.send_message(&receiver.id, &content)?;
                println!("Sent to {}.", receiver.name);
            }

            MessageAction::Inbox => {
                let messages = engine.inbox()?;
                if messages.is_empty() {
                    println!("Inbox is empty.");
                } else {
                    let unread = messages.iter().filter(|m| !m.is_read).count();
                    println!("Inbox ({} total, {} unread):", messages.len(), unread);
                    println!();
                    for msg in &messages {
                        let marker = if msg.is_read { " " } else { "*" };
                        println!(
                            "  {} {} ({}): {}",
                            marker,
                            author_name(&engine, &msg.sender),
                            msg.relative_time(),
                            msg.content
                        );
                    }
                    if unread > 0 {
                        engine.mark_inbox_read()?;
                    }
                }
            }
        },

        Commands::Profile { action } => match action {
            ProfileAction::Show { user } => {
                let profile = match user {
                    Some(ref ident) => resolve_user(&engine, ident)?,
                    None => engine
                        .current_user()?
                        .ok_or_else(|| anyhow::anyhow!("Not signed in. Pass --user to look someone up."))?,
                };

                println!("{} ({})", profile.name, profile.school);
                println!("  ID: {}", profile.id.to_string_repr());
                println!("  Email: {}", profile.email);
                println!("  Joined: {}", profile.joined());
                if !profile.bio.is_empty() {
                    println!("  Bio: {}", profile.bio);
                }
                if !profile.interests.is_empty() {
                    println!("  Interests: {}", profile.interests);
                }
                if !profile.achievements.is_empty() {
                    println!("  Achievements: {}", profile.achievements);
                }
                if !profile.projects.is_empty() {
                    println!("  Projects: {}", profile.projects);
                }

                let posts = engine.posts_by_author(&profile.id)?;
                println!("  Posts: {}", posts.len());
            }

            ProfileAction::Edit {
                bio,
                interests,
                achievements,
                projects,
            } => {
                let Some(current) = engine.current_user()? else {
                    anyhow::bail!("Not signed in.");
                };
                if bio.is_none() && interests.is_none() && achievements.is_none() && projects.is_none() {
                    anyhow::bail!(
                        "Nothing to change. Pass --bio, --interests, --achievements, or --projects."
                    );
                }

                engine.update_profile(
                    bio.as_deref().unwrap_or(&current.bio),
                    interests.as_deref().unwrap_or(&current.interests),
                    achievements.as_deref().unwrap_or(&current.achievements),
                    projects.as_deref().unwrap_or(&current.projects),
                )?;
                println!("Profile updated.");
            }
        },

        Commands::Category { action } => match action {
            CategoryAction::List => {
                let categories = engine.categories()?;
                println!("Subjects ({}):", categories.len());
                println!();
                for name in categories {
                    println!("  {}", name);
                }
            }
        },

        Commands::Seed => {
            if engine.seed_demo()? {
                println!("Seeded demo accounts and posts.");
                println!("  Demo password: {}", DEMO_PASSWORD);
            } else {
                println!("Store already has content; nothing seeded.");
            }
        }
    }

    Ok(())
}
