#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("educonnect")
    })
}

/// EduConnect - Student Learning Platform
#[derive(Parser, Debug)]
#[command(name = "educonnect-desktop")]
#[command(about = "EduConnect - Local-first study sharing for students")]
struct Args {
    /// Data directory for storage (use different dirs for multiple instances)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: educonnect-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Instance number (shorthand for --name with number)
    #[arg(short, long)]
    instance: Option<u8>,

    /// Skip seeding demo accounts and posts into an empty store
    #[arg(long)]
    no_demo: bool,
}

/// Whether demo seeding is disabled for this run
static NO_DEMO: OnceLock<bool> = OnceLock::new();

pub fn demo_disabled() -> bool {
    NO_DEMO.get().copied().unwrap_or(false)
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Determine data directory and display name
    let (data_dir, display_name) = if let Some(dir) = args.data_dir {
        (dir.clone(), dir.file_name().and_then(|n| n.to_str()).unwrap_or("custom").to_string())
    } else if let Some(ref name) = args.name {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(format!("educonnect-{}", name));
        (base, name.clone())
    } else if let Some(instance) = args.instance {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."));
        if instance == 1 {
            (base.join("educonnect"), format!("Instance {}", instance))
        } else {
            (base.join(format!("educonnect-{}", instance)), format!("Instance {}", instance))
        }
    } else {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("educonnect");
        (base, String::new())
    };

    // Store data directory globally
    let _ = DATA_DIR.set(data_dir.clone());
    let _ = NO_DEMO.set(args.no_demo);

    // Window size: roomy enough for the two-column card grid
    let window_width = 1100.0;
    let window_height = 800.0;

    // Window title with instance name
    let title = if !display_name.is_empty() {
        format!("EduConnect - {}", display_name)
    } else {
        "EduConnect".to_string()
    };

    tracing::info!("Starting '{}' with data dir: {:?}", display_name, data_dir);

    // Configure desktop window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title(&title)
                .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
                .with_resizable(true)
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
