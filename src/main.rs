//! Contact Assistant - Main entry point
//!
//! Reads commands from stdin one line at a time, runs them against the
//! address book, and saves the book when the session ends.

use anyhow::{Context, Result};
use contact_assistant::session::run_session;
use contact_assistant::{CommandDispatcher, Config, JsonFileRepository};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only so replies on stdout stay clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using address book at {}", config.book_path.display());

    let repository = JsonFileRepository::new(&config.book_path);
    let dispatcher = CommandDispatcher::new(config.upcoming_days);

    let book = run_session(
        &repository,
        &dispatcher,
        io::stdin().lock(),
        io::stdout(),
        || chrono::Local::now().date_naive(),
    )
    .with_context(|| format!("Session over {} failed", config.book_path.display()))?;

    info!(
        "Contact assistant shutdown complete ({} contact(s) saved)",
        book.len()
    );
    Ok(())
}
