//! Tabula CLI application
//!
//! A thin presentation layer over the `tabula-core` engine: pick a table,
//! pick an operation, let the engine build and run the SQL, render what
//! comes back. One database connection is opened at startup, passed into
//! every engine call, and closed when the process exits.

mod args;
mod commands;
mod grid;

use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;
use tracing::debug;

use crate::args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with environment-based filtering.
    // Set RUST_LOG=debug for verbose logging.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    let conn = match &cli.database {
        Some(path) => Connection::open(path)
            .with_context(|| format!("failed to open database at {}", path.display()))?,
        None => Connection::open_in_memory().context("failed to open in-memory database")?,
    };
    debug!(
        database = %cli
            .database
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| ":memory:".to_string()),
        "connection established"
    );

    commands::dispatch(&cli, &conn)
}
