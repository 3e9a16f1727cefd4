//! Command-line interface for book-fixtures
//!
//! # Usage
//!
//! ```bash
//! # Write 100 records to generated_books.json, creating books.txt if needed
//! book-fixtures
//!
//! # Reproducible output: set a seed in conf.toml
//! echo 'seed = 42' > conf.toml && book-fixtures
//!
//! # More log output
//! RUST_LOG=debug book-fixtures
//! ```

use anyhow::Context;
use book_fixtures::{generate_fixtures, Config, FixturePaths, CONFIG_PATH};
use clap::Parser;

/// Generate synthetic book records as a JSON fixture file.
///
/// Reads titles from books.txt (created with defaults when absent) and writes
/// 100 records to generated_books.json.
#[derive(Parser, Debug)]
#[command(name = "book-fixtures", version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
        .context("Failed to build log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    let config = Config::load_or_default(CONFIG_PATH)?;
    let records = generate_fixtures(&FixturePaths::default(), &config)?;

    println!(
        "{}",
        serde_json::to_string(&records).context("Failed to serialize records")?
    );

    Ok(())
}
