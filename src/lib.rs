//! Book fixture generator library.
//!
//! Produces a fixed batch of synthetic book records and writes them as a JSON
//! fixture file in the fixture-loader layout (`model`, `pk`, `fields`).
//!
//! # Pipeline
//!
//! 1. Create `books.txt` with default titles if it is missing
//! 2. Load the titles
//! 3. Draw [`RECORD_COUNT`] records starting at primary key [`START_PK`]
//! 4. Write them to `generated_books.json`
//!
//! # Crates
//!
//! - `book_generator` - record types, title source and field generators
//! - `fixture_populate_json` - pretty-printed JSON array output

pub mod config;

use anyhow::Context;
use book_generator::{ensure_default_titles, load_titles, BookGenerator, Record};
use fixture_populate_json::JsonFixturePopulator;
use std::path::PathBuf;

pub use config::Config;

/// Title file read by the generator.
pub const TITLES_PATH: &str = "books.txt";
/// Fixture file written by the generator.
pub const OUTPUT_PATH: &str = "generated_books.json";
/// Optional settings file.
pub const CONFIG_PATH: &str = "conf.toml";
/// Number of records per run.
pub const RECORD_COUNT: usize = 100;
/// Primary key of the first record.
pub const START_PK: u64 = book_generator::DEFAULT_START_PK;

/// Locations of the files the pipeline touches.
#[derive(Debug, Clone)]
pub struct FixturePaths {
    pub titles: PathBuf,
    pub output: PathBuf,
}

impl Default for FixturePaths {
    fn default() -> Self {
        Self {
            titles: PathBuf::from(TITLES_PATH),
            output: PathBuf::from(OUTPUT_PATH),
        }
    }
}

/// Generate the fixture batch and write it to `paths.output`.
///
/// Returns the records that were written.
pub fn generate_fixtures(paths: &FixturePaths, config: &Config) -> anyhow::Result<Vec<Record>> {
    ensure_default_titles(&paths.titles)
        .with_context(|| format!("Failed to create title file: {}", paths.titles.display()))?;
    let titles = load_titles(&paths.titles)
        .with_context(|| format!("Failed to load titles: {}", paths.titles.display()))?;

    tracing::info!(
        "Generating {} '{}' records from {} titles",
        RECORD_COUNT,
        config.model,
        titles.len()
    );

    let records = match config.seed {
        Some(seed) => {
            tracing::debug!("Using RNG seed {seed}");
            BookGenerator::seeded(config.model.as_str(), titles, seed)
                .with_start_pk(START_PK)
                .batch(RECORD_COUNT)
        }
        None => BookGenerator::from_entropy(config.model.as_str(), titles)
            .with_start_pk(START_PK)
            .batch(RECORD_COUNT),
    };

    JsonFixturePopulator::new()
        .populate(&records, &paths.output)
        .with_context(|| format!("Failed to write fixture file: {}", paths.output.display()))?;

    Ok(records)
}
