//! JSON fixture populator.
//!
//! Writes generated book records as a single pretty-printed JSON array in the
//! fixture-loader layout.
//!
//! # Example
//!
//! ```ignore
//! use book_generator::{load_titles, BookGenerator};
//! use fixture_populate_json::JsonFixturePopulator;
//!
//! let titles = load_titles("books.txt")?;
//! let mut generator = BookGenerator::seeded("books.book", titles, 42);
//! let records = generator.batch(100);
//!
//! let metrics = JsonFixturePopulator::new().populate(&records, "generated_books.json")?;
//! println!("Wrote {} records in {:?}", metrics.rows_written, metrics.total_duration);
//! ```

pub mod error;
pub mod populator;

pub use error::JsonPopulatorError;
pub use populator::{write_records, JsonFixturePopulator, PopulateMetrics, DEFAULT_INDENT};
