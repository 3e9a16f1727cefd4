//! Synthetic book record generator.
//!
//! This crate provides the `BookGenerator` which produces an endless sequence of
//! fixture records for a book model. Every field comes from an explicitly passed
//! random source, so a seeded RNG yields the same records on every run.
//!
//! # Architecture
//!
//! ```text
//!   books.txt
//!       │  ensure_default_titles / load_titles
//!       ▼
//! ┌─────────────────┐
//! │  BookGenerator  │
//! │                 │
//! │  - model        │
//! │  - titles       │
//! │  - rng (StdRng) │
//! │  - pk           │
//! └────────┬────────┘
//!          │
//!          ▼
//!    Record { model, pk, fields }
//! ```
//!
//! # Example
//!
//! ```rust
//! use book_generator::{BookGenerator, TitleSource};
//!
//! let titles = TitleSource::new(vec!["Сон".to_string()]).unwrap();
//! let mut generator = BookGenerator::seeded("books.book", titles, 42);
//!
//! let records = generator.batch(3);
//! assert_eq!(records.iter().map(|r| r.pk).collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert!(records.iter().all(|r| r.fields.title == "Сон"));
//! ```
//!
//! # Field generators
//!
//! - `title` - uniform pick from the title source
//! - `year` - integer in `1400..=2022`
//! - `pages` - integer in `1..=1000`
//! - `isbn13` - hyphenated ISBN-13 with a valid check digit
//! - `rating` - float in `0..=5`, two decimals
//! - `price` - float in `1..=2000`, two decimals
//! - `discount` - integer in `1..99`
//! - `author` - one to three Russian full names

pub mod error;
pub mod generator;
pub mod generators;
pub mod record;
pub mod titles;

// Re-exports for convenience
pub use error::GeneratorError;
pub use generator::{BookGenerator, DEFAULT_START_PK};
pub use record::{FieldSet, Record};
pub use titles::{ensure_default_titles, load_titles, TitleSource, DEFAULT_TITLES};
