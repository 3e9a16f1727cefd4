//! Error types for book generation.

use std::path::PathBuf;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Error reading or creating the title file
    #[error("Title source IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The title source holds no titles to pick from
    #[error("Title source is empty: {}", .0.display())]
    EmptyTitleSource(PathBuf),
}
