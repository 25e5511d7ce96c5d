//! Error types for loading and presenting slide outlines.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or presenting an outline.
///
/// Parsing itself never produces an error; malformed lines degrade into
/// skipped or continuation lines instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read from an already opened outline.
    #[error("Failed to read outline")]
    IoError(#[from] std::io::Error),

    /// The outline file could not be opened.
    #[error("Failed to open {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Setting up, drawing to, or reading from the terminal failed.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl Error {
    /// Wrap any displayable terminal failure.
    pub fn terminal(err: impl std::fmt::Display) -> Self {
        Self::Terminal(err.to_string())
    }
}
