//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Separates a missing input file from failures that happen while decoding,
//! transforming, or writing, so callers can branch without matching on messages.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input not found at {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid params file: {0}")]
    Params(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    /// True when the input file was absent and nothing was processed.
    pub fn is_input_missing(&self) -> bool {
        matches!(self, Error::InputNotFound { .. })
    }

    pub fn processing<E: std::fmt::Display>(e: E) -> Self {
        Error::Processing(e.to_string())
    }
}
