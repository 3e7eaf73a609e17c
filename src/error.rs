//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and source-decode errors, and provides semantic
//! variants for size validation and per-icon conversion failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source image error: {0}")]
    Source(#[from] crate::io::SourceError),

    #[error("Conversion to {size}x{size} failed: {reason}")]
    ConversionFailed { size: u32, reason: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },
}

impl Error {
    pub fn conversion<E: std::fmt::Display>(size: u32, e: E) -> Self {
        Error::ConversionFailed {
            size,
            reason: e.to_string(),
        }
    }
}
