//! Error types for slide deck processing.
//!
//! The text pipeline itself is total; only rule-settings persistence can
//! fail.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the pure text pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a settings file.
    #[error("Failed to read or write file: {0}")]
    Io(#[from] std::io::Error),

    /// Rule settings could not be serialized or parsed.
    #[error("Rule settings error: {0}")]
    Settings(#[from] serde_json::Error),
}
