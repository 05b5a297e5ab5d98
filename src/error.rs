//! Error types for the Falcata library.
//!
//! The suggestion engine itself has no failure paths — every input word,
//! including empty or non-alphabetic ones, resolves to an empty result.
//! Errors exist for the ambient surface around the engine: corpus file
//! loading, CLI handling, and output serialization.
//!
//! # Examples
//!
//! ```
//! use falcata::error::{FalcataError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FalcataError::corpus("corpus file was empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Falcata operations.
#[derive(Error, Debug)]
pub enum FalcataError {
    /// I/O errors (corpus file reads, output streams).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus loading/indexing errors.
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Configuration errors.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FalcataError.
pub type Result<T> = std::result::Result<T, FalcataError>;

impl FalcataError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        FalcataError::Corpus(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        FalcataError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FalcataError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        FalcataError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
