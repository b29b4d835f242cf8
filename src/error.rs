//! Error types for the Taxon library.
//!
//! All errors are represented by the [`TaxonError`] enum. The classification
//! core itself is total over arbitrary string input and never produces these
//! errors; they exist for the ambient surfaces (lexicon file loading, CLI
//! argument handling) and for the typer trait seam.
//!
//! # Examples
//!
//! ```
//! use taxon::error::{Result, TaxonError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TaxonError::lexicon("empty keyword"))
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

/// The main error type for Taxon operations.
#[derive(Error, Debug)]
pub enum TaxonError {
    /// I/O errors (lexicon files, entity files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Lexicon-related errors (loading, validation)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Classification-related errors
    #[error("Classification error: {0}")]
    Classification(String),

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

/// Result type alias for operations that may fail with TaxonError.
pub type Result<T> = std::result::Result<T, TaxonError>;

impl TaxonError {
    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        TaxonError::Lexicon(msg.into())
    }

    /// Create a new classification error.
    pub fn classification<S: Into<String>>(msg: S) -> Self {
        TaxonError::Classification(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        TaxonError::InvalidOperation(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TaxonError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TaxonError::Other(msg.into())
    }
}
