//! Error types for the Arabic stemmer library.
//!
//! The stemming core itself never fails: every degenerate input resolves to a
//! documented fallback. Errors only surface at the resource boundary, when
//! configuration files, stopword tables or word lists are loaded, and when
//! analysis components such as regex tokenizers are built.
//!
//! # Examples
//!
//! ```
//! use arabic_stemmer::error::{Result, StemmerError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(StemmerError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for stemmer operations.
///
/// Uses `thiserror` for the `Error` implementation and provides constructor
/// helpers for the string-carrying variants.
#[derive(Error, Debug)]
pub enum StemmerError {
    /// I/O errors (reading configuration or resource files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed bundled or user-supplied resource (word lists, tables)
    #[error("Resource error: {0}")]
    Resource(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with StemmerError.
pub type Result<T> = std::result::Result<T, StemmerError>;

impl StemmerError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StemmerError::Config(msg.into())
    }

    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        StemmerError::Resource(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        StemmerError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        StemmerError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StemmerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = StemmerError::config("missing joker");
        assert_eq!(error.to_string(), "Configuration error: missing joker");

        let error = StemmerError::resource("bad line");
        assert_eq!(error.to_string(), "Resource error: bad line");

        let error = StemmerError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stemmer_error = StemmerError::from(io_error);

        match stemmer_error {
            StemmerError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let stemmer_error = StemmerError::from(json_error);

        assert!(matches!(stemmer_error, StemmerError::Json(_)));
    }
}
