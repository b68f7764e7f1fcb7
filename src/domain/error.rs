//! Error types for the catalogue engine.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! None of these errors is fatal. The controller converts the user-facing ones
//! (validation, no results, load failures) into view state, and rejects the
//! rest (unknown categories or columns) without touching any state.

use thiserror::Error;

/// The main error type for catalogue operations.
///
/// # Examples
///
/// ```
/// use catalogue::CatalogError;
///
/// let err = CatalogError::InvalidCategory("shoes".to_string());
/// assert_eq!(err.to_string(), "Unknown category: shoes");
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Search text was empty or shorter than the minimum length.
    #[error("Search text should be at least {min_len} characters long")]
    Validation {
        /// Minimum accepted number of characters.
        min_len: usize,
    },

    /// A well-formed query matched zero records.
    #[error("No results found")]
    NoResults,

    /// Fetching or decoding the record set failed.
    ///
    /// The store keeps whatever it held before the failed load.
    #[error("Failed to load products: {0}")]
    DataLoad(String),

    /// Category is neither `All` nor one of the configured categories.
    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    /// Column name does not name a sortable column.
    #[error("Unknown sort column: {0}")]
    UnknownColumn(String),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A record payload was not valid JSON for the expected shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The HTTP transport failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(String),
}

impl CatalogError {
    /// Describes a load failure without the "Failed to load products" prefix.
    #[must_use]
    pub fn into_load_cause(self) -> String {
        match self {
            Self::DataLoad(cause) => cause,
            other => other.to_string(),
        }
    }
}

/// A specialized `Result` type for catalogue operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
