//! Error types for the Bookcase plugin.
//!
//! This module defines the centralized error type [`BookcaseError`] and a type alias
//! [`Result`] used throughout the crate. All errors derive their `Error` impl
//! through `thiserror`.

use thiserror::Error;

/// The main error type for Bookcase operations.
///
/// Catalog errors are fatal at startup; lookup misses are reported as
/// [`BookcaseError::NotFound`] so callers decide whether to ignore them.
///
/// # Examples
///
/// ```
/// use bookcase::BookcaseError;
///
/// let err = BookcaseError::not_found("theme", "sepia");
/// assert_eq!(err.to_string(), "theme not found: sepia");
/// ```
#[derive(Debug, Error)]
pub enum BookcaseError {
    /// The catalog source is missing, malformed or inconsistent.
    ///
    /// Raised while loading the data source, before any rendering happens.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A palette file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A keyed lookup (book, author, genre, palette) found nothing.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// What kind of record was looked up.
        kind: &'static str,
        /// The identifier that failed to resolve.
        id: String,
    },
}

impl BookcaseError {
    /// Shorthand for building a [`BookcaseError::NotFound`].
    #[must_use]
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// A specialized `Result` type for Bookcase operations.
pub type Result<T> = std::result::Result<T, BookcaseError>;
