//! Error types for the mondb crate.
//!
//! Filtering and sorting never fail. Errors only come from the surfaces
//! around them: decoding feed documents and parsing query configuration.

use thiserror::Error;

/// Errors that can occur when decoding monsters or building queries.
#[derive(Debug, Error)]
pub enum Error {
    /// The monster document is not valid JSON or has mistyped fields.
    #[error("failed to decode monster document: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid regular expression pattern in a clause.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// A sort criterion name that is not in the catalog.
    #[error("unknown sort key '{0}'")]
    UnknownSortKey(String),

    /// A sort direction other than `asc` or `desc`.
    #[error("invalid sort direction '{0}', expected 'asc' or 'desc'")]
    InvalidDirection(String),
}

/// Result type for mondb operations.
pub type Result<T> = std::result::Result<T, Error>;
