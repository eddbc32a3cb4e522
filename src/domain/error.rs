//! Error types for the population lookup page.
//!
//! This module defines the centralized error type [`PoplookupError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Only the data loader can fail at request time. Filtering, modal toggling and
//! rendering are total functions over in-memory data.

use thiserror::Error;

/// The main error type for page operations.
///
/// # Examples
///
/// ```
/// use poplookup::PoplookupError;
///
/// fn validate_port(raw: &str) -> Result<u16, PoplookupError> {
///     raw.parse()
///         .map_err(|_| PoplookupError::Config(format!("invalid port: {raw}")))
/// }
///
/// assert!(validate_port("abc").is_err());
/// ```
#[derive(Debug, Error)]
pub enum PoplookupError {
    /// The outbound request to the countries provider failed.
    ///
    /// Covers connection errors, timeouts and non-success status codes. Wraps
    /// the underlying `reqwest::Error` via `#[from]`.
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The provider answered with a body that does not fit the country schema.
    ///
    /// Raised when the body is not JSON or the top-level value is not an array.
    /// Individual malformed records never raise this; they are skipped.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for page operations.
pub type Result<T> = std::result::Result<T, PoplookupError>;
