//! Error types for notekeep-core

use thiserror::Error;

/// Result type alias using notekeep-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in notekeep-core operations
///
/// Note mutations never fail; these only surface from storage backends and
/// the codec.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key-value backend error
    #[error("Storage error: {0}")]
    Storage(String),
}
