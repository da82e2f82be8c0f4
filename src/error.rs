//! Common error types for the valuation engine

use thiserror::Error;

/// Common result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors the engine can surface to its caller.
///
/// Valuation itself never fails: unmatched join keys, empty inputs, and
/// malformed quantities all degrade to zero contributions. The variants
/// here cover the one-time reference-table load and configuration
/// resolution, which a caller must be able to observe and retry.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
