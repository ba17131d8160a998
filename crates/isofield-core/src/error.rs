//! Error types for isofield-rs.

use thiserror::Error;

/// The main error type for isofield-rs operations.
#[derive(Error, Debug)]
pub enum ContourError {
    /// A grid spec that cannot produce a valid lattice.
    #[error("invalid grid spec: {0}")]
    InvalidSpec(String),

    /// A level range that cannot produce a finite level sequence.
    #[error("invalid level range: {0}")]
    InvalidLevels(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for isofield-rs operations.
pub type Result<T> = std::result::Result<T, ContourError>;
