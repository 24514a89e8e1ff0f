//! Error types for l2lsh.

use thiserror::Error;

/// Errors that can occur while building settings or hashing points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LshError {
    /// A settings parameter was non-positive or non-finite.
    ///
    /// Fatal to construction: no settings or index is produced.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A point's coordinate count differs from the configured dimension.
    ///
    /// Raised before any table is touched, so the index is left unchanged.
    #[error("dimension mismatch: expected {expected} coordinates, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, LshError>;
