//! Error type for the vector-file and graph-file codecs.

use crate::error::ConfigError;
use thiserror::Error;

/// Errors surfaced at the I/O boundary.
///
/// Loading terminates on the first malformed record; the search and
/// diversification algorithms never see a partially loaded structure.
#[derive(Debug, Error)]
pub enum LoadError {
    /// I/O error (file operations, disk I/O)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Format error (truncated record, inconsistent dimension, corruption)
    #[error("format error: {0}")]
    Format(String),

    /// Loaded data violates an engine precondition.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Result type for codec operations.
pub type LoadResult<T> = Result<T, LoadError>;
