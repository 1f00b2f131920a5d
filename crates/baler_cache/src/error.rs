//! Error types for cache operations.

use std::path::PathBuf;

/// Errors that can occur during cache operations.
///
/// Only write paths surface errors; every read path is fail-safe and
/// reports problems as cache misses instead.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// An I/O error occurred while writing cache state.
    #[error("cache I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A serialization error occurred while encoding cache state.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the serialization failure.
        reason: String,
    },
}
