//! Snapshot error types.

use std::path::PathBuf;
use thiserror::Error;

/// Snapshot codec or file operation error.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// File I/O error.
    #[error("failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The blob is not a league snapshot, or its payload describes an
    /// impossible league.
    #[error("corrupt league snapshot: {reason}")]
    InvalidFormat { reason: String },

    /// The blob was written by a newer schema than this build understands.
    #[error("league snapshot version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion { found: u32, max_supported: u32 },

    /// Serialization error.
    #[error("failed to serialize league state")]
    Serialization {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Deserialization error.
    #[error("failed to deserialize league state")]
    Deserialization {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SnapshotError>;
