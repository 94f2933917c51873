//! Error types for hosts file operations.

use std::path::PathBuf;

/// Result type for hostess operations.
pub type Result<T> = std::result::Result<T, HostsError>;

/// Errors surfaced by the hosts model, import, and I/O layers.
#[derive(Debug, thiserror::Error)]
pub enum HostsError {
    #[error("invalid hostname {hostname:?}: {reason}")]
    InvalidHostname { hostname: String, reason: String },

    #[error("invalid address {0:?}: expected an IPv4 or IPv6 literal")]
    InvalidAddress(String),

    #[error("{0} not found in hosts file")]
    NotFound(String),

    #[error("malformed import: {0}")]
    MalformedImport(String),

    #[error("failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid command: {0}")]
    InvalidCommand(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HostsError {
    pub(crate) fn hostname(hostname: &str, reason: impl Into<String>) -> Self {
        Self::InvalidHostname {
            hostname: hostname.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }
}
