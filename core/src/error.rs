//! Error types for the portreaper-core library.

use thiserror::Error;

/// Result type alias for portreaper operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during socket enumeration and process management.
///
/// `ProcessGone` and `PermissionDenied` are expected per-entry outcomes:
/// the application services catch them and convert them into result
/// variants. Only facility-wide failures (the enumeration itself failing)
/// reach callers as hard errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Permission denied for an operation. Recoverable; reported to the
    /// user with a remediation hint.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The process no longer exists. An expected race between socket
    /// enumeration and process resolution, not a fault.
    #[error("Process {0} no longer exists")]
    ProcessGone(u32),

    /// The OS facility backing an operation is unavailable.
    #[error("Platform facility unavailable: {0}")]
    Platform(String),

    /// Failed to execute a system command.
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    /// Failed to parse command output.
    #[error("Failed to parse output: {0}")]
    Parse(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
