//! Error types for the shell.

use thiserror::Error;

/// Workspace-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Graphics device failure
    #[error("Graphics error: {0}")]
    Graphics(String),

    /// Lifecycle violation
    #[error("Lifecycle error: {0}")]
    Lifecycle(String),

    /// Preferences store failure
    #[error("Preferences error: {0}")]
    Preferences(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
