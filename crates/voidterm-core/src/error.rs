//! Error types for the terminal core.
//!
//! - [`FsError`] - virtual filesystem failures
//! - [`CommandError`] - interpreter-level failures rendered as one transcript line

use thiserror::Error;

/// Virtual filesystem errors.
///
/// `Display` yields the coreutils-style phrase; commands prepend their own
/// context (`mkdir: cannot create directory 'x': ...`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// Path segment or leaf is missing.
    #[error("No such file or directory")]
    NotFound,
    /// Parent of the target is missing or is a file.
    #[error("No such file or directory")]
    NoSuchDirectory,
    /// Creation target already exists.
    #[error("File exists")]
    AlreadyExists,
    /// Operation expected a file but found a directory.
    #[error("Is a directory")]
    IsADirectory,
    /// Move destination lies inside the moved directory.
    #[error("cannot move a directory into itself")]
    IntoItself,
}

/// Interpreter errors.
///
/// Every variant renders as exactly the line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Missing or malformed arguments; holds the full message.
    #[error("{0}")]
    Usage(String),
    #[error("Command not found: {0}")]
    UnknownCommand(String),
    #[error("Not a directory")]
    NotADirectory,
    #[error("File not found")]
    FileNotFound,
    /// Filesystem failure already formatted with command context.
    #[error("{0}")]
    Fs(String),
}

impl CommandError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}
