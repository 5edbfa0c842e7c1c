//! Error types for the SoulPHYA terminal.

use std::io;

/// Errors produced by the terminal and its collaborators.
///
/// Command-level variants (`UnknownCommand`, `Usage`, `NotFound`, `Parse`)
/// are rendered as output lines by the interpreter and never end a session.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("bash: {0}: command not found")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("{0}")]
    NotFound(String),

    #[error("syntax error: {0}")]
    Parse(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TerminalError {
    /// Shorthand for a usage error.
    pub fn usage(text: impl Into<String>) -> Self {
        Self::Usage(text.into())
    }

    /// Shorthand for a lookup miss.
    pub fn not_found(text: impl Into<String>) -> Self {
        Self::NotFound(text.into())
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TerminalError>;
