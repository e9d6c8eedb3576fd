//! Error types for simpletodo

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for simpletodo
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Invalid item text: {0}")]
    InvalidItem(String),

    #[error("No item at index {index} (list has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to save items to {0}")]
    SaveFailed(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),
}

impl TodoError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TodoError::InvalidItem(_) => 2,
            TodoError::IndexOutOfRange { .. } => 3,
            TodoError::SaveFailed(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TodoError::InvalidItem(msg) => {
                format!(
                    "Invalid item text: {}\n\n\
                    Items are stored one per line, so they cannot contain line breaks.\n\
                    Add each line as a separate item instead.",
                    msg
                )
            }
            TodoError::IndexOutOfRange { index, len } => {
                if *len == 0 {
                    format!(
                        "No item at index {}: the list is empty\n\n\
                        Suggestions:\n\
                        • Add an item first: simpletodo add 'buy milk'",
                        index
                    )
                } else {
                    format!(
                        "No item at index {} (valid indexes are 0 to {})\n\n\
                        Suggestions:\n\
                        • Run 'simpletodo list' to see item indexes",
                        index,
                        len - 1
                    )
                }
            }
            TodoError::SaveFailed(path) => {
                format!(
                    "Failed to save items to {}\n\n\
                    The change was not written to disk.\n\
                    Suggestions:\n\
                    • Check that the directory is writable\n\
                    • Set SIMPLETODO_HOME to a writable directory\n\
                    • See simpletodo.log in the data directory for details",
                    path.display()
                )
            }
            TodoError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: simpletodo config editor 'vim'\n\
                    • Pass the new text directly: simpletodo edit <index> 'new text'",
                    msg
                )
            }
            TodoError::Config(msg) => {
                if msg.contains("log level") {
                    format!(
                        "{}\n\n\
                        Valid log levels: off, error, warn, info, debug, trace\n\
                        Example: simpletodo config log_level debug",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TodoError
pub type Result<T> = std::result::Result<T, TodoError>;
