use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum HistError {
    /// Missing or malformed command-line arguments.
    #[error("argument error: {0}")]
    Argument(String),

    /// The input file is missing or unreadable.
    #[error("cannot read '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record is short a column or its value is not a number.
    #[error("parse error in '{}' line {line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        /// 1-based line number in the input file.
        line: u64,
        message: String,
    },

    /// The samples do not span a finite range.
    #[error("range error: {0}")]
    Range(String),

    #[error("config error: {0}")]
    Config(String),

    /// The window could not be created or the event loop failed.
    #[error("display error: {0}")]
    Display(String),
}

pub type Result<T, E = HistError> = std::result::Result<T, E>;
