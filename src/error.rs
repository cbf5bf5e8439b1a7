//! Error types for the console outside the renderer.
//!
//! The message renderer itself never fails; these cover transcript
//! reading and settings persistence.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid transcript record on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid UTF-8 on transcript line {line}: {source}")]
    Encoding {
        line: usize,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to determine configuration directory")]
    ConfigDir,

    #[error("Invalid settings file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
