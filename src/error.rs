//! Error types for rlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the rlog application
#[derive(Debug, Error)]
pub enum RlogError {
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid settings file: {0}")]
    SettingsParse(String),

    #[error("Invalid date reference: {0}")]
    InvalidDateRef(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl RlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RlogError::InvalidDateRef(_) | RlogError::InvalidMonth(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            RlogError::InvalidDateRef(ref_str) => {
                format!(
                    "Invalid date reference: '{}'\n\n\
                    Valid date references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • Specific dates: DD-MM-YYYY or YYYY-MM-DD\n\n\
                    Examples:\n\
                    rlog today\n\
                    rlog 05-03-2024\n\
                    rlog 2024-03-05",
                    ref_str
                )
            }
            RlogError::InvalidMonth(month_str) => {
                format!(
                    "Invalid month: '{}'\n\n\
                    Expected format: YYYY-MM\n\
                    Example: rlog cal 2024-03",
                    month_str
                )
            }
            RlogError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Use 'rlog open <date> --print' to get the file path instead",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using RlogError
pub type Result<T> = std::result::Result<T, RlogError>;
