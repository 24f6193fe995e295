//! Error types for mvdo-suggest
//!
//! The completion path itself never fails: unresolvable keys, missing files
//! and cyclic includes degrade to "no suggestions" and are reported through
//! `tracing`. These types cover the ambient operations around it, such as
//! loading settings and validating CLI input.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for configuration and command operations
#[derive(Error, Debug)]
pub enum SuggestError {
    /// File system errors
    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    ConfigError { reason: String },

    #[error("Configuration file already exists at '{path}'. Use --force to overwrite")]
    ConfigExists { path: PathBuf },

    /// No root directory to resolve `.mv` paths against
    #[error("No root path configured. Set completion.root_path or pass --root")]
    MissingRoot,

    /// Root directory does not exist
    #[error("Root path '{path}' is not a directory")]
    InvalidRoot { path: PathBuf },

    /// Symbolic key could not be mapped to a file
    #[error("Failed to lookup MvDO path '{key}'")]
    UnresolvedKey { key: String },

    #[error("Failed to serialize output: {0}")]
    Serialization(String),
}

impl SuggestError {
    /// Stable status code for JSON responses.
    pub fn status_code(&self) -> String {
        match self {
            Self::FileWrite { .. } => "FILE_WRITE_ERROR",
            Self::ConfigError { .. } => "CONFIG_ERROR",
            Self::ConfigExists { .. } => "CONFIG_EXISTS",
            Self::MissingRoot => "MISSING_ROOT",
            Self::InvalidRoot { .. } => "INVALID_ROOT",
            Self::UnresolvedKey { .. } => "UNRESOLVED_KEY",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::ConfigError { .. } => vec![
                "Check .mvdo/settings.toml for syntax errors",
                "Run 'mvdo-suggest init --force' to regenerate the configuration",
            ],
            Self::ConfigExists { .. } => vec!["Pass --force to overwrite the existing file"],
            Self::MissingRoot | Self::InvalidRoot { .. } => vec![
                "Set completion.root_path in .mvdo/settings.toml",
                "Export MVDO_COMPLETION__ROOT_PATH=/path/to/store",
                "Pass --root <DIR> on the command line",
            ],
            Self::UnresolvedKey { .. } => vec![
                "Add the key to the [aliases] table in .mvdo/settings.toml",
                "Keys follow module_<file>, filename_<file> or feature_<feature>_<file>",
            ],
            Self::FileWrite { .. } => {
                vec!["Check that the directory exists and is writable"]
            }
            Self::Serialization(_) => vec![],
        }
    }
}

impl From<Box<figment::Error>> for SuggestError {
    fn from(e: Box<figment::Error>) -> Self {
        SuggestError::ConfigError {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for SuggestError {
    fn from(e: serde_json::Error) -> Self {
        SuggestError::Serialization(e.to_string())
    }
}

impl From<toml::ser::Error> for SuggestError {
    fn from(e: toml::ser::Error) -> Self {
        SuggestError::Serialization(e.to_string())
    }
}

pub type SuggestResult<T> = Result<T, SuggestError>;
