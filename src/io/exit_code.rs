//! Exit codes for CLI operations.
//!
//! - `0`: success, including "no completions" for an inapplicable context
//! - `1`: unspecified failure
//! - `3`: key or file not found
//! - `5`: file I/O error
//! - `6`: configuration error

use crate::error::SuggestError;

/// Standard exit codes for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Key or file not found but command executed successfully (code 3)
    NotFound = 3,

    /// File I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl ExitCode {
    /// Map a [`SuggestError`] to the exit code scripts should see.
    pub fn from_error(error: &SuggestError) -> Self {
        match error {
            SuggestError::UnresolvedKey { .. } => ExitCode::NotFound,
            SuggestError::FileWrite { .. } => ExitCode::IoError,
            SuggestError::ConfigError { .. }
            | SuggestError::ConfigExists { .. }
            | SuggestError::MissingRoot
            | SuggestError::InvalidRoot { .. } => ExitCode::ConfigError,
            SuggestError::Serialization(_) => ExitCode::GeneralError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::GeneralError), 1);
        assert_eq!(i32::from(ExitCode::NotFound), 3);
        assert_eq!(i32::from(ExitCode::IoError), 5);
        assert_eq!(i32::from(ExitCode::ConfigError), 6);
    }

    #[test]
    fn test_from_error() {
        let unresolved = SuggestError::UnresolvedKey {
            key: "store".to_string(),
        };
        assert_eq!(ExitCode::from_error(&unresolved), ExitCode::NotFound);

        let write = SuggestError::FileWrite {
            path: PathBuf::from(".mvdo/settings.toml"),
            source: std::io::Error::other("read-only"),
        };
        assert_eq!(ExitCode::from_error(&write), ExitCode::IoError);
        assert_eq!(ExitCode::from_error(&SuggestError::MissingRoot), ExitCode::ConfigError);
    }
}
