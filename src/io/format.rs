//! Output format selection and printing.

use serde::Serialize;

use super::{Envelope, ExitCode};
use crate::error::SuggestError;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text (default)
    Text,
    /// JSON envelope for editor integrations
    Json,
}

impl OutputFormat {
    /// Create format from JSON flag.
    #[must_use]
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }

    #[must_use]
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Print an envelope to stdout and return its exit code.
pub fn print_envelope<T: Serialize>(envelope: &Envelope<T>) -> ExitCode {
    match envelope.to_json() {
        Ok(json) => {
            println!("{json}");
            exit_code_from_u8(envelope.exit_code)
        }
        Err(e) => {
            eprintln!("Error: failed to serialize output: {e}");
            ExitCode::GeneralError
        }
    }
}

/// Report an error in the requested format and return its exit code.
pub fn report_error(error: &SuggestError, format: OutputFormat) -> ExitCode {
    if format.is_json() {
        print_envelope(&Envelope::from_error(error));
    } else {
        eprintln!("Error: {error}");
        for suggestion in error.recovery_suggestions() {
            eprintln!("  - {suggestion}");
        }
    }
    ExitCode::from_error(error)
}

fn exit_code_from_u8(code: u8) -> ExitCode {
    match code {
        0 => ExitCode::Success,
        3 => ExitCode::NotFound,
        5 => ExitCode::IoError,
        6 => ExitCode::ConfigError,
        _ => ExitCode::GeneralError,
    }
}
