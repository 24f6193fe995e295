//! Output handling for the CLI.
//!
//! This module provides:
//! - Unified JSON envelope for `--json` output
//! - Consistent exit codes

pub mod envelope;
pub mod exit_code;
pub mod format;

pub use envelope::{
    EntityType, Envelope, ErrorDetails, MessageType, Meta, ResultCode, SCHEMA_VERSION, Status,
};
pub use exit_code::ExitCode;
pub use format::{OutputFormat, print_envelope, report_error};
