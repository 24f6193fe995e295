//! Command implementations for the CLI.
//!
//! Each command is implemented in its own module and returns the exit code
//! for the process.

pub mod complete;
pub mod functions;
pub mod init;
pub mod resolve;
