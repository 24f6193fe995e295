//! Completion entries for MvDO method calls.
//!
//! - [`context`]: finds the `[ g.KEY ].` expression under the cursor
//! - [`format`]: renders a signature as a trigger and snippet
//! - [`engine`]: runs a whole request from cursor to completion list

pub mod context;
pub mod engine;
pub mod format;

pub use context::{MvdoReference, find_reference, reference_at_cursor};
pub use engine::{CompletionEngine, CompletionRequest};
pub use format::Completion;
