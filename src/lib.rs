pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod extractor;
pub mod io;
pub mod logging;
pub mod resolver;

pub use completion::{Completion, CompletionEngine, CompletionRequest, MvdoReference};
pub use config::Settings;
pub use error::{SuggestError, SuggestResult};
pub use extractor::{Extraction, FunctionExtractor, FunctionSignature};
pub use resolver::{AliasTable, PathResolver, Resolution, ResolutionRule};
