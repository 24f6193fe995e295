//! Complete command - run one completion request from the command line.

use std::path::PathBuf;

use crate::completion::{CompletionEngine, CompletionRequest};
use crate::io::{EntityType, Envelope, ExitCode, OutputFormat, print_envelope};

pub struct CompleteArgs {
    pub line: String,
    pub column: Option<usize>,
    pub file: Option<PathBuf>,
    pub project_folders: Vec<PathBuf>,
}

/// Prints one `trigger<TAB>snippet` line per completion.
///
/// An inapplicable context is not an error: it prints nothing and exits 0.
pub fn run(args: CompleteArgs, engine: &CompletionEngine, format: OutputFormat) -> ExitCode {
    let column = args.column.unwrap_or_else(|| args.line.chars().count());
    let query = args.line.clone();

    let mut request =
        CompletionRequest::new(args.line, column).with_project_folders(args.project_folders);
    if let Some(file) = args.file {
        request = request.with_file_name(file);
    }

    let completions = engine.complete(&request);

    if format.is_json() {
        let count = completions.len();
        let envelope = Envelope::success(completions)
            .with_entity_type(EntityType::Completion)
            .with_count(count)
            .with_query(query)
            .with_message(format!("Found {count} completions"));
        return print_envelope(&envelope);
    }

    for completion in &completions {
        println!("{}\t{}", completion.trigger, completion.snippet);
    }
    ExitCode::Success
}
