//! Functions command - list signatures reachable from a file.

use std::path::{Path, PathBuf};

use crate::error::SuggestError;
use crate::extractor::FunctionExtractor;
use crate::io::{
    EntityType, Envelope, ExitCode, OutputFormat, Status, print_envelope, report_error,
};

pub fn run(path: &Path, root: Option<PathBuf>, format: OutputFormat) -> ExitCode {
    let Some(root) = root else {
        return report_error(&SuggestError::MissingRoot, format);
    };
    if !root.is_dir() {
        return report_error(&SuggestError::InvalidRoot { path: root }, format);
    }

    let extraction = FunctionExtractor::new(&root).extract(path);
    let query = path.display().to_string();

    if format.is_json() {
        let count = extraction.functions.len();
        let envelope = if extraction.files.is_empty() {
            Envelope::not_found(format!("File not found: {query}"))
        } else {
            let status = if extraction.missing.is_empty() && extraction.cycles.is_empty() {
                Status::Success
            } else {
                Status::PartialSuccess
            };
            Envelope::success(&extraction)
                .with_status(status)
                .with_message(format!("Found {count} functions"))
        };
        return print_envelope(
            &envelope
                .with_entity_type(EntityType::Function)
                .with_count(count)
                .with_query(query),
        );
    }

    if extraction.files.is_empty() {
        eprintln!("File not found: {}", root.join(path).display());
        return ExitCode::NotFound;
    }

    for function in &extraction.functions {
        let params = function.parameters.as_deref().unwrap_or_default();
        println!(
            "{}({params})\t{}:{}",
            function.name,
            function.source.display(),
            function.line
        );
    }

    for missing in &extraction.missing {
        eprintln!("Missing include: {}", missing.display());
    }
    for cycle in &extraction.cycles {
        eprintln!("Cyclic include skipped: {}", cycle.display());
    }
    eprintln!(
        "{} functions in {} files",
        extraction.functions.len(),
        extraction.files.len()
    );

    ExitCode::Success
}
