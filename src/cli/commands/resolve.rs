//! Resolve command - map a symbolic key to its .mv file.

use crate::error::SuggestError;
use crate::io::{EntityType, Envelope, ExitCode, OutputFormat, print_envelope, report_error};
use crate::resolver::PathResolver;

pub fn run(key: &str, resolver: &PathResolver, format: OutputFormat) -> ExitCode {
    let Some(resolution) = resolver.resolve_with_rule(key) else {
        let error = SuggestError::UnresolvedKey {
            key: key.to_string(),
        };
        if format.is_json() {
            let envelope: Envelope<()> = Envelope::not_found(error.to_string())
                .with_query(key)
                .with_hint("Add the key to the [aliases] table in .mvdo/settings.toml");
            return print_envelope(&envelope);
        }
        return report_error(&error, format);
    };

    if format.is_json() {
        let envelope = Envelope::success(&resolution)
            .with_entity_type(EntityType::Resolution)
            .with_query(key)
            .with_count(1);
        return print_envelope(&envelope);
    }

    println!("{} -> {} ({:?})", resolution.key, resolution.path, resolution.rule);
    ExitCode::Success
}
