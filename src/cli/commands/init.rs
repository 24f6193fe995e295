//! Init and Config commands.

use crate::config::Settings;
use crate::io::{EntityType, Envelope, ExitCode, OutputFormat, print_envelope, report_error};

/// Run init command - create configuration file.
pub fn run_init(force: bool, format: OutputFormat) -> ExitCode {
    match Settings::init_config_file(force) {
        Ok(path) => {
            if format.is_json() {
                let envelope = Envelope::success(serde_json::json!({ "path": path }))
                    .with_entity_type(EntityType::Settings)
                    .with_message(format!("Created configuration file at {}", path.display()));
                return print_envelope(&envelope);
            }
            println!("Created configuration file at: {}", path.display());
            println!("Set completion.root_path to your store directory.");
            ExitCode::Success
        }
        Err(e) => report_error(&e, format),
    }
}

/// Run config command - display current configuration.
pub fn run_config(config: &Settings, format: OutputFormat) -> ExitCode {
    if format.is_json() {
        let envelope = Envelope::success(config).with_entity_type(EntityType::Settings);
        return print_envelope(&envelope);
    }

    println!("Current Configuration:");
    println!("{}", "=".repeat(50));
    match toml::to_string_pretty(config) {
        Ok(toml_str) => {
            println!("{toml_str}");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error displaying config: {e}");
            ExitCode::GeneralError
        }
    }
}
