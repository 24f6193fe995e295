use anyhow::Context;
use clap::Parser;
use mvdo_suggest::cli::commands::{self, complete::CompleteArgs};
use mvdo_suggest::cli::{Cli, Commands};
use mvdo_suggest::io::OutputFormat;
use mvdo_suggest::{CompletionEngine, Settings, SuggestError, logging};

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    if let Some(path) = &cli.config {
        return Settings::load_from(path)
            .map_err(SuggestError::from)
            .with_context(|| format!("Failed to load configuration from {}", path.display()));
    }

    // Fall back to defaults when the settings file is unusable
    Ok(Settings::load().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        eprintln!("Using default configuration for now.");
        Settings::default()
    }))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let format = OutputFormat::from_json_flag(cli.json);

    let mut settings = load_settings(&cli)?;
    logging::init_with_config(&settings.logging);

    if cli.config.is_none() && !matches!(cli.command, Commands::Init { .. }) {
        if let Err(warning) = Settings::check_init() {
            tracing::info!("[config] {warning}, using defaults");
        }
    }

    let exit_code = match cli.command {
        Commands::Init { force } => commands::init::run_init(force, format),
        Commands::Config => commands::init::run_config(&settings, format),
        Commands::Resolve { key } => {
            let engine = CompletionEngine::from_settings(&settings);
            commands::resolve::run(&key, engine.resolver(), format)
        }
        Commands::Functions { path, root } => {
            let root = root.or_else(|| settings.completion.root_path.clone());
            commands::functions::run(&path, root, format)
        }
        Commands::Complete {
            line,
            column,
            file,
            root,
            project_folders,
        } => {
            if let Some(root) = root {
                settings.completion.root_path = Some(root);
                settings.completion.default_to_project_path = false;
            }
            let engine = CompletionEngine::from_settings(&settings);
            let args = CompleteArgs {
                line,
                column,
                file,
                project_folders,
            };
            commands::complete::run(args, &engine, format)
        }
    };

    std::process::exit(exit_code.into());
}
