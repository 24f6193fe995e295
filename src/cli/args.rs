//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// MvDO completions for Miva Script
#[derive(Parser)]
#[command(
    name = "mvdo-suggest",
    version = env!("CARGO_PKG_VERSION"),
    about = "MvDO method completions for Miva Script source trees",
    long_about = "Resolve [ g.Module_* ]. references to .mv files and list the functions \
                  they declare, including everything pulled in with <MvINCLUDE>.",
    next_line_help = true,
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print output as a JSON envelope
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize project
    #[command(about = "Set up .mvdo directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration
    #[command(about = "Display active settings")]
    Config,

    /// Resolve a symbolic key to its .mv file
    #[command(about = "Show which .mv file a g.Module_* key refers to")]
    Resolve {
        /// Symbolic key, e.g. Module_Feature_CUS_UT
        key: String,
    },

    /// List functions reachable from a file
    #[command(about = "List functions declared in a .mv file and its includes")]
    Functions {
        /// Path relative to the store root, e.g. lib/db.mv
        path: PathBuf,

        /// Store root (overrides config)
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Completions for a cursor position
    #[command(about = "Print trigger and snippet pairs for a cursor position")]
    Complete {
        /// Text of the line holding the cursor
        #[arg(short, long)]
        line: String,

        /// Cursor column in characters (defaults to end of line)
        #[arg(long)]
        column: Option<usize>,

        /// Name of the file being edited
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Store root (overrides config)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Folder open in the editor project (repeatable)
        #[arg(long = "project-folder", value_name = "DIR")]
        project_folders: Vec<PathBuf>,
    },
}
