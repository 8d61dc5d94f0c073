//! CLI definition for the views-scaffold command-line interface.
//!
//! This module only depends on `clap` and `std`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// views-scaffold - create the view-template directory tree
///
/// Creates the declared directories and fills them with one-line placeholder
/// files. Existing files are never overwritten, so the command is safe to
/// re-run.
#[derive(Parser, Debug)]
#[command(name = "views-scaffold")]
#[command(version)]
#[command(about = "Scaffold a view-template directory tree")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Directory the tree is created in
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Base directory to use instead of the layout's own
    #[arg(long, global = true)]
    pub base: Option<PathBuf>,

    /// YAML layout file to use instead of the built-in layout
    #[arg(long, global = true, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The subcommand to execute; a bare invocation scaffolds.
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run {
            json: false,
            strict: false,
        })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create the directories and placeholder files (default)
    Run {
        /// Print the outcome report as JSON instead of progress lines
        #[arg(long)]
        json: bool,

        /// Exit with status 1 when any item failed
        #[arg(long)]
        strict: bool,
    },
    /// Print the effective layout as YAML
    Show,
}
