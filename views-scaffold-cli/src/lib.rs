//! views-scaffold CLI - scaffold a view-template directory tree.
//!
//! The binary is a thin shell over [`views_scaffold`]: it resolves the layout
//! (built-in, from a YAML file, optionally rebased), runs the scaffolder and
//! renders the outcome either as progress lines or as a JSON report.

pub mod cli;
pub mod commands;
pub mod console;
pub mod error;

pub use cli::{Cli, Commands};
pub use error::{handle_cli_result, CliError, CliResult, EXIT_ERROR, EXIT_SUCCESS};
