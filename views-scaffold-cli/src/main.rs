//! views-scaffold - create the view-template directory tree.
//!
//! Commands:
//! - `views-scaffold` / `views-scaffold run`: create directories and placeholder files
//! - `views-scaffold show`: print the effective layout as YAML
//!
//! Exit codes:
//! - 0: Finished (item failures are reported but do not change the code)
//! - 1: Fatal error, or item failures with `--strict`
//! - 2: Invalid arguments

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use views_scaffold_cli::commands::{self, LayoutOptions};
use views_scaffold_cli::{handle_cli_result, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("views_scaffold=debug,views_scaffold_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = dispatch_command(cli);
    std::process::exit(exit_code);
}

/// Dispatch a parsed CLI to the appropriate command handler.
fn dispatch_command(cli: Cli) -> i32 {
    let command = cli.command_or_default();
    let options = LayoutOptions {
        root: cli.root,
        base: cli.base,
        layout_file: cli.layout,
    };
    let stdout = io::stdout().lock();

    handle_cli_result(match command {
        Commands::Run { json, strict } => commands::run_scaffold(&options, json, strict, stdout),
        Commands::Show => commands::show_layout(&options, stdout),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parsing_no_args() {
        let cli = Cli::parse_from(["views-scaffold"]);
        assert!(!cli.debug);
        assert!(cli.command.is_none());
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(
            cli.command_or_default(),
            Commands::Run {
                json: false,
                strict: false
            }
        );
    }

    #[test]
    fn test_cli_parsing_run_flags() {
        let cli = Cli::parse_from(["views-scaffold", "run", "--json", "--strict"]);
        assert_eq!(
            cli.command,
            Some(Commands::Run {
                json: true,
                strict: true
            })
        );
    }

    #[test]
    fn test_cli_parsing_global_options_after_subcommand() {
        let cli = Cli::parse_from([
            "views-scaffold",
            "show",
            "--root",
            "/tmp/site",
            "--base",
            "pages",
            "--layout",
            "layout.yaml",
            "--debug",
        ]);
        assert!(cli.debug);
        assert_eq!(cli.command, Some(Commands::Show));
        assert_eq!(cli.root, PathBuf::from("/tmp/site"));
        assert_eq!(cli.base, Some(PathBuf::from("pages")));
        assert_eq!(cli.layout, Some(PathBuf::from("layout.yaml")));
    }

    #[test]
    fn test_cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["views-scaffold", "deploy"]).is_err());
    }
}
