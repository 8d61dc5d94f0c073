//! Error handling and exit codes for the CLI.

use thiserror::Error;
use views_scaffold::ScaffoldError;

/// Exit code for a run that finished.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for a fatal error, or for item failures under `--strict`.
pub const EXIT_ERROR: i32 = 1;

/// CLI-specific result type.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that stop a command before or after the scaffold pass.
///
/// Per-item filesystem failures are not errors here; they live in the
/// report.
#[derive(Debug, Error)]
pub enum CliError {
    /// Layout could not be loaded or rendered.
    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),

    /// Writing to stdout failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Report serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert a command result to an exit code, printing the error if needed.
pub fn handle_cli_result(result: CliResult<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!("command failed: {:?}", e);
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}
