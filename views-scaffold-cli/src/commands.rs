//! Command handlers.

use std::io::Write;
use std::path::{Path, PathBuf};

use views_scaffold::{Layout, ScaffoldReport, Scaffolder};

use crate::console::ConsoleSink;
use crate::error::{CliResult, EXIT_ERROR, EXIT_SUCCESS};

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    pub root: PathBuf,
    pub base: Option<PathBuf>,
    pub layout_file: Option<PathBuf>,
}

/// Resolve the layout to use: a layout file if given, otherwise the
/// built-in one, then an optional base override.
pub fn load_layout(layout_file: Option<&Path>, base: Option<&Path>) -> CliResult<Layout> {
    let mut layout = match layout_file {
        Some(path) => Layout::load(path)?,
        None => Layout::views(),
    };
    if let Some(base) = base {
        layout = layout.rebased(base);
        layout.validate()?;
    }
    Ok(layout)
}

/// Scaffold the layout and write progress (or the JSON report) to `out`.
///
/// Returns the exit code. Item failures only affect it when `strict` is set.
pub fn run_scaffold<W: Write>(
    options: &LayoutOptions,
    json: bool,
    strict: bool,
    mut out: W,
) -> CliResult<i32> {
    let layout = load_layout(options.layout_file.as_deref(), options.base.as_deref())?;
    let scaffolder = Scaffolder::new(&options.root);

    let report: ScaffoldReport = if json {
        let report = scaffolder.run(&layout, &mut ());
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
        report
    } else {
        let mut sink = ConsoleSink::new(&mut out);
        let report = scaffolder.run(&layout, &mut sink);
        sink.finish()?;
        report
    };

    let failed = report.failures().count();
    if failed > 0 {
        tracing::warn!("{} item(s) could not be created", failed);
    }

    Ok(if strict && failed > 0 {
        EXIT_ERROR
    } else {
        EXIT_SUCCESS
    })
}

/// Print the effective layout as YAML.
pub fn show_layout<W: Write>(options: &LayoutOptions, mut out: W) -> CliResult<i32> {
    let layout = load_layout(options.layout_file.as_deref(), options.base.as_deref())?;
    out.write_all(layout.to_yaml()?.as_bytes())?;
    Ok(EXIT_SUCCESS)
}
