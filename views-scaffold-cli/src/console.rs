//! Human-readable progress output.

use std::io::{self, Write};
use std::path::Path;

use views_scaffold::{EntryKind, ItemOutcome, ProgressSink, ScaffoldReport, Status};

/// Format the progress line for one outcome.
pub fn outcome_line(outcome: &ItemOutcome) -> String {
    let path = outcome.path.display();
    match (&outcome.kind, &outcome.status) {
        (EntryKind::Directory, Status::Created) => format!("Directory created: {path}"),
        (EntryKind::Directory, Status::Present | Status::Skipped) => {
            format!("Directory already exists: {path}")
        }
        (EntryKind::Directory, Status::Failed { message, .. }) => {
            format!("Error creating directory {path}: {message}")
        }
        (EntryKind::File, Status::Created) => format!("File created: {path}"),
        (EntryKind::File, Status::Present | Status::Skipped) => {
            format!("File already exists, skipping: {path}")
        }
        (EntryKind::File, Status::Failed { message, .. }) => {
            format!("Error creating file {path}: {message}")
        }
    }
}

/// A [`ProgressSink`] that prints one line per item as the run proceeds.
///
/// Output errors do not interrupt the run. The first one is kept, later
/// writes are dropped, and [`ConsoleSink::finish`] hands it back.
pub struct ConsoleSink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush and return the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn line(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{text}") {
            self.error = Some(e);
        }
    }
}

impl<W: Write> ProgressSink for ConsoleSink<W> {
    fn started(&mut self, base: &Path) {
        self.line(&format!(
            "Creating directory structure starting from '{}'...",
            base.display()
        ));
    }

    fn outcome(&mut self, outcome: &ItemOutcome) {
        self.line(&outcome_line(outcome));
    }

    fn finished(&mut self, _report: &ScaffoldReport) {
        self.line("\nDirectory structure creation complete.");
    }
}
