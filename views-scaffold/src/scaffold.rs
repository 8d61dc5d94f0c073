//! Provisioning a [`Layout`] onto the filesystem.
//!
//! The [`Scaffolder`] makes one straight pass over a layout: every declared
//! directory first, then every declared file. Each item is handled on its own.
//! A failure is recorded in the report and the pass moves on, so a run never
//! stops early and re-running converges on the same tree.

use crate::error::{Result, ScaffoldError};
use crate::layout::Layout;
use crate::report::{EntryKind, ItemOutcome, ScaffoldReport, Status};
use indexmap::IndexMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// The single line written into every new placeholder file.
pub fn placeholder_content(filename: &str) -> String {
    format!("<!-- This is the content for {filename} -->")
}

/// Receives progress while a scaffold run is in flight.
///
/// Every method has an empty default, and `()` is a sink that ignores
/// everything.
pub trait ProgressSink {
    /// Called once before any filesystem work, with the layout's base.
    fn started(&mut self, _base: &Path) {}

    /// Called after each directory or file has been handled.
    fn outcome(&mut self, _outcome: &ItemOutcome) {}

    /// Called once after the last item.
    fn finished(&mut self, _report: &ScaffoldReport) {}
}

impl ProgressSink for () {}

/// Creates layouts beneath a target root.
///
/// Layout paths are resolved against the root for filesystem access but are
/// reported exactly as the layout names them.
///
/// # Examples
///
/// ```no_run
/// use views_scaffold::{Layout, Scaffolder};
///
/// let report = Scaffolder::new(".").run(&Layout::views(), &mut ());
/// for failure in report.failures() {
///     eprintln!("{}: {}", failure.path.display(), failure.status);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Scaffolder {
    root: PathBuf,
}

impl Scaffolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory layouts are created in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Provision a whole layout: directories first, then files.
    pub fn run<S>(&self, layout: &Layout, sink: &mut S) -> ScaffoldReport
    where
        S: ProgressSink + ?Sized,
    {
        let base = layout.base();
        tracing::info!(
            root = %self.root.display(),
            base = %base.display(),
            "Scaffolding started"
        );
        sink.started(base);

        let directories = self.ensure_directories(&layout.directories(), sink);
        let files = self.ensure_files(&layout.file_map(), sink);

        let report = ScaffoldReport {
            base: base.to_path_buf(),
            directories,
            files,
        };

        tracing::info!(
            created = report.created().count(),
            skipped = report.skipped().count(),
            failed = report.failures().count(),
            "Scaffolding finished"
        );
        sink.finished(&report);
        report
    }

    /// Ensure each directory and all of its ancestors exist.
    ///
    /// An existing directory counts as success. Any other failure is recorded
    /// for that directory and the remaining directories are still attempted.
    pub fn ensure_directories<S>(&self, directories: &[PathBuf], sink: &mut S) -> Vec<ItemOutcome>
    where
        S: ProgressSink + ?Sized,
    {
        let mut outcomes = Vec::with_capacity(directories.len());

        for dir in directories {
            let status = match self.create_directory(dir) {
                Ok(true) => {
                    tracing::debug!("Created directory: {}", dir.display());
                    Status::Created
                }
                Ok(false) => {
                    tracing::debug!("Directory already present: {}", dir.display());
                    Status::Present
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    Status::failed(&e)
                }
            };

            let outcome = ItemOutcome::new(EntryKind::Directory, dir, status);
            sink.outcome(&outcome);
            outcomes.push(outcome);
        }

        outcomes
    }

    /// Ensure each listed file exists, writing placeholder content into the
    /// ones this call creates.
    ///
    /// Anything already at a file's path is left alone and reported as
    /// skipped. Failures are recorded per file and the rest are still
    /// attempted.
    pub fn ensure_files<S>(
        &self,
        files: &IndexMap<PathBuf, Vec<String>>,
        sink: &mut S,
    ) -> Vec<ItemOutcome>
    where
        S: ProgressSink + ?Sized,
    {
        let mut outcomes = Vec::new();

        for (dir, names) in files {
            for name in names {
                let path = dir.join(name);
                let status = match self.create_placeholder(&path, name) {
                    Ok(true) => {
                        tracing::debug!("Created file: {}", path.display());
                        Status::Created
                    }
                    Ok(false) => {
                        tracing::debug!("File already exists, skipping: {}", path.display());
                        Status::Skipped
                    }
                    Err(e) => {
                        tracing::warn!("{}", e);
                        Status::failed(&e)
                    }
                };

                let outcome = ItemOutcome::new(EntryKind::File, path, status);
                sink.outcome(&outcome);
                outcomes.push(outcome);
            }
        }

        outcomes
    }

    /// Returns whether the directory was newly created.
    fn create_directory(&self, dir: &Path) -> Result<bool> {
        let target = self.root.join(dir);
        let existed = target.is_dir();
        fs::create_dir_all(&target).map_err(|e| ScaffoldError::directory_creation(dir, e))?;
        Ok(!existed)
    }

    /// Returns whether the file was newly created.
    ///
    /// The existence check and the creation are one exclusive open, so a
    /// concurrent creator can never be overwritten.
    fn create_placeholder(&self, path: &Path, name: &str) -> Result<bool> {
        let target = self.root.join(path);

        if let (Some(parent), Some(rel_parent)) = (target.parent(), path.parent()) {
            if !parent.is_dir() {
                fs::create_dir_all(parent)
                    .map_err(|e| ScaffoldError::directory_creation(rel_parent, e))?;
            }
        }

        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(ScaffoldError::file_creation(path, e)),
        };

        if let Err(e) = file.write_all(placeholder_content(name).as_bytes()) {
            drop(file);
            // Leave nothing behind so the next run retries instead of skipping.
            let _ = fs::remove_file(&target);
            return Err(ScaffoldError::file_write(path, e));
        }

        Ok(true)
    }
}
