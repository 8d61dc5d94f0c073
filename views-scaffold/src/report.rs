//! Per-item outcomes of a scaffold run.

use crate::error::{FsErrorKind, ScaffoldError};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What kind of filesystem entry an outcome refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Directory,
    File,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Result of ensuring a single entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Status {
    /// The entry did not exist and was created by this run.
    Created,
    /// The directory already existed.
    Present,
    /// A file (or any other entry) already existed at the path and was left
    /// untouched.
    Skipped,
    /// The filesystem refused the operation.
    Failed {
        #[serde(rename = "error")]
        kind: FsErrorKind,
        message: String,
    },
}

impl Status {
    /// Build a failure status from an error.
    ///
    /// The message is the underlying IO error text when there is one, since
    /// the offending path is carried by the outcome itself.
    pub fn failed(err: &ScaffoldError) -> Self {
        let message = match err.io_source() {
            Some(source) => source.to_string(),
            None => err.to_string(),
        };
        Self::Failed {
            kind: err.fs_kind(),
            message,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Present => write!(f, "present"),
            Self::Skipped => write!(f, "skipped"),
            Self::Failed { kind, message } => write!(f, "failed ({kind}): {message}"),
        }
    }
}

/// The outcome for one directory or file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemOutcome {
    pub kind: EntryKind,
    /// Path as named by the layout, relative to the target root.
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: Status,
}

impl ItemOutcome {
    pub fn new(kind: EntryKind, path: impl Into<PathBuf>, status: Status) -> Self {
        Self {
            kind,
            path: path.into(),
            status,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.status.is_failure()
    }
}

/// Everything a scaffold run did, in the order it did it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub base: PathBuf,
    pub directories: Vec<ItemOutcome>,
    pub files: Vec<ItemOutcome>,
}

impl ScaffoldReport {
    /// Directory outcomes followed by file outcomes.
    pub fn outcomes(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.directories.iter().chain(self.files.iter())
    }

    pub fn created(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes()
            .filter(|o| matches!(o.status, Status::Created))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes()
            .filter(|o| matches!(o.status, Status::Skipped))
    }

    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes().filter(|o| o.is_failure())
    }

    /// True when no item failed.
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Look up the outcome recorded for a path.
    pub fn find(&self, path: impl AsRef<Path>) -> Option<&ItemOutcome> {
        let path = path.as_ref();
        self.outcomes().find(|o| o.path == path)
    }
}
