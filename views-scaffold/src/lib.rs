//! Idempotent scaffolding of view-template trees.
//!
//! This crate creates a declared set of directories and, inside them,
//! placeholder files holding a single comment line. Files that already exist
//! are never touched, so a run can be repeated or resumed at any point and
//! converges on the same tree.
//!
//! # Overview
//!
//! - [`Layout`] - the declared directories and files, rooted at a base directory
//! - [`Scaffolder`] - provisions a layout beneath a target root
//! - [`ScaffoldReport`] - the per-item outcome of a run
//! - [`ProgressSink`] - observes outcomes while a run is in flight
//!
//! # Example
//!
//! ```no_run
//! use views_scaffold::{Layout, Scaffolder};
//!
//! let report = Scaffolder::new(".").run(&Layout::views(), &mut ());
//! println!(
//!     "{} created, {} skipped, {} failed",
//!     report.created().count(),
//!     report.skipped().count(),
//!     report.failures().count(),
//! );
//! ```
//!
//! # Custom Layouts
//!
//! ```rust
//! use views_scaffold::{Layout, BASE_KEY};
//!
//! let layout = Layout::new("templates")
//!     .with_directory("emails")
//!     .with_files("emails", ["welcome.html"])
//!     .with_files(BASE_KEY, ["index.html"]);
//! layout.validate()?;
//! # Ok::<(), views_scaffold::ScaffoldError>(())
//! ```
//!
//! Per-item filesystem failures never abort a run. They are recorded in the
//! report with an [`FsErrorKind`] classification and the remaining items are
//! still attempted.

mod error;
mod layout;
mod report;
mod scaffold;

// Re-export main types
pub use error::{FsErrorKind, Result, ScaffoldError};
pub use layout::{Layout, BASE_KEY, DEFAULT_BASE};
pub use report::{EntryKind, ItemOutcome, ScaffoldReport, Status};
pub use scaffold::{placeholder_content, ProgressSink, Scaffolder};
