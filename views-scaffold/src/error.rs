//! Error types for scaffolding operations.

use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ScaffoldError.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Errors that can occur while loading a layout or provisioning the tree.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Failed to create directory.
    #[error("failed to create directory '{path}': {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to create file.
    #[error("failed to create file '{path}': {source}")]
    FileCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write placeholder content into a freshly created file.
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read a layout file.
    #[error("failed to read layout '{path}': {source}")]
    LayoutRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Layout document is not valid YAML or has the wrong shape.
    #[error("failed to parse layout: {source}")]
    LayoutParse {
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Layout could not be rendered back to YAML.
    #[error("failed to render layout: {source}")]
    LayoutRender {
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Layout violates one of its invariants.
    #[error("invalid layout: {message}")]
    InvalidLayout { message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ScaffoldError {
    /// Create a DirectoryCreation error.
    pub fn directory_creation(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.into(),
            source,
        }
    }

    /// Create a FileCreation error.
    pub fn file_creation(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileCreation {
            path: path.into(),
            source,
        }
    }

    /// Create a FileWrite error.
    pub fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Create an InvalidLayout error.
    pub fn invalid_layout(message: impl Into<String>) -> Self {
        Self::InvalidLayout {
            message: message.into(),
        }
    }

    /// The underlying IO error, if this error came from the filesystem.
    pub fn io_source(&self) -> Option<&io::Error> {
        match self {
            Self::DirectoryCreation { source, .. }
            | Self::FileCreation { source, .. }
            | Self::FileWrite { source, .. }
            | Self::LayoutRead { source, .. } => Some(source),
            Self::Io(source) => Some(source),
            Self::LayoutParse { .. } | Self::LayoutRender { .. } | Self::InvalidLayout { .. } => {
                None
            }
        }
    }

    /// Classification of the filesystem failure behind this error.
    ///
    /// Errors that did not come from the filesystem classify as `Other`.
    pub fn fs_kind(&self) -> FsErrorKind {
        self.io_source()
            .map(FsErrorKind::classify)
            .unwrap_or(FsErrorKind::Other)
    }
}

/// The filesystem failure conditions a scaffold run anticipates.
///
/// Anything not listed lands in `Other` so unexpected failures stay visible
/// in the report instead of being folded into a known category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FsErrorKind {
    /// The process lacks permission for the target or one of its parents.
    PermissionDenied,
    /// A path component exceeds the filesystem's name limit.
    NameTooLong,
    /// An existing entry of the wrong type sits on the path, e.g. a regular
    /// file where a directory is required.
    PathCollision,
    /// The target lives on a read-only filesystem.
    ReadOnlyFilesystem,
    /// No space left on the device.
    StorageFull,
    /// Anything else.
    Other,
}

impl FsErrorKind {
    /// Classify an IO error.
    pub fn classify(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::InvalidFilename => Self::NameTooLong,
            io::ErrorKind::NotADirectory
            | io::ErrorKind::IsADirectory
            | io::ErrorKind::AlreadyExists => Self::PathCollision,
            io::ErrorKind::ReadOnlyFilesystem => Self::ReadOnlyFilesystem,
            io::ErrorKind::StorageFull => Self::StorageFull,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for FsErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::NameTooLong => write!(f, "name too long"),
            Self::PathCollision => write!(f, "path collision"),
            Self::ReadOnlyFilesystem => write!(f, "read-only filesystem"),
            Self::StorageFull => write!(f, "storage full"),
            Self::Other => write!(f, "other"),
        }
    }
}
