//! Error types for workspace file patching.

use std::io;
use std::string::FromUtf8Error;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Errors raised while reading, patching, or writing a target file.
///
/// A replacement that matches nothing is not an error at this layer; callers
/// inspect [`crate::Replacement::matches`] and decide.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The workspace root directory could not be opened.
    #[error("failed to open workspace root {root}: {source}")]
    Workspace {
        /// Root directory that was requested.
        root: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The target file could not be read. Missing files and permission
    /// failures both land here; inspect [`PatchError::io_kind`].
    #[error("failed to read {path}: {source}")]
    Read {
        /// Target path, relative to the workspace root.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The target file was not valid UTF-8.
    #[error("{path} is not valid UTF-8: {source}")]
    Encoding {
        /// Target path, relative to the workspace root.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: FromUtf8Error,
    },

    /// The patched content could not be written back.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Target path, relative to the workspace root.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A replacement was requested with an empty search string.
    #[error("refusing to replace an empty search string in {path}")]
    EmptyPattern {
        /// Target path, relative to the workspace root.
        path: Utf8PathBuf,
    },
}

impl PatchError {
    pub(crate) fn read(path: &Utf8Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Utf8Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the file the error concerns, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            Self::Workspace { .. } => None,
            Self::Read { path, .. }
            | Self::Encoding { path, .. }
            | Self::Write { path, .. }
            | Self::EmptyPattern { path } => Some(path),
        }
    }

    /// Kind of the underlying I/O error, if the failure came from the
    /// filesystem.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Workspace { source, .. } | Self::Read { source, .. } | Self::Write { source, .. } => {
                Some(source.kind())
            }
            Self::Encoding { .. } | Self::EmptyPattern { .. } => None,
        }
    }
}
