//! Capability-scoped access to the files being patched.
//!
//! A [`Workspace`] holds an open handle on a root directory. Target paths are
//! resolved relative to that root and may not escape it; absolute paths and
//! `..` traversal outside the root are rejected by `cap-std` and surface as
//! read errors.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::debug;

use crate::error::PatchError;
use crate::insert::{LineInsertion, insert_into};
use crate::position::LinePosition;
use crate::replace::{Replacement, replace_all};

/// A root directory whose files can be read and rewritten in place.
#[derive(Debug)]
pub struct Workspace {
    root: Utf8PathBuf,
    dir: Dir,
}

impl Workspace {
    /// Opens `root` using the ambient authority of the current process.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::Workspace`] when the directory cannot be opened.
    pub fn open_ambient(root: impl AsRef<Utf8Path>) -> Result<Self, PatchError> {
        let root = root.as_ref();
        let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(|source| {
            PatchError::Workspace {
                root: root.to_path_buf(),
                source,
            }
        })?;
        Ok(Self::from_dir(root, dir))
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub fn from_dir(root: impl AsRef<Utf8Path>, dir: Dir) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            dir,
        }
    }

    /// Root directory this workspace was opened on.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Reads a whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::Read`] when the file cannot be read and
    /// [`PatchError::Encoding`] when it is not valid UTF-8.
    pub fn read_text(&self, path: impl AsRef<Utf8Path>) -> Result<String, PatchError> {
        let path = path.as_ref();
        let bytes = self
            .dir
            .read(path)
            .map_err(|source| PatchError::read(path, source))?;
        debug!(path = %path, bytes = bytes.len(), "read target file");
        String::from_utf8(bytes).map_err(|source| PatchError::Encoding {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overwrites a file with `content`.
    ///
    /// The write truncates first; a failure part way through leaves the file
    /// truncated or partially written.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::Write`] when the file cannot be written.
    pub fn write_text(&self, path: impl AsRef<Utf8Path>, content: &str) -> Result<(), PatchError> {
        let path = path.as_ref();
        self.dir
            .write(path, content)
            .map_err(|source| PatchError::write(path, source))?;
        debug!(path = %path, bytes = content.len(), "rewrote target file");
        Ok(())
    }

    /// Inserts `text` as a new line at `position` and rewrites the file.
    ///
    /// Positions past the end of the file append; the returned
    /// [`LineInsertion`] reports where the text landed.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read, decoded, or written.
    pub fn insert_line(
        &self,
        path: impl AsRef<Utf8Path>,
        position: LinePosition,
        text: &str,
    ) -> Result<LineInsertion, PatchError> {
        let path = path.as_ref();
        let original = self.read_text(path)?;
        let inserted = insert_into(&original, position, text);
        self.write_text(path, &inserted.content)?;
        Ok(inserted.insertion)
    }

    /// Replaces every occurrence of `search` with `replacement` and rewrites
    /// the file, even when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::EmptyPattern`] for an empty `search` without
    /// touching the file, or an error when the file cannot be read, decoded,
    /// or written.
    pub fn replace_text(
        &self,
        path: impl AsRef<Utf8Path>,
        search: &str,
        replacement: &str,
    ) -> Result<Replacement, PatchError> {
        let path = path.as_ref();
        if search.is_empty() {
            return Err(PatchError::EmptyPattern {
                path: path.to_path_buf(),
            });
        }
        let original = self.read_text(path)?;
        let replaced = replace_all(&original, search, replacement);
        self.write_text(path, &replaced.content)?;
        Ok(replaced.replacement)
    }
}
