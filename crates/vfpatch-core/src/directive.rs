//! Single file-mutation instructions.
//!
//! A [`Directive`] pairs a target path with one of the two primitive
//! operations and its literal payload. Drivers build ordered lists of
//! directives and apply them against a [`Workspace`].

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::PatchError;
use crate::insert::LineInsertion;
use crate::position::LinePosition;
use crate::replace::Replacement;
use crate::workspace::Workspace;

/// Insert literal text as a new line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertLine {
    path: Utf8PathBuf,
    position: LinePosition,
    text: String,
}

impl InsertLine {
    /// Builds an insertion directive.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>, position: LinePosition, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            position,
            text: text.into(),
        }
    }

    /// Target path, relative to the workspace root.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Requested one-based line position.
    #[must_use]
    pub const fn position(&self) -> LinePosition {
        self.position
    }

    /// Text to insert, including its terminator.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Replace every occurrence of a literal block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceText {
    path: Utf8PathBuf,
    search: String,
    replacement: String,
}

impl ReplaceText {
    /// Builds a replacement directive.
    #[must_use]
    pub fn new(
        path: impl Into<Utf8PathBuf>,
        search: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            search: search.into(),
            replacement: replacement.into(),
        }
    }

    /// Target path, relative to the workspace root.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Literal text to search for.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Literal text substituted for each match.
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// One step of a patch script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Insert a line.
    InsertLine(InsertLine),
    /// Replace a literal block.
    ReplaceText(ReplaceText),
}

/// What applying a [`Directive`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveOutcome {
    /// A line was inserted.
    Inserted(LineInsertion),
    /// A replacement ran; the match count may be zero.
    Replaced(Replacement),
}

impl Directive {
    /// Target path, relative to the workspace root.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        match self {
            Self::InsertLine(insert) => insert.path(),
            Self::ReplaceText(replace) => replace.path(),
        }
    }

    /// Applies the directive to `workspace`.
    ///
    /// # Errors
    ///
    /// Propagates the [`PatchError`] of the underlying primitive.
    pub fn apply(&self, workspace: &Workspace) -> Result<DirectiveOutcome, PatchError> {
        match self {
            Self::InsertLine(insert) => workspace
                .insert_line(insert.path(), insert.position(), insert.text())
                .map(DirectiveOutcome::Inserted),
            Self::ReplaceText(replace) => workspace
                .replace_text(replace.path(), replace.search(), replace.replacement())
                .map(DirectiveOutcome::Replaced),
        }
    }
}

impl From<InsertLine> for Directive {
    fn from(value: InsertLine) -> Self {
        Self::InsertLine(value)
    }
}

impl From<ReplaceText> for Directive {
    fn from(value: ReplaceText) -> Self {
        Self::ReplaceText(value)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsertLine(insert) => {
                let lines = insert.text().split_inclusive('\n').count();
                write!(
                    f,
                    "insert {lines} line(s) at line {} of {}",
                    insert.position(),
                    insert.path()
                )
            }
            Self::ReplaceText(replace) => {
                let lines = replace.search().split_inclusive('\n').count();
                write!(f, "replace {lines}-line block in {}", replace.path())
            }
        }
    }
}
