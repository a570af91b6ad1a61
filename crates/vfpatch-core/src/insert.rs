//! Line insertion over in-memory text.

use crate::LinePosition;

/// Where an inserted line ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInsertion {
    requested: LinePosition,
    landed: LinePosition,
    lines_before: usize,
}

impl LineInsertion {
    /// Position the caller asked for.
    #[must_use]
    pub const fn requested(&self) -> LinePosition {
        self.requested
    }

    /// Position the text actually occupies after insertion.
    #[must_use]
    pub const fn landed(&self) -> LinePosition {
        self.landed
    }

    /// Number of lines in the file before the insertion.
    #[must_use]
    pub const fn lines_before(&self) -> usize {
        self.lines_before
    }

    /// True when the requested position lay past the end of the file and the
    /// text was appended instead.
    #[must_use]
    pub fn was_clamped(&self) -> bool {
        self.requested != self.landed
    }
}

/// Result of [`insert_into`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertedText {
    /// Content with the new line in place.
    pub content: String,
    /// Placement details.
    pub insertion: LineInsertion,
}

/// Inserts `text` as a new line at `position` within `content`.
///
/// Lines are split after each `\n` and keep their own terminators, so `\r\n`
/// files stay `\r\n`. The text is inserted verbatim: it is expected to carry
/// its own terminator, and without one it runs into the line that follows.
/// A single `text` may hold several lines.
///
/// Positions past `line count + 1` append at the end of the content.
///
/// # Examples
///
/// ```rust
/// use vfpatch_core::{LinePosition, insert_into};
///
/// let position = LinePosition::new(2).unwrap_or(LinePosition::FIRST);
/// let inserted = insert_into("a\r\nc\r\n", position, "b\r\n");
/// assert_eq!(inserted.content, "a\r\nb\r\nc\r\n");
/// assert!(!inserted.insertion.was_clamped());
/// ```
#[must_use]
pub fn insert_into(content: &str, position: LinePosition, text: &str) -> InsertedText {
    let mut lines: Vec<&str> = content.split_inclusive('\n').collect();
    let lines_before = lines.len();
    let index = position.index().min(lines_before);
    lines.insert(index, text);

    InsertedText {
        content: lines.concat(),
        insertion: LineInsertion {
            requested: position,
            landed: LinePosition::from_index(index),
            lines_before,
        },
    }
}
