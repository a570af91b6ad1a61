//! Literal substring replacement over in-memory text.

/// Summary of a replacement applied to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement {
    matches: usize,
}

impl Replacement {
    /// Number of non-overlapping occurrences that were replaced.
    #[must_use]
    pub const fn matches(&self) -> usize {
        self.matches
    }

    /// True when nothing matched and the content was left unchanged.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.matches == 0
    }
}

/// Result of [`replace_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacedText {
    /// Content after replacement.
    pub content: String,
    /// Match summary.
    pub replacement: Replacement,
}

/// Replaces every non-overlapping occurrence of `search` with `replacement`.
///
/// Matching scans left to right and resumes immediately after each consumed
/// match. An empty `search` matches nothing here; [`crate::Workspace`]
/// rejects it before touching the file.
///
/// # Examples
///
/// ```rust
/// use vfpatch_core::replace_all;
///
/// let replaced = replace_all("aaaa", "aa", "b");
/// assert_eq!(replaced.content, "bb");
/// assert_eq!(replaced.replacement.matches(), 2);
/// ```
#[must_use]
pub fn replace_all(content: &str, search: &str, replacement: &str) -> ReplacedText {
    let matches = if search.is_empty() {
        0
    } else {
        content.matches(search).count()
    };

    let patched = if matches == 0 {
        content.to_owned()
    } else {
        content.replace(search, replacement)
    };

    ReplacedText {
        content: patched,
        replacement: Replacement { matches },
    }
}
