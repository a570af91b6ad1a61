//! One-based line positions.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// A one-based line number within a text file.
///
/// Line `1` is the first line. Zero cannot be represented, so an insertion
/// point is always well defined at the bottom end; positions beyond the end of
/// a file are handled by the inserter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinePosition(NonZeroUsize);

impl LinePosition {
    /// The first line of a file.
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Builds a position from a one-based line number.
    ///
    /// Returns `None` for `0`.
    #[must_use]
    pub const fn new(line: usize) -> Option<Self> {
        match NonZeroUsize::new(line) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Builds a position from a zero-based line index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        match NonZeroUsize::new(index.saturating_add(1)) {
            Some(value) => Self(value),
            None => Self::FIRST,
        }
    }

    /// The one-based line number.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// The zero-based index of this line in a sequence of lines.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for LinePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LinePosition {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<NonZeroUsize>().map(Self)
    }
}
