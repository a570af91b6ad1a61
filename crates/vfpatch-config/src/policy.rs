//! Handling of replacements that match nothing.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// What the driver does when a replacement directive matches zero times.
///
/// A zero-match replacement still rewrites the file with unchanged content;
/// the policy only decides whether the run carries on.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MatchPolicy {
    /// Log a warning and continue with the next step.
    #[default]
    Warn,
    /// Stop the run with an error.
    Require,
}

impl MatchPolicy {
    /// True when a zero-match replacement must abort the run.
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Require)
    }
}
