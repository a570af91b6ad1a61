//! Log output formats for patch runs.
//!
//! The patcher runs as a build step, so its log shares a stream with the
//! compiler and the build tool. `compact` keeps to one short line per event;
//! `json` is for CI collectors that parse build output.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How log events are rendered on stderr.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One line per event, without timestamps, interleaving with build output.
    #[default]
    Compact,
    /// One JSON object per event with an RFC 3339 UTC timestamp.
    Json,
}

impl LogFormat {
    /// Whether ANSI colour should be used when writing to a stream that is,
    /// or is not, an interactive terminal. JSON is never coloured.
    #[must_use]
    pub const fn uses_colour(self, terminal: bool) -> bool {
        matches!(self, Self::Compact) && terminal
    }
}
