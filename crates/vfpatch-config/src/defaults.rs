use camino::Utf8Path;

use crate::logging::LogFormat;
use crate::policy::MatchPolicy;

/// Default workspace root: the current directory.
pub const DEFAULT_ROOT: &str = ".";

/// Default header file patched by the contract script.
pub const DEFAULT_HEADER_PATH: &str = "string.h";

/// Default manifest file patched by the contract script.
pub const DEFAULT_MANIFEST_PATH: &str = "crt.dll.vfmanifest";

/// Default log filter expression used by the binary.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default workspace root.
#[must_use]
pub fn default_root() -> &'static Utf8Path {
    Utf8Path::new(DEFAULT_ROOT)
}

/// Default header path, relative to the workspace root.
#[must_use]
pub fn default_header_path() -> &'static Utf8Path {
    Utf8Path::new(DEFAULT_HEADER_PATH)
}

/// Default manifest path, relative to the workspace root.
#[must_use]
pub fn default_manifest_path() -> &'static Utf8Path {
    Utf8Path::new(DEFAULT_MANIFEST_PATH)
}

/// Default log filter expression used by the binary.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Compact
}

/// Default handling of zero-match replacements.
#[must_use]
pub const fn default_match_policy() -> MatchPolicy {
    MatchPolicy::Warn
}
