//! Shared configuration for the `vfpatch` contract patcher.
//!
//! [`Config`] is assembled by `ortho_config` from, in increasing precedence,
//! built-in defaults, a configuration file (`--config-path` or
//! `VFPATCH_CONFIG_PATH`), `VFPATCH_*` environment variables, and command-line
//! flags. The defaults layer fills every field, so a load with no flags, no
//! environment and no file patches `string.h` and `crt.dll.vfmanifest` in the
//! current directory. A `Config` built by hand may leave fields unset; the
//! accessors resolve those against the same defaults.

mod defaults;
mod logging;
mod policy;

use camino::{Utf8Path, Utf8PathBuf};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_HEADER_PATH, DEFAULT_LOG_FILTER, DEFAULT_MANIFEST_PATH, DEFAULT_ROOT,
    default_header_path, default_log_filter, default_log_format, default_manifest_path,
    default_match_policy, default_root,
};
pub use logging::LogFormat;
pub use policy::MatchPolicy;

/// Resolved runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "VFPATCH")]
pub struct Config {
    /// Directory the header and manifest paths are resolved against.
    #[ortho_config(default = Utf8PathBuf::from(DEFAULT_ROOT))]
    pub root: Option<Utf8PathBuf>,
    /// Header file receiving the contract annotations, relative to `root`.
    #[ortho_config(default = Utf8PathBuf::from(DEFAULT_HEADER_PATH))]
    pub header_path: Option<Utf8PathBuf>,
    /// Manifest file receiving the declarations, relative to `root`.
    #[ortho_config(default = Utf8PathBuf::from(DEFAULT_MANIFEST_PATH))]
    pub manifest_path: Option<Utf8PathBuf>,
    /// Handling of replacements that match nothing (`warn` or `require`).
    #[ortho_config(default = default_match_policy())]
    pub match_policy: Option<MatchPolicy>,
    /// `tracing` filter expression, for example `info` or `vfpatch=debug`.
    #[ortho_config(default = default_log_filter().to_owned())]
    pub log_filter: Option<String>,
    /// Log output format (`compact` or `json`).
    #[ortho_config(default = default_log_format())]
    pub log_format: Option<LogFormat>,
}

impl Config {
    /// Workspace root directory.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        self.root
            .as_deref()
            .unwrap_or_else(|| Utf8Path::new(DEFAULT_ROOT))
    }

    /// Header path, relative to [`Config::root`].
    #[must_use]
    pub fn header_path(&self) -> &Utf8Path {
        self.header_path
            .as_deref()
            .unwrap_or_else(|| Utf8Path::new(DEFAULT_HEADER_PATH))
    }

    /// Manifest path, relative to [`Config::root`].
    #[must_use]
    pub fn manifest_path(&self) -> &Utf8Path {
        self.manifest_path
            .as_deref()
            .unwrap_or_else(|| Utf8Path::new(DEFAULT_MANIFEST_PATH))
    }

    /// Zero-match replacement policy.
    #[must_use]
    pub fn match_policy(&self) -> MatchPolicy {
        self.match_policy.unwrap_or_else(default_match_policy)
    }

    /// Log filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Log output format.
    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        self.log_format.unwrap_or_else(default_log_format)
    }
}

#[cfg(test)]
mod tests;
