//! Log setup for patch runs.
//!
//! The patcher is usually invoked from a build script, so events go to stderr
//! where the build tool already collects diagnostics. Compact output drops
//! timestamps and targets to read like the surrounding build log; JSON output
//! keeps both for CI collectors.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, time::UtcTime};

use vfpatch_config::{Config, LogFormat};

static SUBSCRIBER_INSTALLED: OnceCell<()> = OnceCell::new();

/// Errors encountered while setting up logging.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter expression is not a valid `EnvFilter`.
    #[error("invalid log filter '{expression}': {message}")]
    Filter {
        /// Expression taken from the configuration.
        expression: String,
        /// Parser diagnostic.
        message: String,
    },
    /// Another global subscriber was installed first.
    #[error("failed to install log subscriber: {0}")]
    Subscriber(String),
}

/// Installs the stderr subscriber for `config` once per process.
///
/// Later calls succeed without changing the subscriber, so repeated runs in
/// one process keep the first filter and format.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for an unparsable filter expression and
/// [`TelemetryError::Subscriber`] when a global subscriber already exists.
pub fn initialise(config: &Config) -> Result<(), TelemetryError> {
    SUBSCRIBER_INSTALLED
        .get_or_try_init(|| install(config.log_filter(), config.log_format()))
        .map(|&()| ())
}

pub(crate) fn parse_filter(expression: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(expression).map_err(|error| TelemetryError::Filter {
        expression: expression.to_owned(),
        message: error.to_string(),
    })
}

fn install(expression: &str, format: LogFormat) -> Result<(), TelemetryError> {
    let filter = parse_filter(expression)?;
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(format.uses_colour(io::stderr().is_terminal()));

    let installed = match format {
        LogFormat::Json => builder
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_timer(UtcTime::rfc_3339())
            .try_init(),
        LogFormat::Compact => builder
            .compact()
            .with_target(false)
            .without_time()
            .try_init(),
    };
    installed.map_err(|error| TelemetryError::Subscriber(error.to_string()))
}
