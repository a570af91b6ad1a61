//! Contract patcher for the crypto-aware C runtime stubs.
//!
//! `vfpatch` rewrites a stock `string.h` verification header and its
//! `crt.dll.vfmanifest` in place: it adds the `crypto.gh` ghost include,
//! swaps the `memcpy` and `memcmp` contracts for `crypto_chars`-aware ones,
//! and registers the `crypto.gh` declarations in the manifest. The four steps
//! always run in the same order; see [`script::crypto_contracts`].
//!
//! The runtime loads [`vfpatch_config::Config`], initialises logging, opens
//! the configured root as a [`vfpatch_core::Workspace`], and hands the script
//! to a [`Driver`]. Any failure is written to stderr and turns into a failure
//! exit status; files rewritten before the failure stay rewritten.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use tracing::info;
use vfpatch_config::Config;
use vfpatch_core::Workspace;

mod config;
pub mod driver;
mod errors;
pub mod script;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use config::{ConfigLoader, OrthoConfigLoader};
pub use driver::{Driver, DriverError, RunSummary, StepReport};
pub use errors::AppError;
pub use script::crypto_contracts;

/// Runs the patcher with the process arguments, reporting failures on
/// `stderr`.
#[must_use]
pub fn run<I, E>(args: I, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    E: Write,
{
    run_with_loader(args, stderr, &OrthoConfigLoader)
}

/// Runs the patcher with a substitute configuration loader.
#[must_use]
pub fn run_with_loader<I, E, L>(args: I, stderr: &mut E, loader: &L) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    E: Write,
    L: ConfigLoader,
{
    let args: Vec<OsString> = args.into_iter().collect();
    match execute(&args, loader) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            writeln!(stderr, "vfpatch: {error}").ok();
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration, initialises telemetry, and patches the contracts.
///
/// # Errors
///
/// Returns an [`AppError`] for configuration, telemetry, workspace, or
/// driver failures.
pub fn execute<L: ConfigLoader>(args: &[OsString], loader: &L) -> Result<RunSummary, AppError> {
    let config = loader.load(args)?;
    telemetry::initialise(&config)?;
    patch_contracts(&config)
}

/// Applies the crypto contract script to the files named by `config`.
///
/// # Errors
///
/// Returns [`AppError::Workspace`] when the root cannot be opened and
/// [`AppError::Driver`] when a step fails.
pub fn patch_contracts(config: &Config) -> Result<RunSummary, AppError> {
    let workspace = Workspace::open_ambient(config.root()).map_err(AppError::Workspace)?;
    info!(
        root = %config.root(),
        header = %config.header_path(),
        manifest = %config.manifest_path(),
        policy = %config.match_policy(),
        "patching crypto contracts"
    );

    let directives = crypto_contracts(config.header_path(), config.manifest_path());
    let summary = Driver::new(config.match_policy()).run(&workspace, &directives)?;
    Ok(summary)
}
