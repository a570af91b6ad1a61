//! Top-level errors reported by the binary.

use std::sync::Arc;

use thiserror::Error;
use vfpatch_core::PatchError;

use crate::driver::DriverError;
use crate::telemetry::TelemetryError;

/// Errors that end a `vfpatch` invocation with a failure status.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded from flags, environment, or file.
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    /// Logging could not be initialised.
    #[error("failed to initialise telemetry: {0}")]
    Telemetry(#[from] TelemetryError),
    /// The workspace root could not be opened.
    #[error(transparent)]
    Workspace(PatchError),
    /// A patch step failed.
    #[error(transparent)]
    Driver(#[from] DriverError),
}
