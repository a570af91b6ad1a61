//! Configuration loading seam for the runtime.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use vfpatch_config::Config;

use crate::errors::AppError;

/// Loads configuration for a run.
pub trait ConfigLoader {
    /// Loads the configuration from the process arguments.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LoadConfiguration`] when any layer is malformed.
    fn load(&self, args: &[OsString]) -> Result<Config, AppError>;
}

/// Loader that layers defaults, file, environment, and flags via
/// `ortho_config`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrthoConfigLoader;

impl ConfigLoader for OrthoConfigLoader {
    fn load(&self, args: &[OsString]) -> Result<Config, AppError> {
        Config::load_from_iter(args.iter().cloned()).map_err(AppError::LoadConfiguration)
    }
}
