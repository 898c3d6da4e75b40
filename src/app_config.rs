use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app_errors::AppError;

/// Runtime configuration.
///
/// No keys are recognized yet: any well-formed TOML document loads into the
/// same empty record, and unknown keys are ignored rather than rejected.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct AppConfig {}

/// Reads and parses the configuration file at `path`. The path is expected
/// to come out of [`crate::config_paths::resolve_config_path`].
pub(crate) fn load_config(path: &Path) -> Result<AppConfig, AppError> {
    let raw = fs::read_to_string(path)?;
    toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
