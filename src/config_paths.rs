use std::path::{Path, PathBuf};

use crate::app_errors::AppError;
use crate::{CONFIG_DIR, CONFIG_EXTENSION};

/// The four candidate locations tried for a raw `--config` value, in
/// preference order: the value itself, the value under the config directory,
/// then both of those with the config extension appended.
pub(crate) fn candidate_paths(raw: &str) -> [PathBuf; 4] {
    [
        PathBuf::from(raw),
        PathBuf::from(format!("{CONFIG_DIR}/{raw}")),
        PathBuf::from(format!("{CONFIG_DIR}/{raw}.{CONFIG_EXTENSION}")),
        PathBuf::from(format!("{raw}.{CONFIG_EXTENSION}")),
    ]
}

/// Returns the first candidate under `base_dir` that exists and is a regular
/// file. `base_dir` is empty in production, making the checked paths exactly
/// the candidates relative to the working directory; tests pass a temp dir.
pub(crate) fn resolve_config_path(base_dir: &Path, raw: &str) -> Result<PathBuf, AppError> {
    let attempted: Vec<PathBuf> = candidate_paths(raw)
        .into_iter()
        .map(|candidate| base_dir.join(candidate))
        .collect();

    for path in &attempted {
        if path.is_file() {
            return Ok(path.clone());
        }
    }

    Err(AppError::ConfigNotFound {
        raw: raw.to_string(),
        attempted,
    })
}
