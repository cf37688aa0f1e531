//! Path resolution for fieldlog data.
//!
//! Provides semantic errors for path operations and a single resolution
//! order shared by every adapter, so all surfaces read and write the same
//! store.

use std::env;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "FIELDLOG_DATA_DIR";

/// Errors that can occur during path resolution and directory operations.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the system data directory.
    #[error("Cannot determine system data directory")]
    NoDataDir,

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },
}

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `FIELDLOG_DATA_DIR` environment variable (highest priority,
///    returned as given)
/// 2. System data directory (e.g. `~/.local/share/fieldlog`), created if
///    missing
pub fn data_root() -> Result<PathBuf, PathError> {
    resolve_data_root(env::var(DATA_DIR_ENV).ok(), dirs::data_local_dir())
}

/// Get the directory holding the record store.
///
/// Returns the `store/` subdirectory of the data root, created if it
/// doesn't exist.
pub fn store_dir() -> Result<PathBuf, PathError> {
    let dir = data_root()?.join("store");

    fs::create_dir_all(&dir).map_err(|e| PathError::CreateFailed {
        path: dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(dir)
}

/// Pure resolution step, separated so tests can drive it without touching
/// process environment.
fn resolve_data_root(
    env_override: Option<String>,
    platform_dir: Option<PathBuf>,
) -> Result<PathBuf, PathError> {
    // 1. Runtime override (highest priority)
    if let Some(path) = env_override {
        return Ok(PathBuf::from(path));
    }

    // 2. System data directory
    let data_dir = platform_dir.ok_or(PathError::NoDataDir)?;
    let root = data_dir.join("fieldlog");

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}
