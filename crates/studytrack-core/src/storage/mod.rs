mod config;
pub mod store;

pub use config::{Config, LoggingConfig, StorageConfig};
pub use store::{JsonStore, MemoryStore, Roster, StudentStore};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns the data directory.
///
/// `STUDYTRACK_HOME` wins when set. Otherwise `~/.config/studytrack[-dev]/`,
/// with `STUDYTRACK_ENV=dev` selecting the development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("STUDYTRACK_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("STUDYTRACK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("studytrack-dev")
            } else {
                base_dir.join("studytrack")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
