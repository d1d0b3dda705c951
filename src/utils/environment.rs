use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::index_storage::SnapshotKind;

/// Name of the per-user directory holding config and snapshots
pub const CONFIG_DIR_NAME: &str = ".project-finder";
const CONFIG_FILENAME: &str = "config.json";

/// Locations of the user's home and the findit config directory.
///
/// Built once at startup and threaded into every command so tests can point the whole
/// pipeline at a temporary directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub home: PathBuf,
    pub config_dir: PathBuf,
}

impl AppPaths {
    /// Use `home` as the home directory and `home/.project-finder` for state
    pub fn new(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let config_dir = home.join(CONFIG_DIR_NAME);
        Self { home, config_dir }
    }

    /// Resolve paths from the current user's home directory
    pub fn from_env() -> Result<Self> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(Self::new(home))
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILENAME)
    }

    pub fn snapshot_file(&self, kind: SnapshotKind) -> PathBuf {
        self.config_dir.join(kind.file_name())
    }

    /// Resolve a possibly relative path against the home directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.home.join(path) }
    }
}
