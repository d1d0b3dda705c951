//! Snapshot persistence: load/save with atomic writes

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};

/// The two snapshot files kept in the config directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotKind {
    Projects,
    Workspaces,
}

impl SnapshotKind {
    pub fn file_name(self) -> &'static str {
        match self {
            SnapshotKind::Projects => "projects.json",
            SnapshotKind::Workspaces => "workspaces.json",
        }
    }
}

/// Save a full snapshot to `path`, replacing any previous file
///
/// Writes to a sibling temp file and renames it over the destination, so a reader never
/// observes a half-written snapshot. Parent directories are created if missing.
///
/// Entries that cannot be encoded fail with [`Error::Serialize`] before anything is
/// written.
pub fn save_snapshot<E: Serialize>(entries: &[E], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)
        .map_err(|e| Error::Serialize { path: path.to_path_buf(), source: e })?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::fs(parent, e))?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    fs::write(temp_path, json).map_err(|e| Error::fs(temp_path, e))?;
    fs::rename(temp_path, path).map_err(|e| Error::fs(path, e))?;

    debug!(path = %path.display(), entries = entries.len(), "snapshot saved");
    Ok(())
}

/// Load a snapshot from `path`
///
/// # Errors
///
/// - [`Error::SnapshotNotFound`] if the file is absent, or present but empty (a first
///   write that never completed)
/// - [`Error::Filesystem`] for any other read failure, such as missing permissions
/// - [`Error::Parse`] if the content is not a JSON array of entries
pub fn load_snapshot<E: DeserializeOwned>(path: &Path) -> Result<Vec<E>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::SnapshotNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(Error::fs(path, e)),
    };

    if content.trim().is_empty() {
        return Err(Error::SnapshotNotFound(path.to_path_buf()));
    }

    let entries: Vec<E> = serde_json::from_str(&content)
        .map_err(|e| Error::Parse { path: path.to_path_buf(), source: e })?;

    debug!(path = %path.display(), entries = entries.len(), "snapshot loaded");
    Ok(entries)
}
