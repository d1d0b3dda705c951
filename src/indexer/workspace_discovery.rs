use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::WorkspaceEntry;

/// File suffix identifying editor workspace descriptors
pub const WORKSPACE_SUFFIX: &str = ".code-workspace";

/// Scan `dir` (non-recursively) for `*.code-workspace` files
///
/// Each file becomes one [`WorkspaceEntry`] whose name is the file name without the
/// suffix. Subdirectories are ignored, even when their name ends with the suffix.
/// Symlinks are followed; a dangling symlink is logged and skipped. Entries are returned
/// sorted by file name.
///
/// # Errors
///
/// Returns [`Error::Filesystem`] if `dir` cannot be read (including when it does not exist)
/// or if reading any directory entry or its metadata fails.
pub fn scan_workspaces(dir: &Path) -> Result<Vec<WorkspaceEntry>> {
    let read_dir = fs::read_dir(dir).map_err(|e| Error::fs(dir, e))?;

    let mut workspaces = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| Error::fs(dir, e))?;
        let path = entry.path();

        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        let Some(name) = file_name.strip_suffix(WORKSPACE_SUFFIX) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }

        let file_type = entry.file_type().map_err(|e| Error::fs(&path, e))?;
        let metadata = if file_type.is_symlink() {
            match fs::metadata(&path) {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping dangling workspace link");
                    continue;
                }
            }
        } else {
            entry.metadata().map_err(|e| Error::fs(&path, e))?
        };

        if !metadata.is_file() {
            continue;
        }

        let modified = metadata.modified().map_err(|e| Error::fs(&path, e))?;
        workspaces.push(WorkspaceEntry {
            name: name.to_string(),
            path,
            modified: DateTime::<Utc>::from(modified),
        });
    }

    workspaces.sort_by(|a, b| a.path.cmp(&b.path));
    info!(dir = %dir.display(), workspaces = workspaces.len(), "workspace scan finished");
    Ok(workspaces)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn create_workspace_dir(files: &[&str]) -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        for file in files {
            fs::write(dir.path().join(file), r#"{"folders": [], "settings": {}}"#)
                .expect("Failed to write workspace file");
        }
        dir
    }

    #[test]
    fn test_scan_finds_workspace_files_with_stripped_names() {
        let dir = create_workspace_dir(&["client.code-workspace", "api.code-workspace"]);

        let workspaces = scan_workspaces(dir.path()).unwrap();

        let names: Vec<&str> = workspaces.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["api", "client"]);
        assert_eq!(workspaces[0].path, dir.path().join("api.code-workspace"));
    }

    #[test]
    fn test_scan_ignores_other_files() {
        let dir = create_workspace_dir(&[
            "client.code-workspace",
            "readme.md",
            "client.code-workspace.bak",
            "settings.json",
        ]);

        let workspaces = scan_workspaces(dir.path()).unwrap();

        assert_eq!(workspaces.len(), 1);
        assert_eq!(workspaces[0].name, "client");
    }

    #[test]
    fn test_scan_is_not_recursive() {
        let dir = create_workspace_dir(&["top.code-workspace"]);
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("deep.code-workspace"), "{}").unwrap();

        let workspaces = scan_workspaces(dir.path()).unwrap();

        assert_eq!(workspaces.len(), 1);
        assert_eq!(workspaces[0].name, "top");
    }

    #[test]
    fn test_scan_skips_directories_with_suffix() {
        let dir = create_workspace_dir(&["real.code-workspace"]);
        fs::create_dir(dir.path().join("fake.code-workspace")).unwrap();

        let workspaces = scan_workspaces(dir.path()).unwrap();

        assert_eq!(workspaces.len(), 1);
        assert_eq!(workspaces[0].name, "real");
    }

    #[test]
    fn test_scan_skips_bare_suffix() {
        let dir = create_workspace_dir(&[".code-workspace"]);
        assert!(scan_workspaces(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(scan_workspaces(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_missing_directory_is_filesystem_error() {
        let dir = TempDir::new().unwrap();
        let result = scan_workspaces(&dir.path().join("workspaces"));
        assert!(matches!(result, Err(Error::Filesystem { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_dangling_symlink() {
        let dir = create_workspace_dir(&["ok.code-workspace"]);
        std::os::unix::fs::symlink(
            dir.path().join("missing-target"),
            dir.path().join("dangling.code-workspace"),
        )
        .unwrap();

        let workspaces = scan_workspaces(dir.path()).unwrap();

        assert_eq!(workspaces.len(), 1);
        assert_eq!(workspaces[0].name, "ok");
    }
}
