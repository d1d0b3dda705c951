//! Project snapshot builder.
//!
//! Walks the configured root with `walkdir` and records every directory it visits,
//! including the root itself. Excluded subtrees are pruned before they are descended into,
//! so nothing beneath a `node_modules` or `venv` directory is ever read.

use std::io;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::config::DEFAULT_EXCLUDES;
use crate::error::{Error, Result};
use crate::models::ProjectEntry;

/// Options controlling the project walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    /// Subtrees whose path below the root contains any of these fragments are skipped
    pub excludes: Vec<String>,
    /// Maximum depth below the root; `None` walks the whole tree
    pub max_depth: Option<usize>,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self { excludes: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(), max_depth: None }
    }
}

/// Build a project snapshot from every directory under `root`
///
/// Directories are emitted in walk order (sorted by file name within each directory). The
/// root is never excluded, even if its own path contains an excluded fragment; fragments
/// are matched case-sensitively against the path relative to the root.
///
/// # Errors
///
/// Returns [`Error::Filesystem`] on the first I/O error anywhere in the walk, including a
/// missing root. Partial results are discarded.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use findit::indexer::{IndexOptions, build_snapshot};
///
/// let projects = build_snapshot(Path::new("/Users/alice/Desktop"), &IndexOptions::default())?;
/// println!("Indexed {} projects", projects.len());
/// # Ok::<(), findit::Error>(())
/// ```
pub fn build_snapshot(root: &Path, options: &IndexOptions) -> Result<Vec<ProjectEntry>> {
    let started = Instant::now();
    let root = std::path::absolute(root).map_err(|e| Error::fs(root, e))?;
    info!(root = %root.display(), "starting project walk");

    let mut walker = WalkDir::new(&root).follow_links(false).sort_by_file_name();
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut entries = Vec::new();
    let iter = walker.into_iter().filter_entry(|entry| {
        let excluded = is_excluded(&root, entry.path(), &options.excludes);
        if excluded {
            debug!(path = %entry.path().display(), "skipping excluded subtree");
        }
        !excluded
    });

    for item in iter {
        let item = item.map_err(|e| walk_error(&root, e))?;
        if !item.file_type().is_dir() {
            continue;
        }
        entries.push(project_entry(&item)?);
    }

    info!(entries = entries.len(), elapsed = ?started.elapsed(), "project walk finished");
    Ok(entries)
}

fn project_entry(item: &DirEntry) -> Result<ProjectEntry> {
    let metadata = item.metadata().map_err(|e| {
        let path = item.path().to_path_buf();
        Error::fs(path, io::Error::from(e))
    })?;
    let modified = metadata.modified().map_err(|e| Error::fs(item.path(), e))?;

    Ok(ProjectEntry {
        name: item.file_name().to_string_lossy().into_owned(),
        path: item.path().to_path_buf(),
        is_dir: true,
        modified: DateTime::<Utc>::from(modified),
    })
}

/// Whether `path` lies in a subtree excluded by one of `excludes`
pub fn is_excluded(root: &Path, path: &Path, excludes: &[String]) -> bool {
    let Ok(relative) = path.strip_prefix(root) else {
        return false;
    };
    if relative.as_os_str().is_empty() {
        return false;
    }

    let relative = relative.to_string_lossy();
    excludes.iter().any(|fragment| !fragment.is_empty() && relative.contains(fragment.as_str()))
}

fn walk_error(root: &Path, err: walkdir::Error) -> Error {
    let path = err.path().unwrap_or(root).to_path_buf();
    Error::fs(path, io::Error::from(err))
}
