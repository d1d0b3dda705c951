use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which snapshot an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Project,
    Workspace,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Project => "project",
            EntryKind::Workspace => "workspace",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common view over indexed entries used by matching, ranking and labelling
pub trait Entry {
    fn name(&self) -> &str;
    fn path(&self) -> &Path;
    fn modified(&self) -> DateTime<Utc>;
    fn kind(&self) -> EntryKind;
}

fn default_is_dir() -> bool {
    true
}

/// A directory captured by the project walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub path: PathBuf,
    #[serde(rename = "isDir", default = "default_is_dir")]
    pub is_dir: bool,
    pub modified: DateTime<Utc>,
}

/// An editor workspace descriptor file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceEntry {
    pub name: String,
    pub path: PathBuf,
    pub modified: DateTime<Utc>,
}

impl Entry for ProjectEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    fn kind(&self) -> EntryKind {
        EntryKind::Project
    }
}

impl Entry for WorkspaceEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    fn kind(&self) -> EntryKind {
        EntryKind::Workspace
    }
}

/// A selected entry handed to the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEntry {
    Project(ProjectEntry),
    Workspace(WorkspaceEntry),
}

impl IndexEntry {
    fn inner(&self) -> &dyn Entry {
        match self {
            IndexEntry::Project(project) => project,
            IndexEntry::Workspace(workspace) => workspace,
        }
    }
}

impl Entry for IndexEntry {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn path(&self) -> &Path {
        self.inner().path()
    }

    fn modified(&self) -> DateTime<Utc> {
        self.inner().modified()
    }

    fn kind(&self) -> EntryKind {
        self.inner().kind()
    }
}

impl From<ProjectEntry> for IndexEntry {
    fn from(entry: ProjectEntry) -> Self {
        IndexEntry::Project(entry)
    }
}

impl From<WorkspaceEntry> for IndexEntry {
    fn from(entry: WorkspaceEntry) -> Self {
        IndexEntry::Workspace(entry)
    }
}
