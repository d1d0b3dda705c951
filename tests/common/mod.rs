//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

/// Builder for a temporary home directory with a findit setup
///
/// The root directory defaults to `Desktop` under the temporary home.
pub struct FinderHomeBuilder {
    temp_dir: TempDir,
    root: String,
    config: Option<String>,
}

impl FinderHomeBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, root: "Desktop".to_string(), config: None }
    }

    /// Write a config pointing at `root` (relative to home)
    pub fn with_config(mut self, root: &str) -> Self {
        self.root = root.to_string();
        self.config = Some(format!("{{\n  \"rootDir\": \"{}\"\n}}", root));
        self
    }

    /// Write a raw config file body
    pub fn with_raw_config(mut self, content: &str) -> Self {
        self.config = Some(content.to_string());
        self
    }

    /// Create a directory below the root (e.g. `app/src`)
    pub fn with_project(self, relative: &str) -> Self {
        let path = self.root_dir().join(relative);
        fs::create_dir_all(&path).expect("Failed to create project dir");
        self
    }

    /// Create a `.code-workspace` file in `<root>/workspaces` with an mtime `age` in the past
    pub fn with_workspace(self, name: &str, age: Duration) -> Self {
        let dir = self.root_dir().join("workspaces");
        fs::create_dir_all(&dir).expect("Failed to create workspaces dir");

        let path = dir.join(format!("{}.code-workspace", name));
        fs::write(&path, "{\"folders\": [], \"settings\": {}}").expect("Failed to write workspace");
        let file = fs::File::options().write(true).open(&path).expect("Failed to open workspace");
        file.set_modified(SystemTime::now() - age).expect("Failed to set mtime");
        self
    }

    /// Write a snapshot file body directly
    pub fn with_snapshot(self, file_name: &str, content: &str) -> Self {
        let dir = self.config_dir();
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        fs::write(dir.join(file_name), content).expect("Failed to write snapshot");
        self
    }

    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn root_dir(&self) -> PathBuf {
        self.temp_dir.path().join(&self.root)
    }

    pub fn config_dir(&self) -> PathBuf {
        self.temp_dir.path().join(".project-finder")
    }

    /// Write the config (if any) and return the temp home
    pub fn build(self) -> TempDir {
        if let Some(config) = &self.config {
            let dir = self.config_dir();
            fs::create_dir_all(&dir).expect("Failed to create config dir");
            fs::write(dir.join("config.json"), config).expect("Failed to write config");
        }
        fs::create_dir_all(self.root_dir()).expect("Failed to create root dir");
        self.temp_dir
    }
}

impl Default for FinderHomeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A ready-to-index home: a few projects, one pruned dependency tree and two workspaces
pub fn realistic_home() -> TempDir {
    FinderHomeBuilder::new()
        .with_config("Desktop")
        .with_project("alpha/src")
        .with_project("alpha/node_modules/left-pad")
        .with_project("beta/.venv/lib")
        .with_project("beta/docs")
        .with_project("gamma")
        .with_workspace("client", Duration::from_secs(3600))
        .with_workspace("internal", Duration::from_secs(86_400 * 10))
        .build()
}
