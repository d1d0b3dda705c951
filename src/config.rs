//! `config.json`: the configured index root plus optional overrides.
//!
//! Only `rootDir` is required. A relative root (e.g. `Desktop`) is resolved against the
//! home directory, which is how the first-run `config` command stores its choice.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::AppPaths;

/// Name fragments excluded from the project walk when the config does not override them
pub const DEFAULT_EXCLUDES: &[&str] = &["node_modules", "venv"];
pub const DEFAULT_EDITOR: &str = "code";
pub const DEFAULT_MULTIPLEXER: &str = "tmux-dev";
const DEFAULT_WORKSPACES_SUBDIR: &str = "workspaces";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub root_dir: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspaces_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplexer: Option<String>,
}

impl Config {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            workspaces_dir: None,
            exclude: None,
            max_depth: None,
            editor: None,
            multiplexer: None,
        }
    }

    /// Whether a config file is present
    pub fn exists(paths: &AppPaths) -> bool {
        paths.config_file().is_file()
    }

    /// Load the config file
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigMissing`] if the file does not exist
    /// - [`Error::Parse`] if it is not valid config JSON
    pub fn load(paths: &AppPaths) -> Result<Self> {
        let path = paths.config_file();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::ConfigMissing(path));
            }
            Err(e) => return Err(Error::fs(path, e)),
        };

        serde_json::from_str(&content).map_err(|e| Error::Parse { path, source: e })
    }

    /// Write the config file, creating the config directory if needed
    pub fn save(&self, paths: &AppPaths) -> Result<()> {
        let path = paths.config_file();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Serialize { path: path.clone(), source: e })?;

        fs::create_dir_all(&paths.config_dir).map_err(|e| Error::fs(&paths.config_dir, e))?;
        fs::write(&path, json).map_err(|e| Error::fs(path, e))
    }

    /// Absolute directory the project walk starts from
    pub fn root(&self, paths: &AppPaths) -> PathBuf {
        paths.resolve(&self.root_dir)
    }

    /// Absolute directory scanned for workspace files
    pub fn workspaces(&self, paths: &AppPaths) -> PathBuf {
        match &self.workspaces_dir {
            Some(dir) => paths.resolve(dir),
            None => self.root(paths).join(DEFAULT_WORKSPACES_SUBDIR),
        }
    }

    pub fn excludes(&self) -> Vec<String> {
        match &self.exclude {
            Some(list) => list.clone(),
            None => DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn editor(&self) -> &str {
        self.editor.as_deref().unwrap_or(DEFAULT_EDITOR)
    }

    pub fn multiplexer(&self) -> &str {
        self.multiplexer.as_deref().unwrap_or(DEFAULT_MULTIPLEXER)
    }
}
