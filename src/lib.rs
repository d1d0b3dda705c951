//! findit - index local project directories and jump into them
//!
//! The pipeline has four stages:
//!
//! - **Indexing**: walk the configured root for directories ([`build_snapshot`]) and scan the
//!   workspaces directory for `.code-workspace` files ([`scan_workspaces`])
//! - **Storage**: persist each result as a JSON snapshot under `~/.project-finder/`
//! - **Search**: subsequence-match entry names against a query ([`search`]) and sort the
//!   matches by name or recency ([`order`])
//! - **Dispatch**: open the chosen entry in a shell, the editor or a tmux session
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use findit::indexer::IndexOptions;
//! use findit::search::RankKey;
//! use findit::{build_snapshot, order, search};
//!
//! let projects = build_snapshot(Path::new("/Users/alice/Desktop"), &IndexOptions::default())?;
//! for project in order(search(&projects, "api"), RankKey::Name) {
//!     println!("{}", project.path.display());
//! }
//! # Ok::<(), findit::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod index_storage;
pub mod indexer;
pub mod models;
pub mod search;
pub mod tui;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
pub use indexer::{build_snapshot, scan_workspaces};
pub use models::{Entry, IndexEntry, ProjectEntry, WorkspaceEntry};
pub use search::{order, search};
pub use utils::paths::format_path_with_tilde;
