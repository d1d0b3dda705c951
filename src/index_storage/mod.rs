//! Snapshot storage
//!
//! Each index run writes one JSON array per entry kind into the config directory:
//! - `projects.json`: every directory found under the configured root
//! - `workspaces.json`: every `.code-workspace` file in the workspaces directory
//!
//! A snapshot is always replaced wholesale; there is no incremental merge and no schema
//! version, so a format change invalidates existing files.

pub mod persistence;

pub use persistence::{SnapshotKind, load_snapshot, save_snapshot};
