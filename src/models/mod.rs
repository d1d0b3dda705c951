//! Data models for indexed projects and workspaces.
//!
//! - [`ProjectEntry`] - A directory found under the configured root
//! - [`WorkspaceEntry`] - A `.code-workspace` file in the workspaces directory
//! - [`IndexEntry`] - Tagged variant over both kinds, handed to the dispatcher
//! - [`Entry`] - Shared accessors used by matching, ranking and labelling
//!
//! Both entry structs serialize with stable JSON keys (`name`, `path`, `modified`, plus
//! `isDir` for projects) so snapshot files stay readable and hand-editable.

pub mod entry;

pub use entry::{Entry, EntryKind, IndexEntry, ProjectEntry, WorkspaceEntry};
