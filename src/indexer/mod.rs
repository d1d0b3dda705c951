//! Snapshot building for projects and workspaces
//!
//! # Error Handling Strategy
//!
//! Unlike a best-effort scan, indexing is all-or-nothing:
//!
//! - **Any I/O error aborts**: an unreadable directory, a vanished entry or a missing root
//!   stops the walk and surfaces [`crate::Error::Filesystem`] with the offending path.
//!
//! - **No partial snapshots**: builders return the full entry list only on success, and the
//!   caller persists it afterwards, so a failed run leaves the previous snapshot in place.
//!
//! - **Pruning is not an error**: excluded subtrees are skipped silently (logged at debug
//!   level) and the walk continues with their siblings.

pub mod builder;
pub mod workspace_discovery;

pub use builder::{IndexOptions, build_snapshot, is_excluded};
pub use workspace_discovery::{WORKSPACE_SUFFIX, scan_workspaces};
