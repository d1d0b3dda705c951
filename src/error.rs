//! Error kinds shared by every stage of the index/search/dispatch pipeline.
//!
//! Library functions return [`Result`] with a typed [`Error`]. The CLI layer wraps these in
//! `anyhow::Error` with extra context, and [`exit_code`] recovers the kind from the chain so
//! each failure leaves the process with a distinct status.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::dispatch::ExitOutcome;

pub type Result<T> = std::result::Result<T, Error>;

/// Exit status for a query that matched nothing
pub const EXIT_NO_MATCHES: u8 = 1;
/// Exit status when the user aborts the picker
pub const EXIT_CANCELLED: u8 = 130;
/// Exit status for errors that are not a [`Error`]
const EXIT_UNKNOWN: u8 = 1;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no config file found at {}", .0.display())]
    ConfigMissing(PathBuf),

    #[error("filesystem error at {}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("snapshot not found: {}", .0.display())]
    SnapshotNotFound(PathBuf),

    #[error("malformed JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode JSON for {}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to launch `{program}`")]
    Process {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` exited with {outcome}")]
    ProcessStatus { program: String, outcome: ExitOutcome },

    #[error("interactive prompt failed")]
    Prompt(#[source] io::Error),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{entry} entries cannot be opened with {mode}")]
    Unsupported { entry: &'static str, mode: &'static str },

    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

impl Error {
    /// Wrap an I/O error with the path it occurred on
    pub fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Filesystem { path: path.into(), source }
    }

    /// Process exit status for this error kind
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidInput(_) | Error::Unsupported { .. } => 2,
            Error::ConfigMissing(_) => 3,
            Error::SnapshotNotFound(_) => 4,
            Error::Filesystem { .. } => 5,
            Error::Parse { .. } | Error::Serialize { .. } => 6,
            Error::Process { .. } | Error::ProcessStatus { .. } => 7,
            Error::Prompt(_) => 8,
            Error::AlreadyExists(_) => 9,
        }
    }

    /// Follow-up advice printed under the error message, if any
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::ConfigMissing(_) => Some("Run 'findit config' to set the config"),
            Error::SnapshotNotFound(path) => {
                if path.file_name().is_some_and(|name| name == "workspaces.json") {
                    Some("Try running 'findit workspace index' first")
                } else {
                    Some("Try running 'findit index' first")
                }
            }
            _ => None,
        }
    }
}

/// Find the first [`Error`] in an anyhow chain
pub fn find_error(err: &anyhow::Error) -> Option<&Error> {
    err.chain().find_map(|cause| cause.downcast_ref::<Error>())
}

/// Map an error raised by a command to the process exit status
pub fn exit_code(err: &anyhow::Error) -> u8 {
    find_error(err).map(Error::exit_code).unwrap_or(EXIT_UNKNOWN)
}
