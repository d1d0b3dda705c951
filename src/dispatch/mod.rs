//! Follow-up actions on a selected entry.
//!
//! | Mode           | Entry kind | Command                                   | Blocking |
//! |----------------|------------|-------------------------------------------|----------|
//! | `Shell`        | project    | `$SHELL` in the project directory         | yes      |
//! | `EditorAttach` | project    | `<editor> -a <dir>`                       | no       |
//! | `Multiplexer`  | project    | `sh -c 'cd "$1" && exec "$2"' sh <dir> <helper>` | yes |
//! | `EditorOpen`   | workspace  | `<editor> <file>`                         | no       |
//!
//! Commands are resolved by [`plan`] and executed through a [`Launcher`], so the exact
//! invocation can be checked without spawning anything. Launch failures come back as
//! [`Error::Process`]; they never abort the host process.

pub mod launcher;

use std::env;
use std::io;

use tracing::{info, warn};

pub use launcher::{CommandSpec, ExitOutcome, Launcher, SystemLauncher};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{Entry, EntryKind, IndexEntry};

/// Shell used when `$SHELL` is unset or empty
pub const DEFAULT_SHELL: &str = "/bin/bash";
const MULTIPLEXER_SCRIPT: &str = r#"cd "$1" && exec "$2""#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// Interactive shell in the project directory
    Shell,
    /// Attach the project folder to the current editor window
    EditorAttach,
    /// Terminal multiplexer helper started from the project directory
    Multiplexer,
    /// Open a workspace file in the editor
    EditorOpen,
}

impl DispatchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DispatchMode::Shell => "shell",
            DispatchMode::EditorAttach => "editor-attach",
            DispatchMode::Multiplexer => "multiplexer-session",
            DispatchMode::EditorOpen => "editor-open",
        }
    }

    /// Whether the invoking process waits for the child to exit
    pub fn is_blocking(self) -> bool {
        matches!(self, DispatchMode::Shell | DispatchMode::Multiplexer)
    }

    fn accepts(self, kind: EntryKind) -> bool {
        match self {
            DispatchMode::Shell | DispatchMode::EditorAttach | DispatchMode::Multiplexer => {
                kind == EntryKind::Project
            }
            DispatchMode::EditorOpen => kind == EntryKind::Workspace,
        }
    }
}

/// External programs used by the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchSettings {
    pub shell: String,
    pub editor: String,
    pub multiplexer: String,
}

impl DispatchSettings {
    /// Editor and multiplexer from the config, shell from `$SHELL`
    pub fn from_config(config: &Config) -> Self {
        Self {
            shell: shell_from_env(),
            editor: config.editor().to_string(),
            multiplexer: config.multiplexer().to_string(),
        }
    }
}

/// The user's login shell, falling back to [`DEFAULT_SHELL`]
pub fn shell_from_env() -> String {
    env::var("SHELL").ok().filter(|s| !s.trim().is_empty()).unwrap_or_else(|| DEFAULT_SHELL.into())
}

/// Resolve the command `mode` would run for `entry`
///
/// # Errors
///
/// - [`Error::Unsupported`] if the mode does not apply to the entry's kind
/// - [`Error::Process`] if a shell is requested for a path that is not a directory
pub fn plan(
    entry: &IndexEntry,
    mode: DispatchMode,
    settings: &DispatchSettings,
) -> Result<CommandSpec> {
    if !mode.accepts(entry.kind()) {
        return Err(Error::Unsupported { entry: entry.kind().as_str(), mode: mode.as_str() });
    }

    let path = entry.path();
    let spec = match mode {
        DispatchMode::Shell => {
            if !path.is_dir() {
                return Err(Error::Process {
                    program: settings.shell.clone(),
                    source: io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("{} is not a directory", path.display()),
                    ),
                });
            }
            CommandSpec::new(&settings.shell).current_dir(path)
        }
        DispatchMode::EditorAttach => CommandSpec::new(&settings.editor).arg("-a").arg(path),
        DispatchMode::Multiplexer => CommandSpec::new("sh")
            .arg("-c")
            .arg(MULTIPLEXER_SCRIPT)
            .arg("sh")
            .arg(path)
            .arg(&settings.multiplexer),
        DispatchMode::EditorOpen => CommandSpec::new(&settings.editor).arg(path),
    };

    Ok(spec)
}

/// Perform `mode` on `entry`
///
/// Blocking modes return once the child exits. A non-zero exit from the interactive shell
/// is only logged, since it usually reflects the last command typed in it; a failing
/// multiplexer helper is reported as [`Error::ProcessStatus`].
pub fn dispatch(
    entry: &IndexEntry,
    mode: DispatchMode,
    settings: &DispatchSettings,
    launcher: &mut dyn Launcher,
) -> Result<()> {
    let spec = plan(entry, mode, settings)?;
    info!(
        mode = mode.as_str(),
        path = %entry.path().display(),
        program = %spec.program,
        "dispatching"
    );

    let launch_error = |source: io::Error| Error::Process { program: spec.program.clone(), source };

    if !mode.is_blocking() {
        return launcher.spawn(&spec).map_err(launch_error);
    }

    let outcome = launcher.run(&spec).map_err(launch_error)?;
    match (mode, outcome) {
        (_, ExitOutcome::Success) => Ok(()),
        (DispatchMode::Multiplexer, outcome) => {
            Err(Error::ProcessStatus { program: settings.multiplexer.clone(), outcome })
        }
        (_, outcome) => {
            warn!(program = %spec.program, %outcome, "shell exited unsuccessfully");
            Ok(())
        }
    }
}
