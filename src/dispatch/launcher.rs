use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

/// A fully resolved external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<OsString>,
    /// Working directory for the child; the invoking process's own directory is untouched
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new(), cwd: None }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

/// How a foreground child finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Success,
    Code(i32),
    Signal,
}

impl ExitOutcome {
    pub fn success(self) -> bool {
        self == ExitOutcome::Success
    }
}

impl From<ExitStatus> for ExitOutcome {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            _ if status.success() => ExitOutcome::Success,
            Some(code) => ExitOutcome::Code(code),
            None => ExitOutcome::Signal,
        }
    }
}

impl fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitOutcome::Success => f.write_str("success"),
            ExitOutcome::Code(code) => write!(f, "exit code {}", code),
            ExitOutcome::Signal => f.write_str("a signal"),
        }
    }
}

/// Process launching seam (allows recording launches in tests)
pub trait Launcher {
    /// Run in the foreground with inherited stdio, blocking until the child exits
    fn run(&mut self, command: &CommandSpec) -> io::Result<ExitOutcome>;

    /// Start in the background without waiting for the child
    fn spawn(&mut self, command: &CommandSpec) -> io::Result<()>;
}

/// Launcher backed by `std::process::Command`
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    fn command(spec: &CommandSpec) -> Command {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args);
        if let Some(dir) = &spec.cwd {
            command.current_dir(dir);
        }
        command
    }
}

impl Launcher for SystemLauncher {
    fn run(&mut self, spec: &CommandSpec) -> io::Result<ExitOutcome> {
        debug!(
            program = %spec.program,
            args = ?spec.args,
            cwd = ?spec.cwd,
            "running foreground command"
        );
        let status = Self::command(spec)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        Ok(ExitOutcome::from(status))
    }

    fn spawn(&mut self, spec: &CommandSpec) -> io::Result<()> {
        debug!(program = %spec.program, args = ?spec.args, "spawning background command");
        // The child is intentionally not waited on
        let _child = Self::command(spec)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}
