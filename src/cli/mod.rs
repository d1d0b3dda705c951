//! Command-line surface.
//!
//! [`Cli`] is the clap definition; [`execute`] runs a parsed command against a
//! [`Context`] holding the paths, the picker and the process launcher. Commands print
//! their results to stdout and return an [`Outcome`]; failures are returned as
//! `anyhow::Error` for `main` to report.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::dispatch::Launcher;
use crate::error::{EXIT_CANCELLED, EXIT_NO_MATCHES};
use crate::tui::Selector;
use crate::utils::AppPaths;

#[derive(Debug, Parser)]
#[command(name = "findit")]
#[command(version)]
#[command(about = "Index local projects and jump into them", long_about = None)]
pub struct Cli {
    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Set the directory that gets indexed
    Config {
        /// Root directory (relative paths are taken from the home directory)
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Replace an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Rebuild the project index
    Index {
        /// Maximum directory depth below the root
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,

        /// Additional path fragment to skip (repeatable)
        #[arg(short, long = "exclude", value_name = "FRAG")]
        exclude: Vec<String>,
    },

    /// Manage editor workspaces
    Workspace {
        #[command(subcommand)]
        command: WorkspaceCommands,
    },

    /// Search the index and open the chosen entry
    Find {
        /// Project name query
        #[arg(required_unless_present = "workspace")]
        query: Option<String>,

        /// Attach the project to the editor instead of starting a shell
        #[arg(short, long, conflicts_with = "tmux")]
        code: bool,

        /// Start the tmux helper in the project
        #[arg(short, long)]
        tmux: bool,

        /// Search workspaces instead of projects
        #[arg(
            short,
            long,
            value_name = "QUERY",
            conflicts_with_all = ["query", "code", "tmux"]
        )]
        workspace: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum WorkspaceCommands {
    /// Rebuild the workspace index
    Index,

    /// Create an empty workspace file
    Init { name: String },

    /// Search workspaces and open the chosen one
    Find { query: String },
}

/// Collaborators shared by every command
pub struct Context {
    pub paths: AppPaths,
    pub selector: Box<dyn Selector>,
    pub launcher: Box<dyn Launcher>,
}

/// Non-error result of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    NoMatches,
    Cancelled,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Done => 0,
            Outcome::NoMatches => EXIT_NO_MATCHES,
            Outcome::Cancelled => EXIT_CANCELLED,
        }
    }
}

/// Run the parsed command
pub fn execute(cli: &Cli, ctx: &mut Context) -> Result<Outcome> {
    match &cli.command {
        Some(Commands::Config { root, force }) => commands::configure(ctx, root.as_deref(), *force),
        Some(Commands::Index { max_depth, exclude }) => {
            commands::index_projects(ctx, *max_depth, exclude)
        }
        Some(Commands::Workspace { command }) => match command {
            WorkspaceCommands::Index => commands::index_workspaces(ctx),
            WorkspaceCommands::Init { name } => commands::init_workspace(ctx, name),
            WorkspaceCommands::Find { query } => commands::find_workspace(ctx, query),
        },
        Some(Commands::Find { query, code, tmux, workspace }) => match workspace {
            Some(query) => commands::find_workspace(ctx, query),
            None => {
                let mode = commands::project_mode(*code, *tmux);
                commands::find_project(ctx, query.as_deref().unwrap_or_default(), mode)
            }
        },
        None => {
            println!("Use --help for usage information");
            Ok(Outcome::Done)
        }
    }
}
