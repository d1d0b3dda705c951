use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context as _, Result};
use tracing::{debug, info, warn};

use super::{Context, Outcome};
use crate::config::Config;
use crate::dispatch::{DispatchMode, DispatchSettings, dispatch};
use crate::error::Error;
use crate::index_storage::{SnapshotKind, load_snapshot, save_snapshot};
use crate::indexer::{IndexOptions, WORKSPACE_SUFFIX, build_snapshot, scan_workspaces};
use crate::models::{Entry, IndexEntry, ProjectEntry, WorkspaceEntry};
use crate::search::{RankKey, order, search};
use crate::tui::format_timestamp;
use crate::utils::{AppPaths, format_path_with_tilde, sanitize_label, validate_workspace_name};

/// Root directories offered by first-run setup, relative to home
const ROOT_CHOICES: &[&str] = &["Desktop", "Documents", "Downloads"];
const EMPTY_WORKSPACE: &str = "{\n  \"folders\": [],\n  \"settings\": {}\n}\n";

pub(super) fn configure(ctx: &mut Context, root: Option<&Path>, force: bool) -> Result<Outcome> {
    if Config::exists(&ctx.paths) && !force {
        println!("Config already exists");
        return Ok(Outcome::Done);
    }

    let root = match root {
        Some(root) => root.to_path_buf(),
        None => {
            let labels: Vec<String> = ROOT_CHOICES.iter().map(|c| c.to_string()).collect();
            match ctx.selector.select("Select root directory", &labels)? {
                Some(idx) => PathBuf::from(ROOT_CHOICES[idx]),
                None => return Ok(cancelled()),
            }
        }
    };

    // --force keeps the other settings of a readable config
    let config = match Config::load(&ctx.paths) {
        Ok(mut existing) => {
            existing.root_dir = root;
            existing
        }
        Err(e) => {
            debug!(error = %e, "starting from a fresh config");
            Config::new(root)
        }
    };
    config.save(&ctx.paths).context("Error saving config")?;

    println!("Config saved: rootDir = {}", config.root_dir.display());
    Ok(Outcome::Done)
}

pub(super) fn index_projects(
    ctx: &mut Context,
    max_depth: Option<usize>,
    extra_excludes: &[String],
) -> Result<Outcome> {
    let config = load_config(&ctx.paths)?;
    let root = config.root(&ctx.paths);

    let mut excludes = config.excludes();
    excludes.extend(extra_excludes.iter().cloned());
    let options = IndexOptions { excludes, max_depth: max_depth.or(config.max_depth) };

    let started = Instant::now();
    let projects = build_snapshot(&root, &options)
        .with_context(|| format!("Error indexing {}", root.display()))?;

    let path = ctx.paths.snapshot_file(SnapshotKind::Projects);
    save_snapshot(&projects, &path).context("Error saving project index")?;

    println!("Indexed {} projects in {:.2?}", projects.len(), started.elapsed());
    Ok(Outcome::Done)
}

pub(super) fn index_workspaces(ctx: &mut Context) -> Result<Outcome> {
    let config = load_config(&ctx.paths)?;
    let dir = config.workspaces(&ctx.paths);

    let workspaces = scan_workspaces(&dir)
        .with_context(|| format!("Error scanning workspaces in {}", dir.display()))?;

    let path = ctx.paths.snapshot_file(SnapshotKind::Workspaces);
    save_snapshot(&workspaces, &path).context("Error saving workspace index")?;

    println!("Indexed {} workspaces", workspaces.len());
    Ok(Outcome::Done)
}

pub(super) fn init_workspace(ctx: &mut Context, name: &str) -> Result<Outcome> {
    validate_workspace_name(name)?;
    let config = load_config(&ctx.paths)?;

    let dir = config.workspaces(&ctx.paths);
    fs::create_dir_all(&dir).map_err(|e| Error::fs(&dir, e))?;

    let path = dir.join(format!("{}{}", name, WORKSPACE_SUFFIX));
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(Error::AlreadyExists(path).into());
        }
        Err(e) => return Err(Error::fs(path, e).into()),
    };
    write_new_file(&path, &mut file, EMPTY_WORKSPACE.as_bytes())?;

    info!(path = %path.display(), "created workspace");
    println!("Created workspace: {}", format_path_with_tilde(&path, &ctx.paths.home));
    Ok(Outcome::Done)
}

/// Write `contents` into a file this command just created, deleting it if the write fails
fn write_new_file(path: &Path, file: &mut impl Write, contents: &[u8]) -> crate::Result<()> {
    if let Err(e) = file.write_all(contents).and_then(|()| file.flush()) {
        if let Err(cleanup) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %cleanup, "could not remove partial file");
        }
        return Err(Error::fs(path, e));
    }
    Ok(())
}

/// Dispatch mode for the project flow's `-c`/`-t` flags
pub(super) fn project_mode(code: bool, tmux: bool) -> DispatchMode {
    match (code, tmux) {
        (true, _) => DispatchMode::EditorAttach,
        (_, true) => DispatchMode::Multiplexer,
        _ => DispatchMode::Shell,
    }
}

pub(super) fn find_project(ctx: &mut Context, query: &str, mode: DispatchMode) -> Result<Outcome> {
    let config = load_config(&ctx.paths)?;
    let path = ctx.paths.snapshot_file(SnapshotKind::Projects);
    let projects: Vec<ProjectEntry> =
        load_snapshot(&path).context("Error reading project index")?;

    // Only directories can be entered, attached or used as a session root
    let directories: Vec<ProjectEntry> = projects.into_iter().filter(|p| p.is_dir).collect();
    let matches = order(search(&directories, query), RankKey::Name);
    debug!(query, matches = matches.len(), "project search");

    if matches.is_empty() {
        println!("No projects found");
        return Ok(Outcome::NoMatches);
    }

    let Some(chosen) = pick(ctx, "Select project", &matches)? else {
        return Ok(cancelled());
    };

    let settings = DispatchSettings::from_config(&config);
    let shown = format_path_with_tilde(&chosen.path, &ctx.paths.home);
    println!("{}", project_message(mode, &chosen.name, &shown, &settings));
    dispatch(&IndexEntry::Project(chosen), mode, &settings, ctx.launcher.as_mut())
        .context("Error opening project")?;

    Ok(Outcome::Done)
}

/// Line printed before a project is handed to its dispatch target
fn project_message(
    mode: DispatchMode,
    name: &str,
    shown: &str,
    settings: &DispatchSettings,
) -> String {
    match mode {
        DispatchMode::EditorAttach => format!("Opening project: {} at {}", name, shown),
        DispatchMode::Multiplexer => format!(
            "Navigating to project: {} at {} and running {}",
            name, shown, settings.multiplexer
        ),
        DispatchMode::Shell | DispatchMode::EditorOpen => {
            format!("Navigating to project: {} at {}", name, shown)
        }
    }
}

pub(super) fn find_workspace(ctx: &mut Context, query: &str) -> Result<Outcome> {
    let config = load_config(&ctx.paths)?;
    let path = ctx.paths.snapshot_file(SnapshotKind::Workspaces);
    let workspaces: Vec<WorkspaceEntry> =
        load_snapshot(&path).context("Error reading workspace index")?;

    let matches = order(search(&workspaces, query), RankKey::Recency);
    debug!(query, matches = matches.len(), "workspace search");

    if matches.is_empty() {
        println!("No workspaces found");
        return Ok(Outcome::NoMatches);
    }

    let Some(chosen) = pick(ctx, "Select workspace", &matches)? else {
        return Ok(cancelled());
    };

    println!("Opening workspace: {}", format_path_with_tilde(&chosen.path, &ctx.paths.home));
    let settings = DispatchSettings::from_config(&config);
    let entry = IndexEntry::Workspace(chosen);
    dispatch(&entry, DispatchMode::EditorOpen, &settings, ctx.launcher.as_mut())
        .context("Error opening workspace")?;

    Ok(Outcome::Done)
}

fn load_config(paths: &AppPaths) -> Result<Config> {
    Config::load(paths).context("Error loading config")
}

/// Show the picker and take the chosen entry out of `matches`
fn pick<E: Entry + Clone>(ctx: &mut Context, prompt: &str, matches: &[E]) -> Result<Option<E>> {
    let labels: Vec<String> = matches.iter().map(|e| entry_label(e, &ctx.paths.home)).collect();

    let choice = ctx.selector.select(prompt, &labels).context("Error showing picker")?;
    match choice {
        Some(idx) => match matches.get(idx) {
            Some(entry) => Ok(Some(entry.clone())),
            None => Err(Error::InvalidInput(format!("selection {} out of range", idx)).into()),
        },
        None => Ok(None),
    }
}

/// Picker line for an entry: `name  (age)  ~/path`
pub(crate) fn entry_label(entry: &impl Entry, home: &Path) -> String {
    format!(
        "{}  ({})  {}",
        sanitize_label(entry.name()),
        format_timestamp(&entry.modified()),
        sanitize_label(&format_path_with_tilde(entry.path(), home))
    )
}

fn cancelled() -> Outcome {
    eprintln!("Cancelled");
    Outcome::Cancelled
}
