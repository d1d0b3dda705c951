use std::process::ExitCode;

use clap::Parser;
use findit::cli::{Cli, Context, execute};
use findit::dispatch::SystemLauncher;
use findit::error::{exit_code, find_error};
use findit::tui::TerminalSelector;
use findit::utils::AppPaths;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "FINDIT_LOG";

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = AppPaths::from_env().and_then(|paths| {
        let mut ctx = Context {
            paths,
            selector: Box::new(TerminalSelector),
            launcher: Box::new(SystemLauncher),
        };
        execute(&cli, &mut ctx)
    });

    match result {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if let Some(hint) = find_error(&err).and_then(|e| e.hint()) {
                eprintln!("{}", hint);
            }
            ExitCode::from(exit_code(&err))
        }
    }
}
