//! # semicount
//!
//! Counts lines of text and semicolons across every file under `src/`.
//!
//! ## Usage
//!
//! ```bash
//! # Count the files under ./src
//! semicount
//!
//! # Same, logging every file as it is counted
//! semicount --verbose
//! ```
//!
//! Output is always two lines on stdout:
//!
//! ```text
//! LOC: 1234
//! SEMICOLONS: 567
//! ```
//!
//! Files that cannot be read as UTF-8 text are reported on stderr as
//! `Skipping <path>: <error>` and left out of the totals.

mod render;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use semicountlib::count_directory;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use render::{render_skipped, render_totals, write_report};

/// Directory scanned on every run, relative to the working directory
const DEFAULT_ROOT: &str = "src";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("semicount")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Counts lines and semicolons in every file under src/")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log each file as it is counted"),
        )
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("semicount=debug,semicountlib=debug,warn")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(root: &Path) -> anyhow::Result<()> {
    let result = count_directory(root)?;
    debug!(
        root = %root.display(),
        counted = result.file_count,
        skipped = result.skipped.len(),
        "scan finished"
    );

    write_report(&mut io::stderr().lock(), &render_skipped(&result.skipped))?;
    write_report(&mut io::stdout().lock(), &render_totals(&result.total))?;

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(Path::new(DEFAULT_ROOT)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
