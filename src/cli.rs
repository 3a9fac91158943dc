//! Command line entry point.
//!
//! The program takes exactly one positional argument, the catalog file. A
//! missing argument or a missing file is fatal; everything after startup is
//! handled by [`Session`](crate::session::Session).

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::StoreConfig;
use crate::session::Session;
use crate::store::Catalog;
use crate::validation;

/// Personal book catalog backed by a slash-delimited text file
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the catalog file
    pub file_path: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    ///
    /// `--help` and `--version` print and exit with status 0.
    ///
    /// # Errors
    ///
    /// Returns an error describing the usage problem if the arguments do not
    /// parse, so the caller can exit with status 1.
    pub fn parse_args() -> anyhow::Result<Self> {
        match Cli::try_parse() {
            Ok(cli) => Ok(cli),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            },
            Err(e) => {
                let rendered = e.render().to_string();
                let message = rendered.strip_prefix("error: ").unwrap_or(&rendered);
                bail!("{}", message.trim_end())
            },
        }
    }
}

/// Install the stderr log subscriber.
///
/// The filter is fixed at `warn`: corrupted catalog lines are reported, routine
/// load/save events are not.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();
}

/// Parse arguments, load the catalog and run the interactive session.
///
/// # Errors
///
/// Returns an error if the arguments are wrong, the catalog file does not
/// exist or cannot be read, or the console fails.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse_args()?;
    init_logging();

    if !cli.file_path.exists() {
        bail!("File '{}' not found.", cli.file_path.display());
    }

    let current_year = validation::current_year();
    let (catalog, report) = Catalog::open(&cli.file_path, &StoreConfig::default(), current_year)
        .with_context(|| format!("Could not read '{}'", cli.file_path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Some(path) = &report.quarantine {
        writeln!(
            out,
            "\n[INFO] Corrupted entries have been saved in '{}'. Please review and fix them.\n",
            path.display()
        )?;
    }

    let stdin = io::stdin();
    let mut session = Session::new(catalog, stdin.lock(), out, current_year);
    session.run()?;
    Ok(())
}
