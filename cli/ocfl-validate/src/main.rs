//! `validate-ocfl-extensions` — CI gate for the OCFL root extension registries.
//!
//! Prints `OCFL extension validation: PASS` or `FAIL` (followed by one line
//! per problem) and exits 0 or 1 accordingly.

mod commands;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::validate::Format;

#[derive(Parser)]
#[command(
    name = "validate-ocfl-extensions",
    version,
    about = "Validate OCFL extension registries (packaging-format-registry, property-registry)"
)]
struct Cli {
    /// Override path to ocfl-root-extensions directory
    #[arg(long = "ocfl-extensions-root", env = "OCFL_EXTENSIONS_ROOT", value_name = "DIR")]
    ocfl_root: Option<PathBuf>,
    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Human)]
    format: Format,
    /// Log validation progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let root = match cli.ocfl_root {
        Some(root) => root,
        None => ocfl_registry::default_root(&program_dir()?),
    };
    tracing::debug!(root = %root.display(), "resolved registry root");

    let stdout = std::io::stdout();
    commands::validate::run(&root, cli.format, &mut stdout.lock())
}

/// Directory containing the running executable.
fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locating the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .context("executable path has no parent directory")
}

/// Logs go to stderr; stdout carries only the report.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
