use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};

use crate::formatter::DEFAULT_FORMATTER;

mod run_impl;

#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug, Clone)]
#[command(
    name = "cfmt",
    version,
    about = "Format or check C/C++ project files with clang-format",
    long_about = None
)]
pub struct Args {
    /// Project root; `src` and `include` below it are scanned
    #[arg(value_name = "ROOT", default_value = ".", value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    /// Show diffs instead of editing files; exits 1 when any file needs changes
    #[arg(long = "check", action = ArgAction::SetTrue)]
    pub check: bool,

    /// Print the check result as JSON instead of diffs
    #[arg(long = "json", action = ArgAction::SetTrue, requires = "check")]
    pub json: bool,

    /// Formatter executable (name on PATH or explicit path)
    #[arg(long = "formatter", value_name = "PROGRAM", default_value = DEFAULT_FORMATTER)]
    pub formatter: String,

    /// Comma-separated subdirectories of ROOT to scan, e.g. src,include
    #[arg(long = "dirs", value_name = "LIST")]
    pub dirs: Option<String>,

    /// Comma-separated file extensions, e.g. c,h
    #[arg(long = "ext", value_name = "LIST")]
    pub extensions: Option<String>,

    /// Follow symlinks while walking
    #[arg(long = "follow-symlinks", action = ArgAction::SetTrue)]
    pub follow_symlinks: bool,

    /// Show a progress bar on stderr while checking
    #[arg(long = "progress", action = ArgAction::SetTrue)]
    pub progress: bool,

    /// Verbose logging (-v info, -vv debug)
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the CLI application and returns the process exit code.
///
/// # Errors
/// Returns an error if collecting files, locating the formatter or an
/// in-place formatting run fails.
pub fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);
    run_impl::run_with_args(&args)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = format!("cfmt={level}").parse() {
        filter = filter.add_directive(directive);
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
