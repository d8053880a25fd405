use std::io::{self, Write};

use anyhow::Result;
use tracing::info;

use crate::applier::apply_in_place;
use crate::checker::check_files;
use crate::formatter::ClangFormat;
use crate::traversal::{CollectOptions, collect_files};

use super::Args;

pub fn run_with_args(args: &Args) -> Result<i32> {
    let opts = CollectOptions::from_lists(
        args.dirs.as_deref(),
        args.extensions.as_deref(),
        args.follow_symlinks,
    );
    info!(root = %args.root.display(), dirs = ?opts.dirs, exts = ?opts.extensions, "scanning");

    let files = collect_files(&args.root, &opts)?;
    info!(count = files.len(), "found files");

    // An empty tree never runs the formatter, so it need not be installed.
    let formatter = if files.is_empty() {
        ClangFormat::new(&args.formatter)
    } else {
        ClangFormat::locate(&args.formatter)?
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.check {
        apply_in_place(&formatter, &files, &mut out)?;
        return Ok(0);
    }

    let pb = if args.progress && !files.is_empty() {
        let pb = indicatif::ProgressBar::new(files.len() as u64);
        pb.set_style(
            indicatif::ProgressStyle::with_template("{spinner} {pos}/{len} files {wide_bar} {eta}")?
                .tick_chars("⠁⠃⠇⠋⠙⠸⢰⣠⣄⡆"),
        );
        Some(pb)
    } else {
        None
    };

    let report = if args.json {
        check_files(&formatter, &files, &mut io::sink(), pb.as_ref())?
    } else {
        check_files(&formatter, &files, &mut out, pb.as_ref())?
    };

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    if args.json {
        let s = serde_json::to_string_pretty(&report)?;
        writeln!(out, "{s}")?;
    }
    info!(
        checked = report.files_checked,
        violations = report.violations,
        skipped = report.skipped,
        tool_errors = report.tool_errors,
        "check finished"
    );
    Ok(report.exit_code())
}
