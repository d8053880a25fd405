use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use indicatif::ProgressBar;
use tracing::{debug, warn};

use crate::diff::unified_diff;
use crate::formatter::Formatter;
use crate::types::{CheckReport, Outcome};

/// Runs the formatter in dry-run mode on every file and prints a unified diff
/// for each one whose formatted output differs. Per-file problems are
/// reported and skipped; nothing on disk is modified.
///
/// # Errors
/// Returns an error only if writing to `out` fails.
pub fn check_files<W: Write>(
    formatter: &dyn Formatter,
    files: &[PathBuf],
    out: &mut W,
    progress: Option<&ProgressBar>,
) -> Result<CheckReport> {
    let mut report = CheckReport::default();
    emit(progress, || {
        writeln!(out, "Checking {} files for formatting violations...", files.len())
    })?;

    for path in files {
        let outcome = check_one(formatter, path);
        match &outcome {
            Outcome::Clean => debug!(path = %path.display(), "clean"),
            Outcome::Violation { diff } => emit(progress, || {
                writeln!(out, "\n[!] Formatting changes needed for {}:", path.display())?;
                out.write_all(diff.as_bytes())
            })?,
            Outcome::Skipped { reason } => {
                debug!(path = %path.display(), reason = %reason, "skipped");
                emit(progress, || {
                    writeln!(out, "Skipping binary or non-utf8 file: {}", path.display())
                })?;
            }
            Outcome::ToolError { message } => {
                warn!(path = %path.display(), "formatter failed");
                emit(progress, || {
                    writeln!(
                        out,
                        "Error running {} on {}: {message}",
                        formatter.name(),
                        path.display()
                    )
                })?;
            }
        }
        report.push(path.clone(), outcome);
        if let Some(pb) = progress {
            pb.inc(1);
        }
    }

    emit(progress, || {
        if report.has_violations() {
            writeln!(out, "\nFormatting issues found.")
        } else {
            writeln!(out, "No formatting changes needed.")
        }
    })?;
    Ok(report)
}

fn check_one(formatter: &dyn Formatter, path: &Path) -> Outcome {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(err) => {
            return Outcome::ToolError {
                message: format!("read failed: {err}"),
            };
        }
    };
    let Ok(original) = String::from_utf8(bytes) else {
        return Outcome::Skipped {
            reason: "file is not valid UTF-8".to_string(),
        };
    };

    let formatted = match formatter.format_to_string(path) {
        Ok(b) => b,
        Err(err) => {
            return Outcome::ToolError {
                message: format!("{err:#}"),
            };
        }
    };
    let Ok(formatted) = String::from_utf8(formatted) else {
        return Outcome::Skipped {
            reason: "formatter output is not valid UTF-8".to_string(),
        };
    };

    match unified_diff(&original, &formatted, &path.display().to_string()) {
        Some(diff) => Outcome::Violation { diff },
        None => Outcome::Clean,
    }
}

fn emit<F>(progress: Option<&ProgressBar>, f: F) -> std::io::Result<()>
where
    F: FnOnce() -> std::io::Result<()>,
{
    match progress {
        Some(pb) => pb.suspend(f),
        None => f(),
    }
}
