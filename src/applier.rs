use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::formatter::Formatter;

/// Formats every file in place with a single formatter invocation.
/// An empty list never reaches the formatter.
///
/// # Errors
/// A failing formatter run is fatal and returned as-is; there is no
/// per-file recovery here.
pub fn apply_in_place<W: Write>(
    formatter: &dyn Formatter,
    files: &[PathBuf],
    out: &mut W,
) -> Result<()> {
    if files.is_empty() {
        writeln!(out, "No files to format.")?;
        return Ok(());
    }

    writeln!(out, "Formatting {} files...", files.len())?;
    out.flush()?;
    info!(files = files.len(), formatter = formatter.name(), "formatting in place");
    formatter
        .format_in_place(files)
        .with_context(|| format!("formatting {} files failed", files.len()))?;
    writeln!(out, "Done.")?;
    Ok(())
}
