use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, anyhow, bail};
use tracing::debug;

pub const DEFAULT_FORMATTER: &str = "clang-format";

/// The external formatting tool. Implementations never reformat anything
/// themselves; they only drive a binary.
pub trait Formatter {
    /// Display name used in diagnostics.
    fn name(&self) -> &str;

    /// Dry run: returns the fully formatted content of `path` without
    /// touching the file.
    ///
    /// # Errors
    /// Returns an error if the tool cannot be spawned or exits non-zero.
    fn format_to_string(&self, path: &Path) -> Result<Vec<u8>>;

    /// Rewrites every file in `paths` on disk in one invocation.
    ///
    /// # Errors
    /// Returns an error if the tool cannot be spawned or exits non-zero.
    fn format_in_place(&self, paths: &[PathBuf]) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct ClangFormat {
    name: String,
    program: PathBuf,
}

impl ClangFormat {
    /// Uses `program` as given, without checking that it exists.
    pub fn new(program: &str) -> Self {
        Self {
            name: program.to_string(),
            program: PathBuf::from(program),
        }
    }

    /// Resolves `program` on `PATH` (or as an explicit path).
    ///
    /// # Errors
    /// Returns an error if no executable can be found.
    pub fn locate(program: &str) -> Result<Self> {
        let resolved =
            which::which(program).map_err(|_| anyhow!("formatter '{program}' not found"))?;
        debug!(program, resolved = %resolved.display(), "located formatter");
        Ok(Self {
            name: program.to_string(),
            program: resolved,
        })
    }
}

impl Formatter for ClangFormat {
    fn name(&self) -> &str {
        &self.name
    }

    fn format_to_string(&self, path: &Path) -> Result<Vec<u8>> {
        let output = Command::new(&self.program)
            .arg(path)
            .output()
            .with_context(|| format!("spawn {}", self.name))?;
        if !output.status.success() {
            bail!(
                "{} exited with {}: {}",
                self.name,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(output.stdout)
    }

    fn format_in_place(&self, paths: &[PathBuf]) -> Result<()> {
        debug!(files = paths.len(), "running {} -i", self.name);
        let status = Command::new(&self.program)
            .arg("-i")
            .args(paths)
            .status()
            .with_context(|| format!("spawn {}", self.name))?;
        if !status.success() {
            bail!("{} -i exited with {status}", self.name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_reports_missing_binary() {
        let err = ClangFormat::locate("cfmt-definitely-not-a-real-formatter").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[cfg(unix)]
    #[test]
    fn dry_run_captures_stdout_and_in_place_rewrites() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("upper-fmt");
        fs::write(
            &tool,
            "#!/bin/sh\nif [ \"$1\" = \"-i\" ]; then shift; for f; do tr a-z A-Z < \"$f\" > \"$f.tmp\" && mv \"$f.tmp\" \"$f\"; done; else tr a-z A-Z < \"$1\"; fi\n",
        )
        .unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();

        let src = dir.path().join("a.c");
        fs::write(&src, "int a;\n").unwrap();

        let fmt = ClangFormat::locate(tool.to_str().unwrap()).unwrap();
        assert_eq!(fmt.format_to_string(&src).unwrap(), b"INT A;\n");
        assert_eq!(fs::read_to_string(&src).unwrap(), "int a;\n");

        fmt.format_in_place(&[src.clone()]).unwrap();
        assert_eq!(fs::read_to_string(&src).unwrap(), "INT A;\n");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_an_error() {
        let fmt = ClangFormat::locate("false").unwrap();
        let err = fmt.format_to_string(Path::new("a.c")).unwrap_err();
        assert!(err.to_string().contains("exited with"));
        assert!(fmt.format_in_place(&[PathBuf::from("a.c")]).is_err());
    }
}
