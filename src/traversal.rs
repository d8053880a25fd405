use std::path::{Path, PathBuf};

use anyhow::Result;
use ignore::WalkBuilder;
use tracing::debug;

pub const DEFAULT_DIRS: &[&str] = &["src", "include"];
pub const DEFAULT_EXTS: &[&str] = &[".c", ".h"];

#[derive(Debug, Clone)]
pub struct CollectOptions {
    pub dirs: Vec<String>,
    pub extensions: Vec<String>, // with leading dot
    pub follow_symlinks: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            dirs: DEFAULT_DIRS.iter().map(ToString::to_string).collect(),
            extensions: DEFAULT_EXTS.iter().map(ToString::to_string).collect(),
            follow_symlinks: false,
        }
    }
}

impl CollectOptions {
    /// Builds options from comma-separated lists as given on the command line.
    /// Extensions may be written with or without the leading dot.
    pub fn from_lists(dirs: Option<&str>, exts: Option<&str>, follow_symlinks: bool) -> Self {
        let mut opts = Self {
            follow_symlinks,
            ..Self::default()
        };
        if let Some(list) = dirs {
            opts.dirs = split_list(list).map(str::to_string).collect();
        }
        if let Some(list) = exts {
            opts.extensions = split_list(list)
                .map(|t| format!(".{}", t.trim_start_matches('.')))
                .collect();
        }
        opts
    }

    fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}

fn split_list(s: &str) -> impl Iterator<Item = &str> {
    s.split(',').map(str::trim).filter(|t| !t.is_empty())
}

/// Collects files under `root/<dir>` for every configured directory.
/// Missing directories are skipped silently.
///
/// # Errors
/// Currently never fails; walk errors on single entries are logged and skipped.
pub fn collect_files(root: &Path, opts: &CollectOptions) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for dir in &opts.dirs {
        let base = root.join(dir);
        if !base.is_dir() {
            debug!(dir = %base.display(), "directory missing, skipping");
            continue;
        }

        let mut builder = WalkBuilder::new(&base);
        builder.follow_links(opts.follow_symlinks);
        // plain walk: no ignore files, no hidden-file filtering
        builder.standard_filters(false);
        builder.sort_by_file_name(|a, b| a.cmp(b));

        for dent in builder.build() {
            let dent = match dent {
                Ok(d) => d,
                Err(err) => {
                    debug!(%err, "walk error");
                    continue;
                }
            };
            let path = dent.path();
            if !path.is_file() || !opts.matches(path) {
                continue;
            }
            out.push(path.to_path_buf());
        }
    }
    debug!(count = out.len(), root = %root.display(), "collected files");
    Ok(out)
}
