#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Strips trailing whitespace; `-i` rewrites files, otherwise prints to stdout.
/// Any path containing `FAILME` makes it fail.
const FAKE_FORMATTER: &str = r#"#!/bin/sh
if [ "$1" = "-i" ]; then
  shift
  for f in "$@"; do
    case "$f" in *FAILME*) echo "cannot format $f" >&2; exit 1;; esac
    sed 's/[[:space:]]*$//' "$f" > "$f.cfmt-tmp" && mv "$f.cfmt-tmp" "$f"
  done
else
  case "$1" in *FAILME*) echo "cannot format $1" >&2; exit 1;; esac
  sed 's/[[:space:]]*$//' "$1"
fi
"#;

pub fn write(root: &Path, rel: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let p = root.join(rel);
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(&p, content).unwrap();
    p
}

#[cfg(unix)]
pub fn fake_formatter(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let tool = dir.join("fake-clang-format");
    fs::write(&tool, FAKE_FORMATTER).unwrap();
    fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
    tool
}

pub fn cfmt(root: &Path, formatter: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cfmt"))
        .arg(root)
        .arg("--formatter")
        .arg(formatter)
        .args(extra)
        .output()
        .expect("run cfmt")
}
