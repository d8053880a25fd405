use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Clean,
    Violation { diff: String },
    Skipped { reason: String },
    ToolError { message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub files_checked: usize,
    pub violations: usize,
    pub skipped: usize,
    pub tool_errors: usize,
    pub clean: usize,
    pub files: Vec<FileOutcome>,
}

impl CheckReport {
    pub fn push(&mut self, path: PathBuf, outcome: Outcome) {
        self.files_checked += 1;
        match outcome {
            Outcome::Clean => self.clean += 1,
            Outcome::Violation { .. } => self.violations += 1,
            Outcome::Skipped { .. } => self.skipped += 1,
            Outcome::ToolError { .. } => self.tool_errors += 1,
        }
        self.files.push(FileOutcome { path, outcome });
    }

    /// Only formatting differences fail a check; skips and tool errors don't.
    pub fn has_violations(&self) -> bool {
        self.violations > 0
    }

    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_violations())
    }
}
