//! Git-backed repository queries using the git CLI

use super::Repository;
use crate::error::{RelicError, RelicResult};
use crate::version::{parse_descriptor, TagPrefix, VersionRecord};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Default width of abbreviated commit hashes
pub const DEFAULT_ABBREV: u8 = 8;

/// Accepted hash widths. `--abbrev=0` makes `git describe` drop the distance.
pub const ABBREV_RANGE: std::ops::RangeInclusive<u8> = 4..=40;

/// Repository query that shells out to `git` in an explicit working directory
#[derive(Debug, Clone)]
pub struct GitRepository {
    workdir: PathBuf,
    program: String,
    abbrev: u8,
}

impl GitRepository {
    /// Create a query rooted at `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            program: "git".to_string(),
            abbrev: DEFAULT_ABBREV,
        }
    }

    /// Use a different git executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Set the abbreviated hash width passed to `git describe`, clamped to
    /// `ABBREV_RANGE`
    pub fn with_abbrev(mut self, abbrev: u8) -> Self {
        self.abbrev = abbrev.clamp(*ABBREV_RANGE.start(), *ABBREV_RANGE.end());
        self
    }

    /// Check whether the working directory is inside a git work tree
    pub fn is_work_tree(&self) -> bool {
        match self.run(&["rev-parse", "--is-inside-work-tree"]) {
            Ok(Some(out)) => out == "true",
            Ok(None) => false,
            Err(e) => {
                debug!("git unavailable: {}", e);
                false
            }
        }
    }

    /// Raw `git describe` output, `None` when no tag is reachable
    pub fn describe(&self) -> Option<String> {
        let abbrev = format!("--abbrev={}", self.abbrev);
        self.run(&["describe", "--tags", "--dirty", &abbrev])
            .ok()
            .flatten()
    }

    /// Committer date of HEAD, e.g. `2024-03-01 12:00:00 +0100`
    pub fn commit_date(&self) -> Option<String> {
        self.run(&["log", "-1", "--format=%ci"]).ok().flatten()
    }

    /// Abbreviated hash of HEAD
    pub fn head_commit(&self) -> Option<String> {
        let short = format!("--short={}", self.abbrev);
        self.run(&["rev-parse", &short, "HEAD"]).ok().flatten()
    }

    /// Run git and return trimmed stdout.
    ///
    /// A non-zero exit is `Ok(None)`; failing to spawn git is an error.
    fn run(&self, args: &[&str]) -> RelicResult<Option<String>> {
        let command = format!("{} {}", self.program, args.join(" "));
        debug!("Running {} in {}", command, self.workdir.display());

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| RelicError::command_failed(&command, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("{} exited with {}: {}", command, output.status, stderr.trim());
            return Ok(None);
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if stdout.is_empty() {
            Ok(None)
        } else {
            Ok(Some(stdout))
        }
    }
}

impl Repository for GitRepository {
    fn query(&self, prefix: &TagPrefix) -> Option<VersionRecord> {
        if !self.is_work_tree() {
            debug!("{} is not a git work tree", self.workdir.display());
            return None;
        }

        let Some(descriptor) = self.describe() else {
            debug!("No tags reachable from HEAD");
            return None;
        };

        let record = match parse_descriptor(&descriptor, prefix) {
            Ok(record) => record,
            Err(e) => {
                warn!("Ignoring git describe output: {}", e);
                return None;
            }
        };

        let record = if record.commit().is_empty() {
            match self.head_commit() {
                Some(commit) => record.with_commit(commit),
                None => record,
            }
        } else {
            record
        };

        let date = self.commit_date().unwrap_or_default();
        debug!("git reports {} ({})", record.long(), date);
        Some(record.with_date(date))
    }

    fn backend_name(&self) -> &'static str {
        "git"
    }
}
