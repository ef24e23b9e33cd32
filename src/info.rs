//! Cached version information
//!
//! The last known version record lives in a `RELIC-INFO` JSON file. The
//! cache lets builds from exported source trees (no `.git`) still report
//! the version they were cut from, and lets `get` detect drift between the
//! cache and the live repository.

use crate::error::{RelicError, RelicResult};
use crate::repository::Repository;
use crate::version::{TagPrefix, VersionRecord};
use console::style;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Name of the cache file inside the store directory
pub const INFO_FILE: &str = "RELIC-INFO";

/// Outcome of reconciling the cached record with the live query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Neither source had version information
    Fallback,
    /// The live query differs from the cache and replaces it
    Refreshed(VersionRecord),
    /// The cached record is current (or the only record available)
    Cached(VersionRecord),
}

/// Decide which record wins. Pure; performs no I/O.
pub fn resolve(cached: Option<VersionRecord>, live: Option<VersionRecord>) -> Resolution {
    match (cached, live) {
        (None, None) => Resolution::Fallback,
        (Some(cached), Some(live)) if cached == live => Resolution::Cached(cached),
        (_, Some(live)) => Resolution::Refreshed(live),
        (Some(cached), None) => Resolution::Cached(cached),
    }
}

/// Single-file store for the last known version record
#[derive(Debug, Clone)]
pub struct InfoStore {
    path: PathBuf,
}

impl InfoStore {
    /// Store backed by `RELIC-INFO` in `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(INFO_FILE),
        }
    }

    /// Path of the cache file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the cache with `record`
    pub fn write(&self, record: &VersionRecord) -> RelicResult<()> {
        let mut content = serde_json::to_string(record)?;
        content.push('\n');

        fs::write(&self.path, content)
            .map_err(|e| RelicError::io(format!("writing {}", self.path.display()), e))?;

        debug!("Cached {} in {}", record.long(), self.path.display());
        Ok(())
    }

    /// Load the cached record. Any failure is a cache miss.
    pub fn read(&self) -> Option<VersionRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No usable cache at {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Ignoring invalid {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Reconcile the cache with the live repository.
    ///
    /// A differing live record is persisted before it is returned. When no
    /// source has version information, a warning is printed and the
    /// fallback record is returned so the build can proceed.
    pub fn get(&self, repo: &dyn Repository, prefix: &TagPrefix) -> RelicResult<VersionRecord> {
        let cached = self.read();
        let live = repo.query(prefix);

        match resolve(cached, live) {
            Resolution::Fallback => {
                warn!(
                    "No version data from {} or {}",
                    repo.backend_name(),
                    self.path.display()
                );
                eprintln!(
                    "{} no version data available!",
                    style("warning:").yellow().bold()
                );
                Ok(VersionRecord::fallback())
            }
            Resolution::Refreshed(record) => {
                info!("Version changed to {}, updating cache", record.long());
                self.write(&record)?;
                Ok(record)
            }
            Resolution::Cached(record) => {
                debug!("Using cached version {}", record.long());
                Ok(record)
            }
        }
    }
}
