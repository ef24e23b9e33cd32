//! Repository queries
//!
//! Provides a trait for obtaining the current version record from a
//! version-control checkout. Absence of version information is `None`,
//! never an error:
//! - not a repository
//! - version-control tool not installed
//! - no tag reachable from HEAD

pub mod git;

pub use git::GitRepository;

use crate::version::{TagPrefix, VersionRecord};

/// Abstract source of live version information
pub trait Repository {
    /// Query the current version, stripping `prefix` from tag names
    fn query(&self, prefix: &TagPrefix) -> Option<VersionRecord>;

    /// Human-readable backend name for display
    fn backend_name(&self) -> &'static str;
}
