//! Relic - version constants from git tags
//!
//! Derives a version record from `git describe`, caches it in a
//! `RELIC-INFO` file and renders it into a module of constants.

pub mod cli;
pub mod config;
pub mod error;
pub mod info;
pub mod module;
pub mod repository;
pub mod ui;
pub mod version;

pub use error::{RelicError, RelicResult};
pub use info::InfoStore;
pub use module::{ModuleFormat, ModuleWriter};
pub use repository::{GitRepository, Repository};
pub use version::{parse_descriptor, BuildStatus, TagPrefix, VersionRecord};
