//! Generated version modules
//!
//! Renders a `VersionRecord` into a source file of constants that the
//! application includes to report its own version:
//!
//! ```rust,ignore
//! // build.rs
//! let record = InfoStore::in_dir(&manifest_dir).get(&GitRepository::new(&manifest_dir), &TagPrefix::default())?;
//! ModuleWriter::new(ModuleFormat::Rust).write(&record, Path::new(&out_dir), None)?;
//!
//! // src/lib.rs
//! include!(concat!(env!("OUT_DIR"), "/version.rs"));
//! ```

pub mod clock;
pub mod template;

pub use clock::{Clock, FixedClock, SystemClock};
pub use template::BuildStamp;

use crate::error::{RelicError, RelicResult};
use crate::version::VersionRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Language of the generated module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    /// `pub const` items, for `include!`
    #[default]
    Rust,
    /// Dunder module variables
    Python,
}

impl ModuleFormat {
    /// File name used when the caller does not pick one
    pub fn default_filename(&self) -> &'static str {
        match self {
            Self::Rust => "version.rs",
            Self::Python => "version.py",
        }
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rust => "rust",
            Self::Python => "python",
        };
        write!(f, "{}", name)
    }
}

/// Writes version modules stamped with the build date and time
#[derive(Debug, Clone)]
pub struct ModuleWriter<C: Clock = SystemClock> {
    format: ModuleFormat,
    clock: C,
}

impl ModuleWriter<SystemClock> {
    /// Writer stamping modules with the wall clock
    pub fn new(format: ModuleFormat) -> Self {
        Self {
            format,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> ModuleWriter<C> {
    /// Writer stamping modules with `clock`
    pub fn with_clock(format: ModuleFormat, clock: C) -> Self {
        Self { format, clock }
    }

    /// Render the module text for `record`
    pub fn render(&self, record: &VersionRecord) -> String {
        let stamp = BuildStamp {
            date: self.clock.date().format("%Y-%m-%d").to_string(),
            time: self.clock.time().format("%H:%M:%S%.6f").to_string(),
        };

        match self.format {
            ModuleFormat::Rust => template::render_rust(record, &stamp),
            ModuleFormat::Python => template::render_python(record, &stamp),
        }
    }

    /// Render and write the module into `dir`, overwriting any existing file.
    ///
    /// `dir` must exist. Returns the path written.
    pub fn write(
        &self,
        record: &VersionRecord,
        dir: &Path,
        filename: Option<&str>,
    ) -> RelicResult<PathBuf> {
        let path = dir.join(filename.unwrap_or(self.format.default_filename()));
        let content = self.render(record);

        fs::write(&path, content)
            .map_err(|e| RelicError::io(format!("writing {}", path.display()), e))?;

        info!("Wrote {} module {} ({})", self.format, path.display(), record);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::{parse_descriptor, TagPrefix};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_micro_opt(12, 34, 56, 789)
                .unwrap(),
        )
    }

    fn record() -> VersionRecord {
        parse_descriptor("1.0-2-gabcdef01-dirty", &TagPrefix::default()).unwrap()
    }

    #[test]
    fn default_filenames() {
        assert_eq!(ModuleFormat::Rust.default_filename(), "version.rs");
        assert_eq!(ModuleFormat::Python.default_filename(), "version.py");
        assert_eq!(ModuleFormat::default(), ModuleFormat::Rust);
    }

    #[test]
    fn render_uses_clock() {
        let writer = ModuleWriter::with_clock(ModuleFormat::Rust, clock());
        let text = writer.render(&record());
        assert!(text.contains("pub const BUILD_DATE: &str = \"2024-05-01\";"));
        assert!(text.contains("pub const BUILD_TIME: &str = \"12:34:56.000789\";"));
    }

    #[test]
    fn write_default_filename() {
        let temp = TempDir::new().unwrap();
        let writer = ModuleWriter::with_clock(ModuleFormat::Python, clock());

        let path = writer.write(&record(), temp.path(), None).unwrap();

        assert_eq!(path, temp.path().join("version.py"));
        assert_eq!(fs::read_to_string(&path).unwrap(), writer.render(&record()));
    }

    #[test]
    fn write_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("_version.rs");
        fs::write(&target, "stale").unwrap();

        let writer = ModuleWriter::with_clock(ModuleFormat::Rust, clock());
        let path = writer
            .write(&record(), temp.path(), Some("_version.rs"))
            .unwrap();

        assert_eq!(path, target);
        let content = fs::read_to_string(&target).unwrap();
        assert!(content.starts_with("// AUTOMATICALLY GENERATED BY 'RELIC':"));
        assert!(content.contains("pub const VERSION_DIRTY: bool = true;"));
    }

    #[test]
    fn write_into_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let writer = ModuleWriter::new(ModuleFormat::Rust);
        let err = writer
            .write(&record(), &temp.path().join("missing"), None)
            .unwrap_err();
        assert!(matches!(err, RelicError::Io { .. }));
    }
}
