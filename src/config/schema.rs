//! Configuration schema for relic
//!
//! Configuration is stored in `relic.toml` next to the project's sources.

use crate::module::ModuleFormat;
use crate::repository::git::DEFAULT_ABBREV;
use crate::version::DEFAULT_TAG_PREFIX;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version discovery settings
    pub version: VersionConfig,

    /// Generated module settings
    pub module: ModuleConfig,
}

/// How versions are derived from the repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionConfig {
    /// Regex stripped from the start of tag names
    pub tag_prefix: String,

    /// Abbreviated commit hash width
    pub abbrev: u8,

    /// Git executable
    pub git: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            tag_prefix: DEFAULT_TAG_PREFIX.to_string(),
            abbrev: DEFAULT_ABBREV,
            git: "git".to_string(),
        }
    }
}

/// Where and how the version module is written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// Module language
    pub format: ModuleFormat,

    /// File name (defaults to the format's own)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Output directory, relative to the project directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.version.tag_prefix, "release_");
        assert_eq!(config.version.abbrev, 8);
        assert_eq!(config.version.git, "git");
        assert_eq!(config.module.format, ModuleFormat::Rust);
        assert!(config.module.filename.is_none());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
[module]
format = "python"
dir = "src/mypkg"
"#,
        )
        .unwrap();

        assert_eq!(config.module.format, ModuleFormat::Python);
        assert_eq!(config.module.dir, Some(PathBuf::from("src/mypkg")));
        assert_eq!(config.version.tag_prefix, "release_");
    }

    #[test]
    fn serializes_to_toml() {
        let toml = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(toml.contains("[version]"));
        assert!(toml.contains("tag_prefix = \"release_\""));
        assert!(toml.contains("format = \"rust\""));
    }
}
