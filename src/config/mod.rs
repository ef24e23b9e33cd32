//! Configuration management for relic

pub mod schema;

pub use schema::Config;

use crate::error::{RelicError, RelicResult};
use crate::repository::git::ABBREV_RANGE;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the project configuration file
pub const CONFIG_FILE: &str = "relic.toml";

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Config manager for `relic.toml` in a project directory
    pub fn for_project(project_dir: &Path) -> Self {
        Self {
            config_path: project_dir.join(CONFIG_FILE),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Load configuration, using defaults if the file does not exist
    pub fn load(&self) -> RelicResult<Config> {
        if !self.config_path.exists() {
            debug!(
                "Config file {} not found, using defaults",
                self.config_path.display()
            );
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(&self, path: &Path) -> RelicResult<Config> {
        let content = fs::read_to_string(path)
            .map_err(|e| RelicError::io(format!("reading config from {}", path.display()), e))?;

        let config: Config = toml::from_str(&content).map_err(|e| RelicError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if !ABBREV_RANGE.contains(&config.version.abbrev) {
            return Err(RelicError::ConfigInvalid {
                path: path.to_path_buf(),
                reason: format!(
                    "version.abbrev must be between {} and {}, got {}",
                    ABBREV_RANGE.start(),
                    ABBREV_RANGE.end(),
                    config.version.abbrev
                ),
            });
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, config: &Config) -> RelicResult<()> {
        self.ensure_config_dir()?;

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).map_err(|e| {
            RelicError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    /// Ensure the config directory exists
    fn ensure_config_dir(&self) -> RelicResult<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| RelicError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }
        Ok(())
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}
