//! Command-line interface

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};

use crate::config::{Config, ConfigManager};
use crate::error::RelicResult;
use crate::info::InfoStore;
use crate::repository::GitRepository;
use crate::version::{TagPrefix, VersionRecord};
use std::path::{Path, PathBuf};

/// The project a command operates on, with its loaded configuration
pub struct Project {
    dir: PathBuf,
    config: Config,
    config_manager: ConfigManager,
}

impl Project {
    /// Load the project rooted at `dir`, reading `config_path` or `<dir>/relic.toml`
    pub fn load(dir: PathBuf, config_path: Option<PathBuf>) -> RelicResult<Self> {
        let config_manager = match config_path {
            Some(path) => ConfigManager::with_path(path),
            None => ConfigManager::for_project(&dir),
        };
        let config = config_manager.load()?;

        Ok(Self {
            dir,
            config,
            config_manager,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_manager(&self) -> &ConfigManager {
        &self.config_manager
    }

    /// Tag prefix from the command line, falling back to config
    pub fn tag_prefix(&self, prefix: Option<&str>) -> RelicResult<TagPrefix> {
        TagPrefix::new(prefix.unwrap_or(&self.config.version.tag_prefix))
    }

    /// Git query rooted at the project directory
    pub fn repository(&self) -> GitRepository {
        GitRepository::new(&self.dir)
            .with_program(&self.config.version.git)
            .with_abbrev(self.config.version.abbrev)
    }

    /// Cache file in the project directory
    pub fn store(&self) -> InfoStore {
        InfoStore::in_dir(&self.dir)
    }

    /// Current version, reconciling the cache with git
    pub fn resolve(&self, prefix: Option<&str>) -> RelicResult<VersionRecord> {
        let prefix = self.tag_prefix(prefix)?;
        self.store().get(&self.repository(), &prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn project_reads_local_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("relic.toml"),
            "[version]\ntag_prefix = \"v\"\ngit = \"relic-no-such-git\"\n",
        )
        .unwrap();

        let project = Project::load(temp.path().to_path_buf(), None).unwrap();
        assert_eq!(project.config().version.tag_prefix, "v");

        let prefix = project.tag_prefix(None).unwrap();
        assert_eq!(prefix.strip("v1.0"), "1.0");
        let prefix = project.tag_prefix(Some("")).unwrap();
        assert_eq!(prefix.strip("v1.0"), "v1.0");
    }

    #[test]
    fn resolve_without_git_uses_cache() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("relic.toml"),
            "[version]\ngit = \"relic-no-such-git\"\n",
        )
        .unwrap();
        let project = Project::load(temp.path().to_path_buf(), None).unwrap();

        assert_eq!(project.resolve(None).unwrap(), VersionRecord::fallback());

        let cached = crate::version::parse_descriptor("5.0", &TagPrefix::none()).unwrap();
        project.store().write(&cached).unwrap();
        assert_eq!(project.resolve(None).unwrap(), cached);
    }
}
