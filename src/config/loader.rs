//! Configuration loading logic

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::schema::Config;

const LOCAL_CONFIG_FILE: &str = ".prseed.toml";

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load configuration for a repository
    ///
    /// Load priority:
    /// 1. Local config (`.prseed.toml` in `repo_root`)
    /// 2. Global config (`~/.config/prseed/config.toml`)
    /// 3. Default config
    ///
    /// # Errors
    /// Returns an error if a configuration file exists but cannot be read or parsed
    pub fn load_from_repo_root(repo_root: &Path) -> Result<Self> {
        let local_config = Self::local_config_path_from(repo_root);
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(global_config) = Self::global_config_path() {
            if global_config.exists() {
                return Self::from_file(&global_config);
            }
        }

        Ok(Self::default())
    }

    #[must_use]
    pub fn local_config_path_from(repo_root: &Path) -> PathBuf {
        repo_root.join(LOCAL_CONFIG_FILE)
    }

    /// Get the global config path
    /// Respects `XDG_CONFIG_HOME` when it is absolute.
    /// Fallback: `$HOME/.config/prseed/config.toml`
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;

        Some(config_home.join("prseed").join("config.toml"))
    }

    /// Apply command-line overrides on top of the loaded values
    #[must_use]
    pub fn with_overrides(mut self, base: Option<&str>, remote: Option<&str>) -> Self {
        if let Some(base) = base {
            self.repository.base = base.to_string();
        }
        if let Some(remote) = remote {
            self.repository.remote = remote.to_string();
        }
        self
    }
}
