use std::path::{Path, PathBuf};

use tracing::debug;

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};
use crate::error::{ApiSnapError, Result};

pub const LOCAL_CONFIG_NAME: &str = ".api-snap.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or invalid.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.api-snap.toml` in the current directory
/// 2. `config.toml` in the platform config directory
/// 3. `Config::default()`
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn candidates(&self) -> impl Iterator<Item = PathBuf> {
        let local = self.fs.working_dir().map(|dir| dir.join(LOCAL_CONFIG_NAME));
        let user = self.fs.user_config_dir().map(|dir| dir.join(USER_CONFIG_NAME));
        local.into_iter().chain(user)
    }

    fn read(&self, path: &Path) -> Result<Option<String>> {
        self.fs
            .read_if_exists(path)
            .map_err(|source| ApiSnapError::FileAccess {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        for path in self.candidates() {
            if let Some(content) = self.read(&path)? {
                return parse(&path, &content);
            }
        }
        debug!("no configuration file found, using defaults");
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = self.read(path)?.ok_or_else(|| {
            ApiSnapError::Config(format!("Configuration file not found: {}", path.display()))
        })?;
        parse(path, &content)
    }
}

fn parse(path: &Path, content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.timeout_ms == 0 {
        return Err(ApiSnapError::Config("timeout_ms must be greater than 0".to_string()));
    }
    if config.storage_dir.as_os_str().is_empty() {
        return Err(ApiSnapError::Config("storage_dir cannot be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
