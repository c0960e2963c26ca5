use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Where configuration files are looked up and read from.
pub trait FileSystem {
    /// Contents of the file at `path`, or `Ok(None)` if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read.
    fn read_if_exists(&self, path: &Path) -> std::io::Result<Option<String>>;

    /// Directory searched for `.api-snap.toml`.
    fn working_dir(&self) -> Option<PathBuf>;

    /// Per-user config directory (`~/.config/api-snap` on Linux).
    fn user_config_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_if_exists(&self, path: &Path) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn working_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }

    fn user_config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "api-snap")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
