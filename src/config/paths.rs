//! Platform paths for the configuration file.

use directories::ProjectDirs;
use std::path::PathBuf;

/// File name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Configuration directory, if the platform has one.
    pub config: Option<PathBuf>,
}

impl AppPaths {
    /// Paths for the prettytime application.
    ///
    /// Linux: `~/.config/prettytime`, macOS:
    /// `~/Library/Application Support/prettytime`, Windows:
    /// `%APPDATA%\prettytime\config`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ProjectDirs::from("", "", "prettytime")
                .map(|dirs| dirs.config_dir().to_path_buf()),
        }
    }

    /// Path to the config file.
    #[must_use]
    pub fn config_file(&self) -> Option<PathBuf> {
        self.config.as_ref().map(|dir| dir.join(CONFIG_FILE_NAME))
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
