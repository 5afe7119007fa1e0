use crate::models::LaunchConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Default directory holding the launch configuration.
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// File name of the launch configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "hanoi.yaml";

/// Configuration manager for the read-only launch configuration.
///
/// The game never writes this file: settings changed in the options screen
/// last for the session only.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager for the specified configuration directory.
    ///
    /// The directory does not have to exist; a missing file means defaults.
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Self {
        let config_dir = config_dir.as_ref().to_path_buf();
        Self {
            config_path: config_dir.join(CONFIG_FILE_NAME),
            config_dir,
        }
    }

    /// Load and validate the launch configuration.
    ///
    /// # Returns
    /// The loaded LaunchConfig, or default if the file doesn't exist
    pub fn load_launch_config(&self) -> Result<LaunchConfig> {
        if !self.config_path.exists() {
            tracing::warn!(
                "Launch config file not found at {}, using defaults",
                self.config_path
            );
            return Ok(LaunchConfig::default());
        }

        let file_contents = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read launch config: {}", self.config_path))?;

        let config: LaunchConfig = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse launch config: {}", self.config_path))?;

        config
            .validate()
            .with_context(|| format!("Invalid launch config: {}", self.config_path))?;

        tracing::info!(
            "Loaded launch config from {}: {:?}, {} tutorial slides, {} fps",
            self.config_path,
            config.settings,
            config.tutorial_slides,
            config.frame_rate
        );
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Get the launch configuration file path.
    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Resolution, Theme};
    use tempfile::TempDir;

    fn manager_in(temp_dir: &TempDir) -> ConfigManager {
        let dir = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap();
        ConfigManager::new(dir)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager_in(&temp_dir);

        let config = manager.load_launch_config().unwrap();
        assert_eq!(config, LaunchConfig::default());
        assert!(!manager.config_path().exists());
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager_in(&temp_dir);
        fs::write(
            manager.config_path(),
            "Settings:\n  Theme: red\n  Resolution: 1296x864\n  Difficulty: 5\nTutorial Slides: 4\nFrame Rate: 30\n",
        )
        .unwrap();

        let config = manager.load_launch_config().unwrap();
        assert_eq!(config.settings.theme, Theme::Red);
        assert_eq!(config.settings.resolution, Resolution::R1296x864);
        assert_eq!(config.settings.difficulty, Difficulty::new(5).unwrap());
        assert_eq!(config.tutorial_slides, 4);
        assert_eq!(config.frame_rate, 30);
    }

    #[test]
    fn test_config_dir_accessor() {
        let manager = ConfigManager::new("some/dir");
        assert_eq!(manager.config_dir(), Utf8Path::new("some/dir"));
        assert_eq!(manager.config_path(), Utf8Path::new("some/dir/hanoi.yaml"));
    }
}
