//! Configuration management module.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub stats: StatsConfig,
    pub ui: UiConfig,
}

/// Where the employee collection is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Data file path. Empty means `employees.json` in the platform data directory.
    pub data_file: String,
}

/// Statistics panel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StatsConfig {
    /// Trailing window in days that counts as a recent hire.
    pub recent_days: i64,
    /// Departments shown in the breakdown.
    pub top_departments: usize,
}

/// UI preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Seconds a toast notification stays visible.
    pub toast_seconds: u64,
    /// Seed demonstration records when the collection is empty on startup.
    pub load_sample_data: bool,
}

impl AppConfig {
    /// Get config file path in the platform config directory.
    pub fn default_path() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stats.recent_days < 1 {
            return Err(ConfigError::Validation("Recent hire window must be at least 1 day".to_string()));
        }
        if self.stats.recent_days > 365 {
            return Err(ConfigError::Validation("Recent hire window cannot exceed 365 days".to_string()));
        }
        if self.stats.top_departments < 1 {
            return Err(ConfigError::Validation(
                "Department breakdown must show at least 1 department".to_string(),
            ));
        }
        if self.ui.toast_seconds < 1 {
            return Err(ConfigError::Validation(
                "Toast duration must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the data file, falling back to the platform data directory.
    pub fn data_file(&self) -> PathBuf {
        if self.storage.data_file.trim().is_empty() {
            data_dir().join("employees.json")
        } else {
            PathBuf::from(self.storage.data_file.trim())
        }
    }
}

/// Platform data directory for the data file and logs.
pub fn data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "Gianged", "employee-manager")
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            recent_days: crate::stats::DEFAULT_RECENT_DAYS,
            top_departments: 3,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_seconds: 3,
            load_sample_data: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_recent_days_bounds() {
        let mut config = AppConfig::default();

        config.stats.recent_days = 0;
        assert!(config.validate().is_err());

        config.stats.recent_days = 366;
        assert!(config.validate().is_err());

        config.stats.recent_days = 30;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_top_departments() {
        let mut config = AppConfig::default();
        config.stats.top_departments = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: AppConfig = toml::from_str("[stats]\nrecent_days = 14\n").unwrap();
        assert_eq!(config.stats.recent_days, 14);
        assert_eq!(config.stats.top_departments, 3);
        assert_eq!(config.ui.toast_seconds, 3);
    }

    #[test]
    fn test_explicit_data_file() {
        let mut config = AppConfig::default();
        config.storage.data_file = "/tmp/staff.json".to_string();
        assert_eq!(config.data_file(), PathBuf::from("/tmp/staff.json"));
    }

    #[test]
    fn test_try_load_missing_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(matches!(AppConfig::try_load(&path), ConfigLoadResult::Missing));

        std::fs::write(&path, "[stats]\nrecent_days = 0\n").unwrap();
        assert!(matches!(AppConfig::try_load(&path), ConfigLoadResult::Invalid(_)));

        std::fs::write(&path, "not = [valid").unwrap();
        assert!(matches!(
            AppConfig::try_load(&path),
            ConfigLoadResult::Invalid(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = AppConfig::default();
        config.ui.load_sample_data = true;
        config.save(&path).unwrap();

        match AppConfig::try_load(&path) {
            ConfigLoadResult::Loaded(loaded) => assert_eq!(loaded, config),
            other => panic!("expected loaded config, got {other:?}"),
        }
    }
}
