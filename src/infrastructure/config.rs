//! Configuration management

use crate::error::{Result, TodoError};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable that overrides the app directory
pub const HOME_ENV: &str = "SIMPLETODO_HOME";

/// Name of the config file inside the app directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Verbosity of the log file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(LogLevel::Off),
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(format!(
                "Invalid log level: '{}'. Valid log levels are: off, error, warn, info, debug, trace",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    pub notifications: bool,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            editor: None,
            notifications: true,
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load config from config.toml in the given directory.
    /// A missing file yields the default config.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE_NAME);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(TodoError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| TodoError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TodoError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path.join(CONFIG_FILE_NAME), contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .ok()
            .or_else(|| self.editor.clone())
            .unwrap_or_else(default_editor)
    }
}

fn default_editor() -> String {
    if cfg!(windows) {
        "notepad".to_string()
    } else {
        "nano".to_string()
    }
}

/// Resolve the app directory holding the item file, config and log.
/// SIMPLETODO_HOME wins over the platform data directory.
pub fn resolve_app_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        if home.trim().is_empty() {
            return Err(TodoError::Config(format!("{} is set but empty", HOME_ENV)));
        }
        return Ok(PathBuf::from(home));
    }

    dirs::data_dir()
        .map(|dir| dir.join("simpletodo"))
        .ok_or_else(|| {
            TodoError::Config(format!(
                "Could not determine a data directory. Set {} to choose one.",
                HOME_ENV
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.editor, None);
        assert!(config.notifications);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_load_missing_config_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            editor: Some("vim".to_string()),
            notifications: false,
            log_level: LogLevel::Debug,
        };

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(CONFIG_FILE_NAME).exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "notifications = false\n").unwrap();

        let config = Config::load_from_dir(temp.path()).unwrap();
        assert!(!config.notifications);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.editor, None);
    }

    #[test]
    fn test_malformed_config_is_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "log_level = [").unwrap();

        let result = Config::load_from_dir(temp.path());
        match result.unwrap_err() {
            TodoError::Config(msg) => assert!(msg.contains("config.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_log_level_from_str() {
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("off").unwrap(), LogLevel::Off);
        assert!(LogLevel::from_str("loud").is_err());
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Warn.to_level_filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Off.to_level_filter(), LevelFilter::Off);
    }

    #[test]
    fn test_get_editor_is_never_empty() {
        let config = Config {
            editor: Some("my-editor".to_string()),
            ..Config::default()
        };
        // Note: EDITOR or VISUAL may be set in the test environment
        assert!(!config.get_editor().is_empty());
    }
}
