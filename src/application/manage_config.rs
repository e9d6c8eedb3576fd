//! Config management use case

use crate::error::{Result, TodoError};
use crate::infrastructure::{Config, LogLevel};
use std::path::PathBuf;
use std::str::FromStr;

/// Service for reading and changing config.toml in the app directory
pub struct ConfigService {
    app_dir: PathBuf,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(app_dir: PathBuf) -> Self {
        ConfigService { app_dir }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.app_dir)?;

        match key {
            "editor" => Ok(config.get_editor()),
            "notifications" => Ok(config.notifications.to_string()),
            "log_level" => Ok(config.log_level.as_str().to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.app_dir)?;

        match key {
            "editor" => {
                config.editor = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "notifications" => {
                config.notifications = parse_bool(value)?;
            }
            "log_level" => {
                config.log_level = LogLevel::from_str(value).map_err(TodoError::Config)?;
            }
            _ => return Err(unknown_key(key)),
        }

        config.save_to_dir(&self.app_dir)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.app_dir)
    }
}

fn unknown_key(key: &str) -> TodoError {
    TodoError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: editor, notifications, log_level",
        key
    ))
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(TodoError::Config(format!(
            "Invalid value for notifications: '{}'. Use true or false",
            value
        ))),
    }
}
