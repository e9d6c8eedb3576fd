//! File logging bootstrap

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Name of the log file inside the app directory
pub const LOG_FILE_NAME: &str = "simpletodo.log";

/// Start appending log records to simpletodo.log in `app_dir`.
///
/// Logging is best effort: returns false when the file cannot be opened or a
/// logger is already installed, and the application carries on without it.
pub fn init_logging(app_dir: &Path, level: LevelFilter) -> bool {
    if level == LevelFilter::Off {
        return false;
    }

    if fs::create_dir_all(app_dir).is_err() {
        return false;
    }

    let log_file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(app_dir.join(LOG_FILE_NAME))
    {
        Ok(file) => file,
        Err(_) => return false,
    };

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    WriteLogger::init(level, log_config, log_file).is_ok()
}
