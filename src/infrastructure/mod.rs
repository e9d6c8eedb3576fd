//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod logging;
pub mod store;

pub use config::{resolve_app_dir, Config, LogLevel};
pub use editor::EditorSession;
pub use logging::init_logging;
pub use store::{FileItemStore, ItemStore};
