//! Application layer - Use cases and orchestration

pub mod controller;
pub mod edit_item;
pub mod manage_config;

pub use controller::ListController;
pub use edit_item::{EditItemService, EditOutcome};
pub use manage_config::ConfigService;
