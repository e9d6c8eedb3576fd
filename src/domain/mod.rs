//! Domain layer - Item rules and change notifications

pub mod change;
pub mod item;

pub use change::{ListChange, ListObserver, SaveStatus};
pub use item::validate_item_text;
