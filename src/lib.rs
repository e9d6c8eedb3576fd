//! simpletodo - Terminal to-do list
//!
//! A single ordered list of free-text items, edited by add / edit / delete and
//! mirrored to a line-delimited text file after every change.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TodoError;
