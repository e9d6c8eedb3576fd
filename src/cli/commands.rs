//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "simpletodo")]
#[command(about = "Terminal to-do list", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show all items with their indexes
    #[command(visible_alias = "ls")]
    List,

    /// Add an item to the end of the list
    Add {
        /// Item text (may be empty, may not contain line breaks)
        text: String,
    },

    /// Remove the item at an index
    #[command(visible_alias = "rm")]
    Remove {
        /// Index shown by 'simpletodo list'
        index: usize,
    },

    /// Change the text of the item at an index
    Edit {
        /// Index shown by 'simpletodo list'
        index: usize,

        /// New text; opens the editor when omitted
        text: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
