//! Edit item use case: round-trip one item through the edit screen

use crate::application::ListController;
use crate::domain::SaveStatus;
use crate::error::{Result, TodoError};
use crate::infrastructure::{EditorSession, ItemStore};
use log::info;
use std::path::PathBuf;

/// Scratch file the editor opens, kept in the app directory
pub const SCRATCH_FILE_NAME: &str = "EDIT_ITEM.txt";

/// Result of an edit round-trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The item was replaced and the list persisted with this status
    Updated(SaveStatus),
    /// The editor left the text empty; nothing changed
    Cancelled,
}

/// Service that hands an item's text to an editor and writes back the result
pub struct EditItemService {
    editor: EditorSession,
    scratch_path: PathBuf,
}

impl EditItemService {
    pub fn new(editor: EditorSession, app_dir: PathBuf) -> Self {
        EditItemService {
            editor,
            scratch_path: app_dir.join(SCRATCH_FILE_NAME),
        }
    }

    /// Edit the item at `index`, returning the same index's new state.
    pub fn execute<S: ItemStore>(
        &self,
        controller: &mut ListController<S>,
        index: usize,
    ) -> Result<EditOutcome> {
        let current = match controller.get(index) {
            Some(text) => text.to_string(),
            None => {
                return Err(TodoError::IndexOutOfRange {
                    index,
                    len: controller.len(),
                })
            }
        };

        match self.editor.edit_text(&self.scratch_path, &current)? {
            Some(text) => Ok(EditOutcome::Updated(controller.update(index, &text)?)),
            None => {
                info!("Edit of item {} cancelled", index);
                Ok(EditOutcome::Cancelled)
            }
        }
    }
}
