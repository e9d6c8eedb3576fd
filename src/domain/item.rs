//! Item text rules

use crate::error::{Result, TodoError};

/// Check that `text` can be stored as a single line of the item file.
///
/// Any text is accepted except text containing a line terminator, which would
/// split into several items on the next load. Empty text is allowed.
pub fn validate_item_text(text: &str) -> Result<()> {
    if text.contains(['\n', '\r']) {
        return Err(TodoError::InvalidItem(format!(
            "'{}' contains a line break",
            text.escape_debug()
        )));
    }
    Ok(())
}
