//! External editor used as the item edit screen

use crate::error::{Result, TodoError};
use log::{debug, warn};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Session for editing a single item's text in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open `text` in the editor via the scratch file at `scratch_path` and
    /// wait for the editor to exit.
    ///
    /// Returns the first line of the saved file, or `None` when the file was
    /// emptied (edit cancelled). The scratch file is removed afterwards.
    pub fn edit_text(&self, scratch_path: &Path, text: &str) -> Result<Option<String>> {
        fs::write(scratch_path, format!("{}\n", text))?;

        let outcome = self.run(scratch_path).and_then(|_| {
            let edited = fs::read_to_string(scratch_path)?;
            Ok(first_line(&edited))
        });

        if let Err(e) = fs::remove_file(scratch_path) {
            warn!(
                "Could not remove scratch file {}: {}",
                scratch_path.display(),
                e
            );
        }

        outcome
    }

    fn run(&self, file_path: &Path) -> Result<()> {
        let (program, mut args) = self.parse_command();
        args.push(file_path.to_string_lossy().to_string());
        debug!("Launching editor '{}' with {:?}", program, args);

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&args)
            .status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&args).status();

        let status = status.map_err(|e| {
            TodoError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(TodoError::Editor(format!(
                "Editor '{}' exited with {}; item left unchanged",
                program, status
            )));
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            let fallback = if cfg!(windows) { "notepad" } else { "nano" };
            return (fallback.to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}

/// First line of the edited file; an empty file means the edit was cancelled.
fn first_line(contents: &str) -> Option<String> {
    if contents.is_empty() {
        return None;
    }
    Some(contents.lines().next().unwrap_or_default().to_string())
}
