//! Flat-file item store

use crate::error::{Result, TodoError};
use log::{debug, error, warn};
use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Name of the item file inside the app directory
pub const DATA_FILE_NAME: &str = "todo.txt";

/// Persistence boundary for the ordered item list
pub trait ItemStore {
    /// Read all items. A store that has never been written yields an empty list.
    fn try_load(&self) -> Result<Vec<String>>;

    /// Overwrite the stored items, preserving order.
    fn save(&self, items: &[String]) -> Result<()>;

    /// Read all items, substituting an empty list for any read failure.
    fn load(&self) -> Vec<String> {
        self.try_load().unwrap_or_else(|e| {
            error!("Error reading items, starting with an empty list: {}", e);
            Vec::new()
        })
    }

    /// Human-readable location of the store, used in messages
    fn location(&self) -> PathBuf;
}

/// Item store backed by a text file with one item per line
#[derive(Debug, Clone)]
pub struct FileItemStore {
    path: PathBuf,
}

impl FileItemStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: PathBuf) -> Self {
        FileItemStore { path }
    }

    /// Create a store backed by `todo.txt` inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        FileItemStore::new(dir.join(DATA_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemStore for FileItemStore {
    fn try_load(&self) -> Result<Vec<String>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No item file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(TodoError::Io(e)),
        };

        let contents = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = contents {
            warn!(
                "{} is not valid UTF-8; undecodable bytes replaced",
                self.path.display()
            );
        }

        let items = parse_lines(&contents);
        debug!("Loaded {} items from {}", items.len(), self.path.display());
        Ok(items)
    }

    fn save(&self, items: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, render_lines(items))?;
        debug!("Saved {} items to {}", items.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

/// Split file contents into items. Accepts `\n` and `\r\n` terminators; a
/// trailing terminator does not produce an extra empty item.
fn parse_lines(contents: &str) -> Vec<String> {
    contents.lines().map(str::to_string).collect()
}

/// Render items as newline-terminated lines.
fn render_lines(items: &[String]) -> String {
    let mut output = String::with_capacity(items.iter().map(|i| i.len() + 1).sum());
    for item in items {
        output.push_str(item);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileItemStore::in_dir(temp.path());

        assert_eq!(store.try_load().unwrap(), Vec::<String>::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = FileItemStore::in_dir(temp.path());
        let items = strings(&["buy milk", "", "call mom", "  padded  ", "ünïcode ✓"]);

        store.save(&items).unwrap();

        assert_eq!(store.load(), items);
    }

    #[test]
    fn test_save_writes_one_line_per_item() {
        let temp = TempDir::new().unwrap();
        let store = FileItemStore::in_dir(temp.path());

        store.save(&strings(&["a", "b"])).unwrap();

        let content = fs::read_to_string(temp.path().join(DATA_FILE_NAME)).unwrap();
        assert_eq!(content, "a\nb\n");
    }

    #[test]
    fn test_save_empty_list_truncates_file() {
        let temp = TempDir::new().unwrap();
        let store = FileItemStore::in_dir(temp.path());

        store.save(&strings(&["a", "b", "c"])).unwrap();
        store.save(&[]).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = FileItemStore::in_dir(temp.path());
        store.save(&strings(&["x", "y"])).unwrap();

        assert_eq!(store.load(), store.load());
    }

    #[test]
    fn test_load_accepts_crlf_and_missing_final_newline() {
        let temp = TempDir::new().unwrap();
        let store = FileItemStore::in_dir(temp.path());
        fs::write(store.path(), "first\r\nsecond\r\nthird").unwrap();

        assert_eq!(store.load(), strings(&["first", "second", "third"]));
    }

    #[test]
    fn test_load_keeps_interior_blank_lines() {
        let temp = TempDir::new().unwrap();
        let store = FileItemStore::in_dir(temp.path());
        fs::write(store.path(), "a\n\nb\n").unwrap();

        assert_eq!(store.load(), strings(&["a", "", "b"]));
    }

    #[test]
    fn test_load_invalid_utf8_keeps_other_items() {
        let temp = TempDir::new().unwrap();
        let store = FileItemStore::in_dir(temp.path());
        fs::write(store.path(), b"buy milk\ncall mom\ncaf\xe9\n").unwrap();

        let mut items = store.try_load().unwrap();
        assert_eq!(items, strings(&["buy milk", "call mom", "caf\u{fffd}"]));

        items.push("x".to_string());
        store.save(&items).unwrap();
        assert_eq!(
            store.load(),
            strings(&["buy milk", "call mom", "caf\u{fffd}", "x"])
        );
    }

    #[test]
    fn test_load_directory_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileItemStore::new(temp.path().to_path_buf());

        assert!(store.try_load().is_err());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("app");
        let store = FileItemStore::in_dir(&dir);

        store.save(&strings(&["a"])).unwrap();

        assert!(dir.join(DATA_FILE_NAME).exists());
    }

    #[test]
    fn test_save_to_directory_path_fails() {
        let temp = TempDir::new().unwrap();
        let store = FileItemStore::new(temp.path().to_path_buf());

        let result = store.save(&strings(&["a"]));
        assert!(matches!(result, Err(TodoError::Io(_))));
    }
}
