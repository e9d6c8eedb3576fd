//! List change notifications

/// A single mutation applied to the item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListChange {
    /// A new item was appended at `index`
    Added { index: usize },
    /// The item at `index` was removed; later items shifted left
    Removed { index: usize, text: String },
    /// The item at `index` was replaced
    Updated { index: usize, previous: String },
}

impl ListChange {
    /// Index the change applied to
    pub fn index(&self) -> usize {
        match self {
            ListChange::Added { index }
            | ListChange::Removed { index, .. }
            | ListChange::Updated { index, .. } => *index,
        }
    }
}

/// Outcome of persisting the list after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    /// The in-memory change stands but the file on disk is stale
    Failed,
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveStatus::Saved)
    }
}

/// Receives a notification after every list mutation.
pub trait ListObserver {
    fn list_changed(&mut self, change: &ListChange, items: &[String]);
}
