//! List controller: add / edit / delete with persistence after every change

use crate::domain::{validate_item_text, ListChange, ListObserver, SaveStatus};
use crate::error::{Result, TodoError};
use crate::infrastructure::ItemStore;
use log::{error, info};

/// Owns the item list and its store.
///
/// Every mutation is persisted before the call returns. A failed save never
/// rolls the in-memory change back; it is reported as `SaveStatus::Failed`.
pub struct ListController<S: ItemStore> {
    store: S,
    items: Vec<String>,
    observers: Vec<Box<dyn ListObserver>>,
}

impl<S: ItemStore> ListController<S> {
    /// Create a controller, loading the current items from `store`
    pub fn new(store: S) -> Self {
        let items = store.load();
        ListController {
            store,
            items,
            observers: Vec::new(),
        }
    }

    /// Register an observer notified after every mutation
    pub fn subscribe(&mut self, observer: Box<dyn ListObserver>) {
        self.observers.push(observer);
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append `text` as the last item
    pub fn add(&mut self, text: &str) -> Result<SaveStatus> {
        validate_item_text(text)?;

        self.items.push(text.to_string());
        let index = self.items.len() - 1;
        info!("Item {} added to list", index);

        Ok(self.commit(ListChange::Added { index }))
    }

    /// Remove the item at `index`, shifting later items left
    pub fn remove(&mut self, index: usize) -> Result<SaveStatus> {
        self.check_index(index)?;

        let text = self.items.remove(index);
        info!("Item {} removed from list", index);

        Ok(self.commit(ListChange::Removed { index, text }))
    }

    /// Replace the item at `index` with `text`
    pub fn update(&mut self, index: usize, text: &str) -> Result<SaveStatus> {
        self.check_index(index)?;
        validate_item_text(text)?;

        let previous = std::mem::replace(&mut self.items[index], text.to_string());
        info!("Item {} updated", index);

        Ok(self.commit(ListChange::Updated { index, previous }))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(TodoError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }

    /// Persist the list, then notify observers.
    fn commit(&mut self, change: ListChange) -> SaveStatus {
        let status = match self.store.save(&self.items) {
            Ok(()) => SaveStatus::Saved,
            Err(e) => {
                error!(
                    "Error writing items to {}: {}",
                    self.store.location().display(),
                    e
                );
                SaveStatus::Failed
            }
        };

        for observer in self.observers.iter_mut() {
            observer.list_changed(&change, &self.items);
        }

        status
    }
}
