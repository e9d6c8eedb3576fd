//! Output formatting utilities

use crate::domain::{ListChange, ListObserver};

/// Format the item list for display
pub fn format_item_list(items: &[String]) -> String {
    if items.is_empty() {
        return "No items yet".to_string();
    }

    let width = (items.len() - 1).to_string().len();
    let mut output = String::new();
    for (index, item) in items.iter().enumerate() {
        output.push_str(&format!("{:>width$}  {}\n", index, item, width = width));
    }
    output
}

/// Confirmation message shown after a change
pub fn confirmation_message(change: &ListChange) -> &'static str {
    match change {
        ListChange::Added { .. } => "Item added to list.",
        ListChange::Removed { .. } => "Item removed from list.",
        ListChange::Updated { .. } => "Item updated successfully",
    }
}

/// Prints a confirmation line for every list change
pub struct ConfirmationPrinter;

impl ListObserver for ConfirmationPrinter {
    fn list_changed(&mut self, change: &ListChange, _items: &[String]) {
        println!("{}", confirmation_message(change));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_item_list(&[]), "No items yet");
    }

    #[test]
    fn test_format_item_list() {
        let items = vec!["buy milk".to_string(), "call mom".to_string()];
        let output = format_item_list(&items);
        assert_eq!(output, "0  buy milk\n1  call mom\n");
    }

    #[test]
    fn test_format_aligns_indexes() {
        let items: Vec<String> = (0..11).map(|i| format!("item {}", i)).collect();
        let output = format_item_list(&items);
        assert!(output.starts_with(" 0  item 0\n"));
        assert!(output.ends_with("10  item 10\n"));
    }

    #[test]
    fn test_format_empty_item() {
        let items = vec![String::new()];
        assert_eq!(format_item_list(&items), "0  \n");
    }

    #[test]
    fn test_confirmation_messages() {
        assert_eq!(
            confirmation_message(&ListChange::Added { index: 0 }),
            "Item added to list."
        );
        assert_eq!(
            confirmation_message(&ListChange::Removed {
                index: 0,
                text: "a".to_string()
            }),
            "Item removed from list."
        );
        assert_eq!(
            confirmation_message(&ListChange::Updated {
                index: 0,
                previous: "a".to_string()
            }),
            "Item updated successfully"
        );
    }
}
