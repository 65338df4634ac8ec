//! Combo box state
//!
//! A combo box owns an ordered list of item strings and tracks which one is
//! currently selected. Selection moves one step at a time from the keyboard
//! (no wrap-around at either end) or jumps directly via programmatic
//! selection. A combo box built from an empty item list has no selection.

/// A selectable list of items with a single current selection.
#[derive(Debug, Clone)]
pub struct ComboBox {
    items: Vec<String>,
    /// Index of the selected item; `None` only when `items` is empty.
    selected: Option<usize>,
}

impl ComboBox {
    /// Create a combo box over `items`. The first item starts selected.
    pub fn new(items: &[&str]) -> Self {
        ComboBox {
            selected: if items.is_empty() { None } else { Some(0) },
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The currently selected item, if any.
    pub fn selected_item(&self) -> Option<&str> {
        self.selected.map(|i| self.items[i].as_str())
    }

    /// Select `item` by value. Returns `false` (selection unchanged) when the
    /// item is not in the list.
    pub fn select(&mut self, item: &str) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    /// Move the selection one item down the list. Returns whether the
    /// selection changed (it does not at the last item).
    pub fn select_next(&mut self) -> bool {
        match self.selected {
            Some(i) if i + 1 < self.items.len() => {
                self.selected = Some(i + 1);
                true
            }
            _ => false,
        }
    }

    /// Move the selection one item up the list. Returns whether the
    /// selection changed (it does not at the first item).
    pub fn select_prev(&mut self) -> bool {
        match self.selected {
            Some(i) if i > 0 => {
                self.selected = Some(i - 1);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_item_starts_selected() {
        let combo = ComboBox::new(&["x", "y", "z"]);
        assert_eq!(combo.selected_item(), Some("x"));
    }

    #[test]
    fn test_empty_combo_has_no_selection() {
        let combo = ComboBox::new(&[]);
        assert_eq!(combo.selected_item(), None);
    }

    #[test]
    fn test_select_by_value() {
        let mut combo = ComboBox::new(&["x", "y"]);
        assert!(combo.select("y"));
        assert_eq!(combo.selected_item(), Some("y"));
    }

    #[test]
    fn test_select_unknown_value_keeps_selection() {
        let mut combo = ComboBox::new(&["x", "y"]);
        assert!(!combo.select("z"));
        assert_eq!(combo.selected_item(), Some("x"));
    }

    #[test]
    fn test_stepping_clamps_at_both_ends() {
        let mut combo = ComboBox::new(&["x", "y"]);
        assert!(!combo.select_prev());
        assert!(combo.select_next());
        assert!(!combo.select_next());
        assert_eq!(combo.selected_item(), Some("y"));
        assert!(combo.select_prev());
        assert_eq!(combo.selected_item(), Some("x"));
    }

    #[test]
    fn test_stepping_empty_combo_is_a_no_op() {
        let mut combo = ComboBox::new(&[]);
        assert!(!combo.select_next());
        assert!(!combo.select_prev());
    }
}
