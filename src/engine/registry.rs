//! Item Registry - Ordered option collection with value-keyed lookup
//!
//! Owns the option list for one widget instance:
//! - Registration order is the display order
//! - Lookup and removal are keyed by value, never by index, so they stay
//!   correct after concurrent registration/removal has shifted positions
//! - Live positions are derived from the current ordered sequence; the
//!   registration-time `index` field on items is a hint, not an identity

use crate::types::ItemData;

// =============================================================================
// Registry
// =============================================================================

/// Ordered collection of the options registered with one widget.
#[derive(Debug, Default)]
pub struct ItemRegistry {
    items: Vec<ItemData>,
    /// Monotonic registration counter, used when the host gives no index hint.
    next_index: usize,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an option at the end of the display order.
    ///
    /// A duplicate value shadows earlier occurrences for lookup (the newest
    /// registration wins) while both stay in the ordered sequence. Returns
    /// the item's live position.
    pub fn add(
        &mut self,
        value: impl Into<String>,
        text_value: Option<String>,
        index_hint: Option<usize>,
    ) -> usize {
        let index = index_hint.unwrap_or(self.next_index);
        self.next_index = self.next_index.max(index) + 1;
        self.items.push(ItemData::new(value, text_value, index));
        self.items.len() - 1
    }

    /// Unregister an option by value.
    ///
    /// Removes the occurrence lookup currently resolves to (the newest);
    /// returns false if the value is not registered.
    pub fn remove(&mut self, value: &str) -> bool {
        match self.position(value) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Live position of a value in the current ordered sequence.
    pub fn position(&self, value: &str) -> Option<usize> {
        if value.is_empty() {
            return None;
        }
        self.items.iter().rposition(|item| item.value == value)
    }

    /// Live position of a value, `-1` if absent.
    pub fn get_index(&self, value: &str) -> i32 {
        self.position(value).map_or(-1, |pos| pos as i32)
    }

    /// The ordered item sequence.
    pub fn items(&self) -> &[ItemData] {
        &self.items
    }

    /// Item at a live position.
    pub fn get(&self, position: usize) -> Option<&ItemData> {
        self.items.get(position)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the last item, `-1` when empty.
    pub fn last_position(&self) -> i32 {
        self.items.len() as i32 - 1
    }

    /// Clear all items (for testing and teardown).
    pub fn reset(&mut self) {
        self.items.clear();
        self.next_index = 0;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(values: &[&str]) -> ItemRegistry {
        let mut registry = ItemRegistry::new();
        for value in values {
            registry.add(*value, None, None);
        }
        registry
    }

    #[test]
    fn test_add_preserves_order() {
        let registry = registry_with(&["a", "b", "c"]);
        let values: Vec<&str> = registry.items().iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, vec!["a", "b", "c"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_registration_index_assigned() {
        let mut registry = ItemRegistry::new();
        registry.add("a", None, None);
        registry.add("b", None, None);
        assert_eq!(registry.get(0).unwrap().index, 0);
        assert_eq!(registry.get(1).unwrap().index, 1);

        // Host-supplied hint wins and advances the counter past it
        registry.add("c", None, Some(7));
        registry.add("d", None, None);
        assert_eq!(registry.get(2).unwrap().index, 7);
        assert_eq!(registry.get(3).unwrap().index, 8);
    }

    #[test]
    fn test_get_index() {
        let registry = registry_with(&["a", "b", "c"]);
        assert_eq!(registry.get_index("b"), 1);
        assert_eq!(registry.get_index("missing"), -1);
        assert_eq!(registry.get_index(""), -1);
    }

    #[test]
    fn test_remove_by_value() {
        let mut registry = registry_with(&["a", "b", "c"]);
        assert!(registry.remove("b"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get_index("c"), 1); // shifted down
        assert!(!registry.remove("b"));
    }

    #[test]
    fn test_duplicate_value_shadows_lookup() {
        let mut registry = registry_with(&["a", "b"]);
        registry.add("a", Some("Second A".to_string()), None);

        // Both occurrences stay in order; lookup resolves to the newest
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get_index("a"), 2);

        // Removing drops the occurrence lookup pointed at
        assert!(registry.remove("a"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get_index("a"), 0);
    }

    #[test]
    fn test_position_ignores_stale_index_field() {
        let mut registry = registry_with(&["a", "b", "c"]);
        registry.remove("a");

        // Registration-time indices are untouched by removal...
        assert_eq!(registry.get(0).unwrap().index, 1);
        // ...but live positions come from the ordered sequence
        assert_eq!(registry.position("b"), Some(0));
        assert_eq!(registry.position("c"), Some(1));
    }

    #[test]
    fn test_last_position() {
        assert_eq!(ItemRegistry::new().last_position(), -1);
        assert_eq!(registry_with(&["a", "b"]).last_position(), 1);
    }

    #[test]
    fn test_reset() {
        let mut registry = registry_with(&["a"]);
        registry.reset();
        assert!(registry.is_empty());
        registry.add("z", None, None);
        assert_eq!(registry.get(0).unwrap().index, 0);
    }
}
