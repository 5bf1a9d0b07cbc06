//! Session-scoped favorite membership. Pure set semantics: no ordering, no
//! expiry, gone when the process ends.

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct FavoritesStore {
    ids: HashSet<String>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership for `id` and returns the new state: `true` when the
    /// record is now favorited. Two toggles restore the original state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores_membership() {
        let mut store = FavoritesStore::new();
        assert!(!store.is_favorite("kg-001"));
        assert!(store.toggle("kg-001"));
        assert!(store.is_favorite("kg-001"));
        assert!(!store.toggle("kg-001"));
        assert!(!store.is_favorite("kg-001"));
    }

    #[test]
    fn toggles_are_independent_per_id() {
        let mut store = FavoritesStore::new();
        store.toggle("kg-001");
        store.toggle("kg-002");
        store.toggle("kg-002");
        assert!(store.is_favorite("kg-001"));
        assert!(!store.is_favorite("kg-002"));
        assert_eq!(store.len(), 1);
    }
}
