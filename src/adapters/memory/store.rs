//! Insertion-ordered keyed storage shared by the in-memory repositories.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub(crate) struct OrderedStore<K, V> {
    entries: HashMap<K, V>,
    order: Vec<K>,
}

impl<K, V> Default for OrderedStore<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V: Clone> OrderedStore<K, V> {
    /// Inserts or replaces. A replaced entry keeps its position.
    pub fn upsert(&mut self, key: K, value: V) {
        if self.entries.insert(key.clone(), value).is_none() {
            self.order.push(key);
        }
    }

    /// Replaces an existing entry. Returns false if the key is unknown.
    pub fn replace(&mut self, key: &K, value: V) -> bool {
        match self.entries.get_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, key: &K) {
        if self.entries.remove(key).is_some() {
            self.order.retain(|existing| existing != key);
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).cloned()
    }

    /// Values in insertion order, filtered.
    pub fn values_where<F>(&self, mut predicate: F) -> Vec<V>
    where
        F: FnMut(&V) -> bool,
    {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key))
            .filter(|value| predicate(value))
            .cloned()
            .collect()
    }

    pub fn values(&self) -> Vec<V> {
        self.values_where(|_| true)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_across_replacements() {
        let mut store = OrderedStore::default();
        store.upsert("b", 1);
        store.upsert("a", 2);
        store.upsert("b", 3);

        assert_eq!(store.values(), vec![3, 2]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn replace_requires_existing_key() {
        let mut store = OrderedStore::default();
        assert!(!store.replace(&"a", 1));
        store.upsert("a", 1);
        assert!(store.replace(&"a", 5));
        assert_eq!(store.get(&"a"), Some(5));
    }

    #[test]
    fn remove_drops_key_from_order() {
        let mut store = OrderedStore::default();
        store.upsert(1, "x");
        store.upsert(2, "y");
        store.remove(&1);
        store.remove(&42);
        assert_eq!(store.values(), vec!["y"]);
    }
}
