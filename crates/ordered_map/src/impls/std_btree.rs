use std::collections::BTreeMap;

use crate::OrderedMap;

/// `std::collections::BTreeMap` behind the same interface, used as the baseline.
pub struct StdBTreeMap<K: Ord, V>(BTreeMap<K, V>);

impl<K: Ord, V> OrderedMap for StdBTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn new() -> Self {
        Self(BTreeMap::new())
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        self.0.get(key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.0.insert(key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.0.remove(key)
    }

    fn lower_bound(&mut self, key: &K) -> Option<(&K, &V)> {
        self.0.range(key..).next()
    }
}
