use rb_tree::{InvariantViolation, Iter, Less, RbTree, SelectFirst};

use crate::OrderedMap;

/// Red-black tree map: `(K, V)` pairs ordered by `K`, one entry per key.
pub struct RbTreeMap<K: Ord, V> {
    tree: RbTree<(K, V), SelectFirst, Less>,
}

impl<K: Ord, V> RbTreeMap<K, V> {
    /// Entries in key order.
    pub fn iter(&self) -> Iter<'_, (K, V), SelectFirst, Less> {
        self.tree.iter()
    }

    pub fn first(&self) -> Option<&(K, V)> {
        self.tree.first()
    }

    pub fn last(&self) -> Option<&(K, V)> {
        self.tree.last()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        self.tree.validate()
    }
}

impl<K: Ord, V> OrderedMap for RbTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn new() -> Self {
        Self {
            tree: RbTree::new(),
        }
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        self.tree.get(self.tree.find(key)).map(|(_, v)| v)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        let pos = self.tree.find(&key);
        if let Some((_, slot)) = self.tree.get_mut(pos) {
            return Some(std::mem::replace(slot, value));
        }
        self.tree.insert_unique((key, value));
        None
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let pos = self.tree.find(key);
        self.tree.erase(pos).map(|(_, v)| v)
    }

    fn lower_bound(&mut self, key: &K) -> Option<(&K, &V)> {
        self.tree
            .get(self.tree.lower_bound(key))
            .map(|(k, v)| (k, v))
    }
}
