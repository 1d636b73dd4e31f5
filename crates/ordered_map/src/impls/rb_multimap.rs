use rb_tree::{Iter, Less, RbTree, SelectFirst};

/// Ordered map allowing several values per key.
///
/// Values under one key are kept in the order they were inserted.
pub struct RbTreeMultiMap<K: Ord, V> {
    tree: RbTree<(K, V), SelectFirst, Less>,
}

impl<K: Ord, V> RbTreeMultiMap<K, V> {
    pub fn new() -> Self {
        Self {
            tree: RbTree::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.tree.insert_equal((key, value));
    }

    /// Values stored under `key`, oldest first.
    pub fn get_all(&self, key: &K) -> impl DoubleEndedIterator<Item = &V> + '_ {
        let (first, last) = self.tree.equal_range(key);
        self.tree.range_iter(first, last).map(|(_, v)| v)
    }

    pub fn count(&self, key: &K) -> usize {
        self.tree.count_multi(key)
    }

    /// Removes every value under `key`; returns how many there were.
    pub fn remove_all(&mut self, key: &K) -> usize {
        self.tree.erase_key(key)
    }

    /// Removes the oldest value under `key`.
    pub fn remove_one(&mut self, key: &K) -> Option<V> {
        let pos = self.tree.find(key);
        self.tree.erase(pos).map(|(_, v)| v)
    }

    pub fn iter(&self) -> Iter<'_, (K, V), SelectFirst, Less> {
        self.tree.iter()
    }
}

impl<K: Ord, V> Default for RbTreeMultiMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
