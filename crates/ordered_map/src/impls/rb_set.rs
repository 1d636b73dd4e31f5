use rb_tree::{Identity, Iter, Less, RbTree};

/// Ordered set of unique keys.
pub struct RbTreeSet<K: Ord> {
    tree: RbTree<K, Identity, Less>,
}

impl<K: Ord> RbTreeSet<K> {
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

    /// Returns `false` if `key` was already present.
    pub fn insert(&mut self, key: K) -> bool {
        self.tree.insert_unique(key).1
    }

    pub fn remove(&mut self, key: &K) -> bool {
        self.tree.erase_key(key) > 0
    }

    pub fn contains(&self, key: &K) -> bool {
        self.tree.contains_key(key)
    }

    /// Smallest key `>= key`.
    pub fn ceiling(&self, key: &K) -> Option<&K> {
        self.tree.get(self.tree.lower_bound(key))
    }

    /// Smallest key `> key`.
    pub fn higher(&self, key: &K) -> Option<&K> {
        self.tree.get(self.tree.upper_bound(key))
    }

    pub fn iter(&self) -> Iter<'_, K, Identity, Less> {
        self.tree.iter()
    }
}

impl<K: Ord> Default for RbTreeSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for RbTreeSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}
