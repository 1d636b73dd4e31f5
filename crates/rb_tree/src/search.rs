use crate::iter::Pos;
use crate::node::{Id, LEFT, RIGHT};
use crate::policy::{Compare, KeyOf};
use crate::tree::RbTree;

impl<T, K, C> RbTree<T, K, C>
where
    K: KeyOf<T>,
    C: Compare<K::Key>,
{
    /// Position of an element equivalent to `key`, or `END`.
    ///
    /// With duplicate keys this is the first of them.
    pub fn find(&self, key: &K::Key) -> Pos {
        let lb = self.lower_bound(key);
        if lb.is_end() || self.compare.less(key, self.key_at(lb.0)) {
            Pos::END
        } else {
            lb
        }
    }

    pub fn contains_key(&self, key: &K::Key) -> bool {
        !self.find(key).is_end()
    }

    /// First position whose key is not less than `key`.
    pub fn lower_bound(&self, key: &K::Key) -> Pos {
        let mut x = self.root;
        let mut found = Id::NIL;
        while !x.is_nil() {
            if !self.compare.less(self.key_at(x), key) {
                found = x;
                x = self.node(x).ch[LEFT];
            } else {
                x = self.node(x).ch[RIGHT];
            }
        }
        Pos(found)
    }

    /// First position whose key is greater than `key`.
    pub fn upper_bound(&self, key: &K::Key) -> Pos {
        let mut x = self.root;
        let mut found = Id::NIL;
        while !x.is_nil() {
            if self.compare.less(key, self.key_at(x)) {
                found = x;
                x = self.node(x).ch[LEFT];
            } else {
                x = self.node(x).ch[RIGHT];
            }
        }
        Pos(found)
    }

    /// `(lower_bound(key), upper_bound(key))`.
    pub fn equal_range(&self, key: &K::Key) -> (Pos, Pos) {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// 1 if an equivalent key is present, else 0.
    pub fn count_unique(&self, key: &K::Key) -> usize {
        usize::from(self.contains_key(key))
    }

    /// Number of elements equivalent to `key`.
    pub fn count_multi(&self, key: &K::Key) -> usize {
        let (first, last) = self.equal_range(key);
        self.range_iter(first, last).len()
    }
}
