use log::{debug, warn};

use crate::error::TreeError;
use crate::iter::Pos;
use crate::node::{Color, Id, LEFT, Node, RIGHT};
use crate::policy::{Compare, KeyOf};
use crate::tree::RbTree;

impl<T, K, C> RbTree<T, K, C>
where
    K: KeyOf<T>,
    C: Compare<K::Key>,
{
    /// Inserts `value` unless an equivalent key is present.
    ///
    /// Returns the position of the new element, or of the existing one together
    /// with `false`.
    ///
    /// # Panics
    ///
    /// Panics if the tree is full or node storage cannot be allocated.
    pub fn insert_unique(&mut self, value: T) -> (Pos, bool) {
        match self.try_insert_unique(value) {
            Ok(res) => res,
            Err(err) => panic!("{err}"),
        }
    }

    /// Inserts `value` after every element with an equivalent key.
    ///
    /// # Panics
    ///
    /// Panics if the tree is full or node storage cannot be allocated.
    pub fn insert_equal(&mut self, value: T) -> Pos {
        match self.try_insert_equal(value) {
            Ok(pos) => pos,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible [`insert_unique`](Self::insert_unique). On error `value` is dropped
    /// and the tree is unchanged.
    pub fn try_insert_unique(&mut self, value: T) -> Result<(Pos, bool), TreeError> {
        let (parent, dir) = {
            let key = K::key_of(&value);
            let (parent, dir) = self.descend(key);
            if let Some(dup) = self.unique_conflict(key, parent, dir) {
                return Ok((Pos(dup), false));
            }
            (parent, dir)
        };
        let x = self.link_new(value, parent, dir)?;
        Ok((Pos(x), true))
    }

    /// Fallible [`insert_equal`](Self::insert_equal). On error `value` is dropped
    /// and the tree is unchanged.
    pub fn try_insert_equal(&mut self, value: T) -> Result<Pos, TreeError> {
        let (parent, dir) = self.descend(K::key_of(&value));
        self.link_new(value, parent, dir).map(Pos)
    }

    /// Inserts every value whose key is not yet present; returns how many went in.
    ///
    /// Fails with [`TreeError::CapacityExceeded`] before touching the tree when the
    /// iterator's lower size bound cannot fit.
    pub fn insert_unique_iter<I>(&mut self, iter: I) -> Result<usize, TreeError>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        self.check_bulk(iter.size_hint().0)?;
        let mut inserted = 0;
        for value in iter {
            if self.try_insert_unique(value)?.1 {
                inserted += 1;
            }
        }
        debug!("bulk unique insert added {inserted} nodes, len {}", self.len);
        Ok(inserted)
    }

    /// Inserts every value, keeping duplicates; returns how many went in.
    pub fn insert_equal_iter<I>(&mut self, iter: I) -> Result<usize, TreeError>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        self.check_bulk(iter.size_hint().0)?;
        let mut inserted = 0;
        for value in iter {
            self.try_insert_equal(value)?;
            inserted += 1;
        }
        debug!("bulk equal insert added {inserted} nodes, len {}", self.len);
        Ok(inserted)
    }

    fn check_bulk(&self, additional: usize) -> Result<(), TreeError> {
        let max = self.max_size();
        let requested = self.len.saturating_add(additional);
        if requested > max {
            warn!("refusing bulk insertion: {requested} nodes requested, capacity is {max}");
            return Err(TreeError::CapacityExceeded { requested, max });
        }
        Ok(())
    }

    /// Walks down to the nil slot where `key` belongs, going right on ties.
    ///
    /// Returns the parent of that slot and which side of it the slot is on.
    fn descend(&self, key: &K::Key) -> (Id, usize) {
        let mut parent = Id::NIL;
        let mut dir = LEFT;
        let mut x = self.root;
        while !x.is_nil() {
            parent = x;
            dir = if self.compare.less(key, self.key_at(x)) {
                LEFT
            } else {
                RIGHT
            };
            x = self.node(x).ch[dir];
        }
        (parent, dir)
    }

    /// The existing node equivalent to `key`, if any, given the slot `descend`
    /// found. Only the in-order predecessor of that slot can be equivalent.
    fn unique_conflict(&self, key: &K::Key, parent: Id, dir: usize) -> Option<Id> {
        let pred = if dir == RIGHT {
            parent
        } else if parent == self.leftmost {
            return None;
        } else {
            self.prev_id(parent)
        };
        if pred.is_nil() || self.compare.less(self.key_at(pred), key) {
            None
        } else {
            Some(pred)
        }
    }
}

impl<T, K, C> RbTree<T, K, C> {
    /// Hangs a new red node holding `value` in the nil slot `parent.ch[dir]`
    /// (or as the root), then rebalances.
    fn link_new(&mut self, value: T, parent: Id, dir: usize) -> Result<Id, TreeError> {
        self.ensure_room(1)?;
        let x = self.arena.alloc(Node::new_leaf(value, parent));
        if parent.is_nil() {
            self.root = x;
            self.leftmost = x;
            self.rightmost = x;
        } else {
            debug_assert!(self.node(parent).ch[dir].is_nil());
            self.node_mut(parent).ch[dir] = x;
            if dir == LEFT && parent == self.leftmost {
                self.leftmost = x;
            } else if dir == RIGHT && parent == self.rightmost {
                self.rightmost = x;
            }
        }
        self.len += 1;
        self.insert_fixup(x);
        Ok(x)
    }

    /// Restores the coloring rules after `x` was linked in red.
    fn insert_fixup(&mut self, mut x: Id) {
        while x != self.root && self.is_red(self.node(x).p) {
            let mut p = self.node(x).p;
            // A red parent is never the root, so the grandparent exists.
            let g = self.node(p).p;
            let side = self.side_of(p);
            let uncle = self.node(g).ch[1 - side];

            if self.is_red(uncle) {
                self.set_color(p, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(g, Color::Red);
                x = g;
                continue;
            }

            if self.side_of(x) != side {
                // Inner grandchild: straighten into the outer shape first.
                self.rotate(p, side);
                x = p;
                p = self.node(x).p;
            }
            self.set_color(p, Color::Black);
            self.set_color(g, Color::Red);
            self.rotate(g, 1 - side);
            break;
        }
        let root = self.root;
        self.set_color(root, Color::Black);
    }
}
