use std::iter::FusedIterator;

use crate::node::{Id, LEFT, RIGHT};
use crate::tree::RbTree;

/// A position in a tree: one element, or the past-the-end sentinel [`Pos::END`].
///
/// Positions do not borrow the tree. They survive inserts, rebalancing and the
/// erasure of other elements; a position whose element was erased is stale, and
/// passing it back to the tree is a logic error (it may name a recycled slot).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos(pub(crate) Id);

impl Pos {
    pub const END: Self = Self(Id::NIL);

    pub fn is_end(self) -> bool {
        self.0.is_nil()
    }
}

impl<T, K, C> RbTree<T, K, C> {
    /// In-order successor. The sentinel is circular: after the last node comes
    /// `NIL`, after `NIL` comes the first node.
    pub(crate) fn next_id(&self, x: Id) -> Id {
        if x.is_nil() {
            return self.leftmost;
        }
        let right = self.node(x).ch[RIGHT];
        if !right.is_nil() {
            return self.minimum(right);
        }
        let mut x = x;
        let mut p = self.node(x).p;
        while !p.is_nil() && self.node(p).ch[RIGHT] == x {
            x = p;
            p = self.node(p).p;
        }
        p
    }

    /// In-order predecessor; `NIL` steps back to the cached maximum directly.
    pub(crate) fn prev_id(&self, x: Id) -> Id {
        if x.is_nil() {
            return self.rightmost;
        }
        let left = self.node(x).ch[LEFT];
        if !left.is_nil() {
            return self.maximum(left);
        }
        let mut x = x;
        let mut p = self.node(x).p;
        while !p.is_nil() && self.node(p).ch[LEFT] == x {
            x = p;
            p = self.node(p).p;
        }
        p
    }

    /// Position of the smallest element, or `END` when empty.
    pub fn begin(&self) -> Pos {
        Pos(self.leftmost)
    }

    pub fn end(&self) -> Pos {
        Pos::END
    }

    /// Position of the largest element, or `END` when empty.
    pub fn rbegin(&self) -> Pos {
        Pos(self.rightmost)
    }

    /// Where backward stepping from `rbegin` stops. Same sentinel as `end`.
    pub fn rend(&self) -> Pos {
        Pos::END
    }

    /// Steps forward: `next(last) == END` and `next(END) == begin()`.
    pub fn next(&self, pos: Pos) -> Pos {
        Pos(self.next_id(pos.0))
    }

    /// Steps backward: `prev(END) == rbegin()` and `prev(begin()) == END`.
    pub fn prev(&self, pos: Pos) -> Pos {
        Pos(self.prev_id(pos.0))
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.arena.get(pos.0).map(|node| &node.value)
    }

    /// Mutable access to an element. Changing its key so that it orders
    /// differently is a logic error.
    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        self.arena.get_mut(pos.0).map(|node| &mut node.value)
    }

    pub fn first(&self) -> Option<&T> {
        self.get(self.begin())
    }

    pub fn last(&self) -> Option<&T> {
        self.get(self.rbegin())
    }

    pub fn iter(&self) -> Iter<'_, T, K, C> {
        Iter {
            tree: self,
            front: self.leftmost,
            back: self.rightmost,
            remaining: self.len,
        }
    }

    /// Iterates `[first, last)`. `last` must be reachable from `first`.
    pub fn range_iter(&self, first: Pos, last: Pos) -> Iter<'_, T, K, C> {
        let mut remaining = 0;
        let mut x = first.0;
        while x != last.0 && !x.is_nil() {
            remaining += 1;
            x = self.next_id(x);
        }
        Iter {
            tree: self,
            front: first.0,
            back: self.prev_id(last.0),
            remaining,
        }
    }
}

/// Borrowing in-order iterator.
pub struct Iter<'a, T, K, C> {
    tree: &'a RbTree<T, K, C>,
    front: Id,
    back: Id,
    remaining: usize,
}

impl<T, K, C> Clone for Iter<'_, T, K, C> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T, K, C> Iterator for Iter<'a, T, K, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let x = self.front;
        self.front = self.tree.next_id(x);
        self.remaining -= 1;
        Some(&self.tree.node(x).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, K, C> DoubleEndedIterator for Iter<'a, T, K, C> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let x = self.back;
        self.back = self.tree.prev_id(x);
        self.remaining -= 1;
        Some(&self.tree.node(x).value)
    }
}

impl<T, K, C> ExactSizeIterator for Iter<'_, T, K, C> {}

impl<T, K, C> FusedIterator for Iter<'_, T, K, C> {}

impl<'a, T, K, C> IntoIterator for &'a RbTree<T, K, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, K, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning in-order iterator.
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T, K, C> IntoIterator for RbTree<T, K, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let mut order = Vec::with_capacity(self.len);
        let mut x = self.leftmost;
        while !x.is_nil() {
            order.push(x);
            x = self.next_id(x);
        }
        let values: Vec<T> = order
            .into_iter()
            .map(|id| self.arena.release(id).value)
            .collect();
        IntoIter {
            inner: values.into_iter(),
        }
    }
}
