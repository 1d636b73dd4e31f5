use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use log::{debug, warn};

use crate::error::TreeError;
use crate::node::{Arena, Color, Id, LEFT, Node, RIGHT};
use crate::policy::{Identity, KeyOf, Less};

/// Red-black tree engine behind ordered sets, maps and their multi-key variants.
///
/// `K` extracts the key from a stored `T` and `C` orders keys. Nodes live in an
/// arena owned by the tree; parent and child links are arena ids, so positions
/// handed out by the tree stay valid across rebalancing and are only invalidated
/// by erasing the node they name.
pub struct RbTree<T, K = Identity, C = Less> {
    pub(crate) arena: Arena<T>,
    pub(crate) root: Id,
    pub(crate) leftmost: Id,
    pub(crate) rightmost: Id,
    pub(crate) len: usize,
    pub(crate) compare: C,
    _key: PhantomData<fn() -> K>,
}

impl<T, K, C: Default> RbTree<T, K, C> {
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, K, C: Default> Default for RbTree<T, K, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K, C> RbTree<T, K, C> {
    pub fn with_comparator(compare: C) -> Self {
        Self {
            arena: Arena::new(),
            root: Id::NIL,
            leftmost: Id::NIL,
            rightmost: Id::NIL,
            len: 0,
            compare,
            _key: PhantomData,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.compare
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Largest number of elements the tree can ever hold.
    pub fn max_size(&self) -> usize {
        let by_bytes = isize::MAX as usize / Arena::<T>::slot_size().max(1);
        by_bytes.min(Id::CAPACITY)
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} nodes", self.len);
        self.arena.clear();
        self.root = Id::NIL;
        self.leftmost = Id::NIL;
        self.rightmost = Id::NIL;
        self.len = 0;
    }

    /// Exchanges the contents (and comparators) of two trees in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        debug!("swapping trees of {} and {} nodes", self.len, other.len);
        std::mem::swap(self, other);
    }

    /// Checks that `additional` more nodes fit and that the next node can be
    /// stored without allocating.
    pub(crate) fn ensure_room(&mut self, additional: usize) -> Result<(), TreeError> {
        let max = self.max_size();
        let requested = self.len.saturating_add(additional);
        if requested > max {
            warn!("refusing insertion: {requested} nodes requested, capacity is {max}");
            return Err(TreeError::CapacityExceeded { requested, max });
        }
        self.arena.reserve_one().map_err(|err| {
            warn!("refusing insertion: node allocation failed ({err})");
            TreeError::AllocFailed(err)
        })
    }

    #[inline(always)]
    pub(crate) fn node(&self, x: Id) -> &Node<T> {
        self.arena.node(x)
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, x: Id) -> &mut Node<T> {
        self.arena.node_mut(x)
    }

    #[inline(always)]
    pub(crate) fn color(&self, x: Id) -> Color {
        if x.is_nil() {
            Color::Black
        } else {
            self.node(x).color
        }
    }

    #[inline(always)]
    pub(crate) fn is_red(&self, x: Id) -> bool {
        self.color(x) == Color::Red
    }

    #[inline(always)]
    pub(crate) fn set_color(&mut self, x: Id, color: Color) {
        self.node_mut(x).color = color;
    }

    /// Which child of its parent `x` is. `x` must not be the root.
    #[inline(always)]
    pub(crate) fn side_of(&self, x: Id) -> usize {
        let p = self.node(x).p;
        if self.node(p).ch[LEFT] == x { LEFT } else { RIGHT }
    }

    /// Points whatever referenced `old` from `parent` (or the root slot) at `new`.
    pub(crate) fn replace_child(&mut self, parent: Id, old: Id, new: Id) {
        if parent.is_nil() {
            self.root = new;
        } else if self.node(parent).ch[LEFT] == old {
            self.node_mut(parent).ch[LEFT] = new;
        } else {
            self.node_mut(parent).ch[RIGHT] = new;
        }
    }

    pub(crate) fn minimum(&self, mut x: Id) -> Id {
        while !self.node(x).ch[LEFT].is_nil() {
            x = self.node(x).ch[LEFT];
        }
        x
    }

    pub(crate) fn maximum(&self, mut x: Id) -> Id {
        while !self.node(x).ch[RIGHT].is_nil() {
            x = self.node(x).ch[RIGHT];
        }
        x
    }
}

impl<T, K, C> RbTree<T, K, C>
where
    K: KeyOf<T>,
{
    #[inline(always)]
    pub(crate) fn key_at(&self, x: Id) -> &K::Key {
        K::key_of(&self.node(x).value)
    }
}

impl<T: Clone, K, C: Clone> Clone for RbTree<T, K, C> {
    /// Copies the tree node for node, keeping its shape and colors.
    fn clone(&self) -> Self {
        Self {
            arena: self.arena.clone(),
            root: self.root,
            leftmost: self.leftmost,
            rightmost: self.rightmost,
            len: self.len,
            compare: self.compare.clone(),
            _key: PhantomData,
        }
    }
}

impl<T: Debug, K, C> Debug for RbTree<T, K, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::init_logger;
    use crate::{Greater, RbTree, SelectFirst};

    #[test]
    fn empty_tree() {
        let tree: RbTree<u32> = RbTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.begin(), tree.end());
        assert_eq!(tree.rbegin(), tree.rend());
        assert!(tree.max_size() > 0);
        assert!(tree.max_size() <= u32::MAX as usize);
        assert_eq!(tree.validate(), Ok(0));
    }

    #[test]
    fn clear_resets_everything() {
        init_logger();
        let mut tree: RbTree<u32> = RbTree::new();
        tree.insert_unique_iter(0..100).unwrap();
        tree.clear();
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.begin(), tree.end());
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
        assert_eq!(tree.validate(), Ok(0));

        tree.insert_unique(5);
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn swap_exchanges_contents() {
        init_logger();
        let mut a: RbTree<u32> = RbTree::new();
        let mut b: RbTree<u32> = RbTree::new();
        a.insert_unique_iter([1, 2, 3]).unwrap();
        b.insert_unique_iter([10]).unwrap();
        let pos = a.find(&2);
        a.swap(&mut b);
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![10]);
        assert_eq!(b.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(b.get(pos), Some(&2));
        assert_eq!(a.validate(), Ok(1));
        assert!(b.validate().is_ok());
    }

    #[test]
    fn clone_is_independent() {
        let mut a: RbTree<(u32, &str), SelectFirst> = RbTree::new();
        for (i, name) in ["zero", "one", "two", "three"].iter().enumerate() {
            a.insert_unique((i as u32, *name));
        }
        let mut b = a.clone();
        b.erase_key(&1);
        assert_eq!(a.len(), 4);
        assert_eq!(b.len(), 3);
        assert_eq!(a.get(a.find(&1)), Some(&(1, "one")));
        assert!(b.find(&1).is_end());
        assert!(a.validate().is_ok());
        assert!(b.validate().is_ok());
    }

    #[test]
    fn custom_comparator_orders_descending() {
        let mut tree: RbTree<i32, crate::Identity, Greater> = RbTree::new();
        tree.insert_unique_iter([3, 1, 4, 1, 5, 9, 2, 6]).unwrap();
        assert_eq!(
            tree.iter().copied().collect::<Vec<_>>(),
            vec![9, 6, 5, 4, 3, 2, 1]
        );

        let mut by_abs = RbTree::<i32, crate::Identity, _>::with_comparator(
            |a: &i32, b: &i32| a.abs() < b.abs(),
        );
        by_abs.insert_equal_iter([-3, 2, -1, 3]).unwrap();
        assert_eq!(
            by_abs.iter().copied().collect::<Vec<_>>(),
            vec![-1, 2, -3, 3]
        );
    }

    #[test]
    fn debug_lists_values_in_order() {
        let mut tree: RbTree<u8> = RbTree::new();
        tree.insert_unique_iter([3, 1, 2]).unwrap();
        assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
    }
}
