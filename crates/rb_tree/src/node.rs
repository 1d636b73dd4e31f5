use std::collections::TryReserveError;

use log::trace;

pub(crate) const LEFT: usize = 0;
pub(crate) const RIGHT: usize = 1;

/// Node color. Absent children count as black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Color {
    Red,
    Black,
}

#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Id(u32);

impl Id {
    pub(crate) const NIL: Self = Self(u32::MAX);

    /// Number of distinct non-`NIL` ids.
    pub(crate) const CAPACITY: usize = u32::MAX as usize;

    #[inline(always)]
    pub(crate) fn is_nil(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline(always)]
    pub(crate) fn idx(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    fn from_idx(v: usize) -> Self {
        debug_assert!(v < Self::CAPACITY);
        Self(v as u32)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) ch: [Id; 2],
    pub(crate) p: Id,
    pub(crate) color: Color,
    pub(crate) value: T,
}

impl<T> Node<T> {
    /// A fresh red leaf hanging under `p`.
    pub(crate) fn new_leaf(value: T, p: Id) -> Self {
        Self {
            ch: [Id::NIL, Id::NIL],
            p,
            color: Color::Red,
            value,
        }
    }
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Id },
}

/// Slot storage for tree nodes.
///
/// Vacated slots form an intrusive free list, so releasing a node never allocates
/// and a live node keeps its `Id` until it is released.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Id,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: Id::NIL,
        }
    }

    /// Makes sure the next `alloc` can be served without allocating.
    pub(crate) fn reserve_one(&mut self) -> Result<(), TryReserveError> {
        if self.free_head.is_nil() && self.slots.len() == self.slots.capacity() {
            self.slots.try_reserve(1)?;
            trace!("node arena grew to {} slots", self.slots.capacity());
        }
        Ok(())
    }

    pub(crate) fn alloc(&mut self, node: Node<T>) -> Id {
        if !self.free_head.is_nil() {
            let id = self.free_head;
            let slot = &mut self.slots[id.idx()];
            if let Slot::Vacant { next_free } = *slot {
                self.free_head = next_free;
            }
            *slot = Slot::Occupied(node);
            return id;
        }
        let id = Id::from_idx(self.slots.len());
        self.slots.push(Slot::Occupied(node));
        id
    }

    /// Vacates the slot of `id` and hands back its node.
    pub(crate) fn release(&mut self, id: Id) -> Node<T> {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[id.idx()], vacant) {
            Slot::Occupied(node) => {
                self.free_head = id;
                node
            }
            Slot::Vacant { .. } => unreachable!("released a vacant node slot"),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = Id::NIL;
    }

    #[inline(always)]
    pub(crate) fn get(&self, id: Id) -> Option<&Node<T>> {
        match self.slots.get(id.idx()) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, id: Id) -> Option<&mut Node<T>> {
        match self.slots.get_mut(id.idx()) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    #[inline(always)]
    pub(crate) fn node(&self, id: Id) -> &Node<T> {
        debug_assert!(!id.is_nil());
        match &self.slots[id.idx()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to a vacant node slot"),
        }
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, id: Id) -> &mut Node<T> {
        debug_assert!(!id.is_nil());
        match &mut self.slots[id.idx()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to a vacant node slot"),
        }
    }

    /// Size in bytes of one slot, used to bound `max_size`.
    pub(crate) const fn slot_size() -> usize {
        std::mem::size_of::<Slot<T>>()
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, Id, Node};

    #[test]
    fn released_slots_are_reused_last_in_first_out() {
        let mut arena = Arena::new();
        let ids: Vec<Id> = (0..4)
            .map(|v| {
                arena.reserve_one().unwrap();
                arena.alloc(Node::new_leaf(v, Id::NIL))
            })
            .collect();
        assert_eq!(arena.release(ids[1]).value, 1);
        assert_eq!(arena.release(ids[3]).value, 3);
        assert!(arena.get(ids[1]).is_none());

        arena.reserve_one().unwrap();
        assert_eq!(arena.alloc(Node::new_leaf(10, Id::NIL)), ids[3]);
        arena.reserve_one().unwrap();
        assert_eq!(arena.alloc(Node::new_leaf(11, Id::NIL)), ids[1]);
        assert_eq!(arena.node(ids[1]).value, 11);
        assert_eq!(arena.node(ids[0]).value, 0);
    }

    #[test]
    fn nil_is_never_occupied() {
        let mut arena = Arena::new();
        arena.reserve_one().unwrap();
        arena.alloc(Node::new_leaf((), Id::NIL));
        assert!(arena.get(Id::NIL).is_none());
        assert!(Id::NIL.is_nil());
    }
}
