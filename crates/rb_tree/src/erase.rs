use log::debug;

use crate::iter::Pos;
use crate::node::{Color, Id, LEFT, RIGHT};
use crate::policy::{Compare, KeyOf};
use crate::tree::RbTree;

impl<T, K, C> RbTree<T, K, C> {
    /// Removes the element at `pos` and returns it; `END` removes nothing.
    pub fn erase(&mut self, pos: Pos) -> Option<T> {
        self.arena.get(pos.0)?;
        Some(self.erase_id(pos.0))
    }

    /// Removes every element in `[first, last)`; returns how many were removed.
    pub fn erase_range(&mut self, first: Pos, last: Pos) -> usize {
        if first.0 == self.leftmost && last.is_end() {
            let removed = self.len;
            self.clear();
            return removed;
        }
        let mut removed = 0;
        let mut x = first.0;
        while x != last.0 && !x.is_nil() {
            let next = self.next_id(x);
            self.erase_id(x);
            x = next;
            removed += 1;
        }
        debug!("erased a range of {removed} nodes, len {}", self.len);
        removed
    }

    pub fn pop_first(&mut self) -> Option<T> {
        self.erase(self.begin())
    }

    pub fn pop_last(&mut self) -> Option<T> {
        self.erase(self.rbegin())
    }

    /// Unlinks `z`, rebalances, then frees its slot.
    ///
    /// A node with two children is replaced by its in-order successor node (the
    /// successor is relinked, its value never moves), so ids of all other nodes
    /// stay valid.
    pub(crate) fn erase_id(&mut self, z: Id) -> T {
        let [zl, zr] = self.node(z).ch;
        let zp = self.node(z).p;
        // `x` takes the slot that structurally disappears; `xp` is its parent
        // even when `x` is nil.
        let x;
        let xp;
        let removed_color;

        if zl.is_nil() || zr.is_nil() {
            x = if zl.is_nil() { zr } else { zl };
            xp = zp;
            if !x.is_nil() {
                self.node_mut(x).p = xp;
            }
            self.replace_child(zp, z, x);
            removed_color = self.node(z).color;

            if self.leftmost == z {
                self.leftmost = if x.is_nil() { xp } else { self.minimum(x) };
            }
            if self.rightmost == z {
                self.rightmost = if x.is_nil() { xp } else { self.maximum(x) };
            }
        } else {
            let y = self.minimum(zr);
            x = self.node(y).ch[RIGHT];

            self.node_mut(zl).p = y;
            self.node_mut(y).ch[LEFT] = zl;
            if y == zr {
                xp = y;
            } else {
                xp = self.node(y).p;
                if !x.is_nil() {
                    self.node_mut(x).p = xp;
                }
                self.node_mut(xp).ch[LEFT] = x;
                self.node_mut(y).ch[RIGHT] = zr;
                self.node_mut(zr).p = y;
            }
            self.replace_child(zp, z, y);
            self.node_mut(y).p = zp;

            // `y` inherits the color of the slot it moved into; the color that
            // leaves the tree is the one `y` had.
            removed_color = self.node(y).color;
            let z_color = self.node(z).color;
            self.set_color(y, z_color);
        }

        if removed_color == Color::Black {
            self.erase_fixup(x, xp);
        }
        self.len -= 1;
        self.arena.release(z).value
    }

    /// Pays off the missing black on the path through `x` (child of `parent`).
    fn erase_fixup(&mut self, mut x: Id, mut parent: Id) {
        while x != self.root && !self.is_red(x) {
            // The deficient side has a black count of at least one less than its
            // sibling side, so the sibling `w` always exists.
            let side = if self.node(parent).ch[LEFT] == x {
                LEFT
            } else {
                RIGHT
            };
            let far_side = 1 - side;
            let mut w = self.node(parent).ch[far_side];

            if self.is_red(w) {
                self.set_color(w, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                w = self.node(parent).ch[far_side];
            }

            let [near, far] = [self.node(w).ch[side], self.node(w).ch[far_side]];
            if !self.is_red(near) && !self.is_red(far) {
                self.set_color(w, Color::Red);
                x = parent;
                parent = self.node(x).p;
                continue;
            }

            if !self.is_red(far) {
                self.set_color(near, Color::Black);
                self.set_color(w, Color::Red);
                self.rotate(w, far_side);
                w = self.node(parent).ch[far_side];
            }
            let parent_color = self.node(parent).color;
            self.set_color(w, parent_color);
            self.set_color(parent, Color::Black);
            let far = self.node(w).ch[far_side];
            self.set_color(far, Color::Black);
            self.rotate(parent, side);
            break;
        }
        if !x.is_nil() {
            self.set_color(x, Color::Black);
        }
    }
}

impl<T, K, C> RbTree<T, K, C>
where
    K: KeyOf<T>,
    C: Compare<K::Key>,
{
    /// Removes every element equivalent to `key`; returns how many were removed.
    pub fn erase_key(&mut self, key: &K::Key) -> usize {
        let (first, last) = self.equal_range(key);
        self.erase_range(first, last)
    }
}
