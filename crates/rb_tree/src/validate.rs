use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::iter::Pos;
use crate::node::{Color, Id, LEFT, RIGHT};
use crate::policy::{Compare, KeyOf};
use crate::tree::RbTree;

/// A broken tree invariant, as reported by [`RbTree::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    RedRoot,
    RedRedEdge { at: Pos },
    BlackHeightMismatch { at: Pos },
    BrokenParentLink { at: Pos },
    OutOfOrder { at: Pos },
    StaleExtreme,
    LenMismatch { expected: usize, found: usize },
}

impl Display for InvariantViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RedRoot => f.write_str("root is red"),
            Self::RedRedEdge { at } => write!(f, "red node {at:?} has a red parent"),
            Self::BlackHeightMismatch { at } => {
                write!(f, "black height below {at:?} differs from the rest of the tree")
            }
            Self::BrokenParentLink { at } => write!(f, "node {at:?} has a wrong parent link"),
            Self::OutOfOrder { at } => write!(f, "node {at:?} sorts before its predecessor"),
            Self::StaleExtreme => f.write_str("cached leftmost/rightmost is stale"),
            Self::LenMismatch { expected, found } => {
                write!(f, "len is {expected} but {found} nodes are reachable")
            }
        }
    }
}

impl Error for InvariantViolation {}

impl<T, K, C> RbTree<T, K, C>
where
    K: KeyOf<T>,
    C: Compare<K::Key>,
{
    /// Checks every structural and coloring invariant; returns the black height
    /// (black nodes on any root-to-leaf path, nil leaves not counted).
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        self.validate_structure()?;
        self.validate_colors()
    }

    /// Links, cached extremes, length, and in-order key order. Colors are not
    /// looked at.
    pub(crate) fn validate_structure(&self) -> Result<(), InvariantViolation> {
        if self.root.is_nil() {
            if !self.leftmost.is_nil() || !self.rightmost.is_nil() {
                return Err(InvariantViolation::StaleExtreme);
            }
            if self.len != 0 {
                return Err(InvariantViolation::LenMismatch {
                    expected: self.len,
                    found: 0,
                });
            }
            return Ok(());
        }
        if !self.node(self.root).p.is_nil() {
            return Err(InvariantViolation::BrokenParentLink {
                at: Pos(self.root),
            });
        }

        let mut reachable = 0;
        let mut stack = vec![self.root];
        while let Some(x) = stack.pop() {
            reachable += 1;
            if reachable > self.len {
                return Err(InvariantViolation::LenMismatch {
                    expected: self.len,
                    found: reachable,
                });
            }
            for c in self.node(x).ch {
                if c.is_nil() {
                    continue;
                }
                if self.node(c).p != x {
                    return Err(InvariantViolation::BrokenParentLink { at: Pos(c) });
                }
                stack.push(c);
            }
        }
        if reachable != self.len {
            return Err(InvariantViolation::LenMismatch {
                expected: self.len,
                found: reachable,
            });
        }

        if self.leftmost != self.minimum(self.root) || self.rightmost != self.maximum(self.root)
        {
            return Err(InvariantViolation::StaleExtreme);
        }

        let mut prev = self.leftmost;
        let mut x = self.next_id(prev);
        while !x.is_nil() {
            if self.compare.less(self.key_at(x), self.key_at(prev)) {
                return Err(InvariantViolation::OutOfOrder { at: Pos(x) });
            }
            prev = x;
            x = self.next_id(x);
        }
        Ok(())
    }

    fn validate_colors(&self) -> Result<usize, InvariantViolation> {
        if self.is_red(self.root) {
            return Err(InvariantViolation::RedRoot);
        }
        let mut x = self.leftmost;
        while !x.is_nil() {
            let node = self.node(x);
            if node.color == Color::Red && self.is_red(node.p) {
                return Err(InvariantViolation::RedRedEdge { at: Pos(x) });
            }
            x = self.next_id(x);
        }

        let mut expected = None;
        let mut x = self.leftmost;
        while !x.is_nil() {
            let node = self.node(x);
            if node.ch[LEFT].is_nil() || node.ch[RIGHT].is_nil() {
                let height = self.blacks_to_root(x);
                match expected {
                    None => expected = Some(height),
                    Some(h) if h != height => {
                        return Err(InvariantViolation::BlackHeightMismatch { at: Pos(x) });
                    }
                    Some(_) => {}
                }
            }
            x = self.next_id(x);
        }
        Ok(expected.unwrap_or(0))
    }

    fn blacks_to_root(&self, mut x: Id) -> usize {
        let mut blacks = 0;
        while !x.is_nil() {
            if self.node(x).color == Color::Black {
                blacks += 1;
            }
            x = self.node(x).p;
        }
        blacks
    }
}
