use crate::node::{Id, LEFT, RIGHT};
use crate::tree::RbTree;

impl<T, K, C> RbTree<T, K, C> {
    /// Moves `x` down toward `dir`; its child on the other side takes its place.
    ///
    /// In-order sequence, colors, and every parent back-link are preserved; the
    /// root is updated when `x` was the root.
    pub(crate) fn rotate(&mut self, x: Id, dir: usize) {
        let up = 1 - dir;
        let y = self.node(x).ch[up];
        debug_assert!(!y.is_nil(), "rotation needs a child to lift");

        let inner = self.node(y).ch[dir];
        self.node_mut(x).ch[up] = inner;
        if !inner.is_nil() {
            self.node_mut(inner).p = x;
        }

        let p = self.node(x).p;
        self.node_mut(y).p = p;
        self.replace_child(p, x, y);

        self.node_mut(y).ch[dir] = x;
        self.node_mut(x).p = y;
    }

    #[inline]
    pub(crate) fn rotate_left(&mut self, x: Id) {
        self.rotate(x, LEFT);
    }

    #[inline]
    pub(crate) fn rotate_right(&mut self, x: Id) {
        self.rotate(x, RIGHT);
    }
}

#[cfg(test)]
mod tests {
    use crate::RbTree;
    use crate::node::{LEFT, RIGHT};

    fn in_order(tree: &RbTree<u32>) -> Vec<u32> {
        tree.iter().copied().collect()
    }

    #[test]
    fn rotate_left_at_root_lifts_right_child() {
        let mut tree: RbTree<u32> = RbTree::new();
        tree.insert_unique_iter([2, 1, 3]).unwrap();
        let root = tree.root;
        assert_eq!(tree.node(root).value, 2);

        tree.rotate_left(root);
        let new_root = tree.root;
        assert_eq!(tree.node(new_root).value, 3);
        assert!(tree.node(new_root).p.is_nil());
        assert_eq!(tree.node(new_root).ch[LEFT], root);
        assert_eq!(tree.node(root).p, new_root);
        assert_eq!(in_order(&tree), vec![1, 2, 3]);
        assert_eq!(tree.validate_structure(), Ok(()));
    }

    #[test]
    fn rotations_invert_each_other() {
        let mut tree: RbTree<u32> = RbTree::new();
        tree.insert_unique_iter(0..31).unwrap();
        let root = tree.root;
        let before: Vec<_> = [LEFT, RIGHT].map(|d| tree.node(root).ch[d]).to_vec();

        tree.rotate_right(root);
        assert_ne!(tree.root, root);
        assert_eq!(tree.validate_structure(), Ok(()));

        tree.rotate_left(tree.root);
        assert_eq!(tree.root, root);
        let after: Vec<_> = [LEFT, RIGHT].map(|d| tree.node(root).ch[d]).to_vec();
        assert_eq!(before, after);
        assert_eq!(in_order(&tree), (0..31).collect::<Vec<_>>());
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn rotation_below_root_relinks_parent() {
        let mut tree: RbTree<u32> = RbTree::new();
        tree.insert_unique_iter(0..15).unwrap();
        let root = tree.root;
        let left = tree.node(root).ch[LEFT];

        tree.rotate_left(left);
        let lifted = tree.node(root).ch[LEFT];
        assert_ne!(lifted, left);
        assert_eq!(tree.node(lifted).p, root);
        assert_eq!(tree.node(left).p, lifted);
        assert_eq!(tree.validate_structure(), Ok(()));
        assert_eq!(in_order(&tree), (0..15).collect::<Vec<_>>());
    }
}
