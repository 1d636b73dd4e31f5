//! Red-black tree engine for ordered associative containers.
//!
//! [`RbTree`] stores values ordered by a key taken out of each value
//! ([`KeyOf`]) under a strict weak ordering ([`Compare`]). It supports both
//! unique-key and duplicate-key insertion, so sets, maps, multisets and multimaps
//! are thin wrappers choosing a policy pair:
//!
//! ```
//! use rb_tree::{RbTree, SelectFirst};
//!
//! let mut map: RbTree<(u32, &str), SelectFirst> = RbTree::new();
//! map.insert_unique((2, "two"));
//! map.insert_unique((1, "one"));
//! assert_eq!(map.get(map.find(&2)), Some(&(2, "two")));
//! assert_eq!(map.first(), Some(&(1, "one")));
//! ```

mod erase;
mod error;
mod insert;
mod iter;
mod node;
mod policy;
mod rotate;
mod search;
mod tree;
mod validate;

pub use error::TreeError;
pub use iter::{IntoIter, Iter, Pos};
pub use policy::{Compare, Greater, Identity, KeyOf, Less, SelectFirst};
pub use tree::RbTree;
pub use validate::InvariantViolation;

#[cfg(test)]
pub(crate) mod test_util {
    pub(crate) fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}
