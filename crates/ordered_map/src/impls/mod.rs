mod rb;
mod rb_multimap;
mod rb_set;
mod std_btree;

pub use rb::RbTreeMap;
pub use rb_multimap::RbTreeMultiMap;
pub use rb_set::RbTreeSet;
pub use std_btree::StdBTreeMap;
