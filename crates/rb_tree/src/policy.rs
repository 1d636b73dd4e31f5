/// Extracts the ordering key from a stored value.
pub trait KeyOf<T> {
    type Key: ?Sized;

    fn key_of(value: &T) -> &Self::Key;
}

/// The value is its own key (sets).
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl<T> KeyOf<T> for Identity {
    type Key = T;

    #[inline(always)]
    fn key_of(value: &T) -> &T {
        value
    }
}

/// The key is the first element of a pair (maps).
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectFirst;

impl<K, V> KeyOf<(K, V)> for SelectFirst {
    type Key = K;

    #[inline(always)]
    fn key_of(value: &(K, V)) -> &K {
        &value.0
    }
}

/// A strict weak ordering on keys.
///
/// `less` must be irreflexive and transitive, and equivalence
/// (`!less(a, b) && !less(b, a)`) must be transitive. A comparator that breaks
/// these rules is a logic error: lookups and insert positions become unspecified,
/// but the tree stays memory-safe.
pub trait Compare<K: ?Sized> {
    fn less(&self, a: &K, b: &K) -> bool;

    #[inline]
    fn equivalent(&self, a: &K, b: &K) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// Ascending `Ord` order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Less;

impl<K: Ord + ?Sized> Compare<K> for Less {
    #[inline(always)]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

/// Descending `Ord` order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greater;

impl<K: Ord + ?Sized> Compare<K> for Greater {
    #[inline(always)]
    fn less(&self, a: &K, b: &K) -> bool {
        a > b
    }
}

impl<K: ?Sized, F> Compare<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline(always)]
    fn less(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}
