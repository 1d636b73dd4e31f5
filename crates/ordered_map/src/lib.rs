pub mod impls;

/// Ordered map interface.
///
/// - Keys are unique.
/// - `insert` overwrites the existing value and returns the old one.
/// - `lower_bound` returns the smallest `(k, v)` with `k >= key`.
pub trait OrderedMap {
    type Key: Ord;
    type Value;

    fn new() -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&mut self, key: &Self::Key) -> Option<&Self::Value>;

    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;

    fn lower_bound(&mut self, key: &Self::Key) -> Option<(&Self::Key, &Self::Value)>;
}

pub use impls::{RbTreeMap, RbTreeMultiMap, RbTreeSet, StdBTreeMap};

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::OrderedMap;
    use super::{RbTreeMap, StdBTreeMap};

    fn oracle_lower_bound(map: &BTreeMap<u64, u64>, key: u64) -> Option<(u64, u64)> {
        map.range(key..).next().map(|(&k, &v)| (k, v))
    }

    fn check_basic<M: OrderedMap<Key = u64, Value = u64>>() {
        let mut map = M::new();
        assert!(map.is_empty());
        assert_eq!(map.get(&0), None);
        assert_eq!(map.lower_bound(&0), None);
        assert_eq!(map.remove(&0), None);

        assert_eq!(map.insert(1, 10), None);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1).copied(), Some(10));
        assert_eq!(map.lower_bound(&0).map(|(k, v)| (*k, *v)), Some((1, 10)));
        assert_eq!(map.lower_bound(&2), None);

        assert_eq!(map.insert(1, 99), Some(10));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1).copied(), Some(99));

        assert_eq!(map.remove(&1), Some(99));
        assert!(map.is_empty());
        assert_eq!(map.get(&1), None);
    }

    fn check_bounds_edges<M: OrderedMap<Key = u64, Value = u64>>() {
        let keys = [0, 1, 3, 5, 7, u64::MAX - 1, u64::MAX];
        let mut map = M::new();
        let mut oracle = BTreeMap::new();
        for (i, &k) in keys.iter().enumerate() {
            assert_eq!(map.insert(k, i as u64), None);
            oracle.insert(k, i as u64);
        }

        for query in [0, 1, 2, 4, 6, 8, u64::MAX - 1, u64::MAX] {
            let got = map.lower_bound(&query).map(|(k, v)| (*k, *v));
            assert_eq!(got, oracle_lower_bound(&oracle, query), "query={query}");
        }
    }

    fn check_random<M: OrderedMap<Key = u64, Value = u64>>() {
        let mut rng = StdRng::seed_from_u64(0xDEAD_BEEF_CAFE_BABE);
        let mut map = M::new();
        let mut oracle = BTreeMap::new();

        const OPS: usize = 20_000;
        for _ in 0..OPS {
            let roll = rng.random_range(0..100);
            // A narrow key range so removes and overwrites actually hit.
            let key = rng.random_range(0..2_000);
            if roll < 35 {
                let value = rng.random::<u64>();
                assert_eq!(map.insert(key, value), oracle.insert(key, value));
            } else if roll < 55 {
                assert_eq!(map.remove(&key), oracle.remove(&key));
            } else if roll < 80 {
                assert_eq!(map.get(&key).copied(), oracle.get(&key).copied());
            } else {
                let got = map.lower_bound(&key).map(|(k, v)| (*k, *v));
                assert_eq!(got, oracle_lower_bound(&oracle, key));
            }
            assert_eq!(map.len(), oracle.len());
        }
    }

    macro_rules! test_all {
        ($name:ident, $func:ident) => {
            #[test]
            fn $name() {
                $func::<StdBTreeMap<u64, u64>>();
                $func::<RbTreeMap<u64, u64>>();
            }
        };
    }

    test_all!(basic_all_impls, check_basic);
    test_all!(bounds_edges_all_impls, check_bounds_edges);
    test_all!(random_all_impls, check_random);

    #[test]
    fn rb_map_stays_balanced_and_sorted() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let mut map = RbTreeMap::<u64, u64>::new();
        for i in 0..5_000 {
            let key = rng.random_range(0..1_000);
            if i % 3 == 2 {
                map.remove(&key);
            } else {
                map.insert(key, i);
            }
        }
        assert!(map.validate().is_ok());
        let keys: Vec<u64> = map.iter().map(|&(k, _)| k).collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(map.first().map(|e| e.0), keys.first().copied());
        assert_eq!(map.last().map(|e| e.0), keys.last().copied());

        map.clear();
        assert!(map.is_empty());
    }
}
