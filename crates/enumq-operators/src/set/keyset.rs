//! Seen-sets keyed by a comparison strategy.
//!
//! [`KeyIndex`] is the append-ordered key table shared by the set operators
//! and by grouping. With a hashing strategy it buckets by the hash surrogate;
//! without one it falls back to a linear scan. [`LesserSet`] keeps keys in a
//! sorted vector and derives equality from the ordering.

use rustc_hash::FxHashMap;

use enumq_core::compare::{Equaler, Lesser};

/// Membership structure used by the buffering operators.
pub trait KeySet<K> {
    /// Add `key`; returns `true` if it was not present.
    fn insert(&mut self, key: K) -> bool;

    fn contains(&self, key: &K) -> bool;

    /// Remove `key`; returns `true` if it was present.
    fn remove(&mut self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}

/// Append-ordered table of distinct keys.
pub struct KeyIndex<K, Q> {
    equaler: Q,
    keys: Vec<K>,
    buckets: FxHashMap<u64, Vec<usize>>,
}

impl<K, Q: Equaler<K>> KeyIndex<K, Q> {
    pub fn new(equaler: Q) -> Self {
        Self {
            equaler,
            keys: Vec::new(),
            buckets: FxHashMap::default(),
        }
    }

    fn find(&self, key: &K, hash: Option<u64>) -> Option<usize> {
        match hash {
            Some(h) => self
                .buckets
                .get(&h)?
                .iter()
                .copied()
                .find(|&i| self.equaler.equal(&self.keys[i], key)),
            None => self.keys.iter().position(|k| self.equaler.equal(k, key)),
        }
    }

    /// Position of `key` in first-seen order.
    pub fn position(&self, key: &K) -> Option<usize> {
        self.find(key, self.equaler.hash_of(key))
    }

    /// Position of `key`, appending it when absent. The flag is `true` when
    /// the key was appended.
    pub fn entry(&mut self, key: K) -> (usize, bool) {
        let hash = self.equaler.hash_of(&key);
        if let Some(i) = self.find(&key, hash) {
            return (i, false);
        }
        let i = self.keys.len();
        self.keys.push(key);
        if let Some(h) = hash {
            self.buckets.entry(h).or_default().push(i);
        }
        (i, true)
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn into_keys(self) -> Vec<K> {
        self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.buckets.clear();
    }
}

/// Seen-set over an equality strategy.
pub struct EqualerSet<K, Q> {
    index: KeyIndex<K, Q>,
    // Removal leaves the key in the index and flips its slot.
    live: Vec<bool>,
    live_count: usize,
}

impl<K, Q: Equaler<K>> EqualerSet<K, Q> {
    pub fn new(equaler: Q) -> Self {
        Self {
            index: KeyIndex::new(equaler),
            live: Vec::new(),
            live_count: 0,
        }
    }
}

impl<K, Q: Equaler<K>> KeySet<K> for EqualerSet<K, Q> {
    fn insert(&mut self, key: K) -> bool {
        let (i, appended) = self.index.entry(key);
        if appended {
            self.live.push(true);
        } else if self.live[i] {
            return false;
        } else {
            self.live[i] = true;
        }
        self.live_count += 1;
        true
    }

    fn contains(&self, key: &K) -> bool {
        self.index.position(key).map_or(false, |i| self.live[i])
    }

    fn remove(&mut self, key: &K) -> bool {
        match self.index.position(key) {
            Some(i) if self.live[i] => {
                self.live[i] = false;
                self.live_count -= 1;
                true
            }
            _ => false,
        }
    }

    fn len(&self) -> usize {
        self.live_count
    }

    fn clear(&mut self) {
        self.index.clear();
        self.live.clear();
        self.live_count = 0;
    }
}

/// Seen-set over an ordering strategy; two keys are the same when neither is
/// less than the other.
pub struct LesserSet<K, L> {
    lesser: L,
    sorted: Vec<K>,
}

impl<K, L: Lesser<K>> LesserSet<K, L> {
    pub fn new(lesser: L) -> Self {
        Self {
            lesser,
            sorted: Vec::new(),
        }
    }

    fn search(&self, key: &K) -> Result<usize, usize> {
        let i = self.sorted.partition_point(|k| self.lesser.less(k, key));
        match self.sorted.get(i) {
            Some(k) if !self.lesser.less(key, k) => Ok(i),
            _ => Err(i),
        }
    }
}

impl<K, L: Lesser<K>> KeySet<K> for LesserSet<K, L> {
    fn insert(&mut self, key: K) -> bool {
        match self.search(&key) {
            Ok(_) => false,
            Err(i) => {
                self.sorted.insert(i, key);
                true
            }
        }
    }

    fn contains(&self, key: &K) -> bool {
        self.search(key).is_ok()
    }

    fn remove(&mut self, key: &K) -> bool {
        match self.search(key) {
            Ok(i) => {
                self.sorted.remove(i);
                true
            }
            Err(_) => false,
        }
    }

    fn len(&self) -> usize {
        self.sorted.len()
    }

    fn clear(&mut self) {
        self.sorted.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumq_core::compare::{CaseInsensitive, DeepEqual, HashEqual, Order};

    #[test]
    fn index_keeps_first_seen_order() {
        let mut idx = KeyIndex::new(HashEqual);
        assert_eq!(idx.entry("b"), (0, true));
        assert_eq!(idx.entry("a"), (1, true));
        assert_eq!(idx.entry("b"), (0, false));
        assert_eq!(idx.keys(), &["b", "a"]);
        assert_eq!(idx.position(&"a"), Some(1));
        assert_eq!(idx.position(&"z"), None);
    }

    #[test]
    fn linear_fallback_without_hash() {
        let mut set = EqualerSet::new(DeepEqual);
        assert!(set.insert(1.5));
        assert!(!set.insert(1.5));
        assert!(set.insert(f64::NAN));
        // NaN is never equal to itself structurally.
        assert!(set.insert(f64::NAN));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn removal_and_reinsertion() {
        let mut set = EqualerSet::new(CaseInsensitive);
        assert!(set.insert("Mars".to_string()));
        assert!(set.contains(&"MARS".to_string()));
        assert!(set.remove(&"mars".to_string()));
        assert!(!set.contains(&"Mars".to_string()));
        assert!(!set.remove(&"Mars".to_string()));
        assert!(set.insert("mArS".to_string()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn ordered_set_uses_ordering_for_sameness() {
        let mut set = LesserSet::new(CaseInsensitive);
        assert!(set.insert("b".to_string()));
        assert!(set.insert("A".to_string()));
        assert!(!set.insert("a".to_string()));
        assert!(set.contains(&"B".to_string()));
        assert!(set.remove(&"B".to_string()));
        assert_eq!(set.len(), 1);

        let mut nums = LesserSet::new(Order);
        for n in [5, 1, 5, 3, 1] {
            nums.insert(n);
        }
        assert_eq!(nums.len(), 3);
        nums.clear();
        assert!(nums.is_empty());
    }
}
