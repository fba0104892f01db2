//! Distinct / DistinctBy: one forward pass, yielding each key's first
//! occurrence.

use std::hash::Hash;

use enumq_core::compare::{Equaler, HashEqual, Lesser};
use enumq_core::error::{require, Error, Result};
use enumq_core::Enumerator;

use super::keyset::{EqualerSet, KeySet, LesserSet};
use super::{identity, Identity};

pub struct DistinctBy<E, F, S> {
    source: E,
    key: F,
    seen: S,
}

/// Distinct over whole elements.
pub type Distinct<E, S> = DistinctBy<E, Identity<<E as Enumerator>::Item>, S>;

fn build<E, F, S>(source: Option<E>, key: F, seen: S) -> Result<DistinctBy<E, F, S>> {
    let source = require(source, Error::NilSource)?;
    Ok(DistinctBy { source, key, seen })
}

/// Distinct elements by `Eq` + hashing.
pub fn distinct<E>(source: Option<E>) -> Result<Distinct<E, EqualerSet<E::Item, HashEqual>>>
where
    E: Enumerator,
    E::Item: Hash + Eq + Clone,
{
    let key = identity as Identity<E::Item>;
    build(source, key, EqualerSet::new(HashEqual))
}

/// Distinct elements by an equality strategy; `None` means structural
/// equality.
pub fn distinct_eq<E, Q>(
    source: Option<E>,
    equaler: Option<Q>,
) -> Result<Distinct<E, EqualerSet<E::Item, Option<Q>>>>
where
    E: Enumerator,
    E::Item: PartialEq + Clone,
    Q: Equaler<E::Item>,
{
    let key = identity as Identity<E::Item>;
    build(source, key, EqualerSet::new(equaler))
}

/// Distinct elements by an ordering strategy (ties are duplicates).
pub fn distinct_cmp<E, L>(
    source: Option<E>,
    lesser: Option<L>,
) -> Result<Distinct<E, LesserSet<E::Item, L>>>
where
    E: Enumerator,
    E::Item: Clone,
    L: Lesser<E::Item>,
{
    let source = require(source, Error::NilSource)?;
    let lesser = require(lesser, Error::NilComparer)?;
    let key = identity as Identity<E::Item>;
    build(Some(source), key, LesserSet::new(lesser))
}

/// Distinct by a projected key.
pub fn distinct_by<E, F, K>(
    source: Option<E>,
    key: Option<F>,
) -> Result<DistinctBy<E, F, EqualerSet<K, HashEqual>>>
where
    E: Enumerator,
    F: Fn(&E::Item) -> K,
    K: Hash + Eq,
{
    let source = require(source, Error::NilSource)?;
    let key = require(key, Error::NilSelector)?;
    build(Some(source), key, EqualerSet::new(HashEqual))
}

impl<E, F, K, S> Enumerator for DistinctBy<E, F, S>
where
    E: Enumerator,
    F: Fn(&E::Item) -> K,
    S: KeySet<K>,
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        while self.source.advance() {
            if let Some(item) = self.source.current() {
                if self.seen.insert((self.key)(&item)) {
                    return true;
                }
            }
        }
        false
    }

    fn current(&self) -> Option<E::Item> {
        self.source.current()
    }

    fn restart(&mut self) {
        self.source.restart();
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumq_core::prelude::*;

    fn strings(items: &[&str]) -> SliceEnumerator<String> {
        from_vec(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let mut d = distinct(Some(from_vec(vec!["A", "a", "b", "c", "b"]))).unwrap();
        assert_eq!(to_vec(&mut d), vec!["A", "a", "b", "c"]);
    }

    #[test]
    fn nil_source() {
        assert_eq!(distinct(None::<Empty<i32>>).err(), Some(Error::NilSource));
    }

    #[test]
    fn absent_equaler_uses_structural_equality() {
        let src = strings(&["xyz", "test", "XYZ", "test", "def"]);
        let mut d = distinct_eq(Some(src), None::<CaseInsensitive>).unwrap();
        assert_eq!(to_vec(&mut d), vec!["xyz", "test", "XYZ", "def"]);
    }

    #[test]
    fn case_insensitive_equaler() {
        let src = strings(&["xyz", "test", "XYZ", "test", "def"]);
        let mut d = distinct_eq(Some(src), Some(CaseInsensitive)).unwrap();
        assert_eq!(to_vec(&mut d), vec!["xyz", "test", "def"]);
    }

    #[test]
    fn ordering_derived_sameness() {
        let src = strings(&["A", "a", "b", "c", "b"]);
        let mut d = distinct_cmp(Some(src), Some(CaseInsensitive)).unwrap();
        assert_eq!(to_vec(&mut d), vec!["A", "b", "c"]);

        let twice = crate::transform::concat(
            Some(from_vec(vec![1, 2, 3, 4])),
            Some(from_vec(vec![1, 2, 3, 4])),
        )
        .unwrap();
        let mut d = distinct_cmp(Some(twice), Some(Order)).unwrap();
        assert_eq!(to_vec(&mut d), vec![1, 2, 3, 4]);

        let missing = distinct_cmp(Some(empty::<i32>()), None::<Order>);
        assert_eq!(missing.err(), Some(Error::NilComparer));
    }

    #[test]
    fn restart_clears_seen_keys() {
        let src = strings(&["xyz", "test", "XYZ", "test", "def"]);
        let mut d = distinct_eq(Some(src), Some(CaseInsensitive)).unwrap();
        let first = to_vec(&mut d);
        d.restart();
        assert_eq!(to_vec(&mut d), first);
    }

    #[test]
    fn by_projected_key() {
        let fruits = "apple avocado banana blueberry cherry";
        let mut d = distinct_by(
            Some(from_vec(fruits.split(' ').collect())),
            Some(|s: &&str| s.chars().next()),
        )
        .unwrap();
        assert_eq!(to_vec(&mut d), vec!["apple", "banana", "cherry"]);
    }
}
