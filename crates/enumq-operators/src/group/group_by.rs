//! GroupBy: one pass over the source on the first `advance()`, then the
//! groups are served in order of first key occurrence.

use std::hash::Hash;

use enumq_core::compare::{Equaler, HashEqual};
use enumq_core::error::{require, Error, Result};
use enumq_core::source::SliceEnumerator;
use enumq_core::Enumerator;

use super::lookup::{same, Grouping, Lookup};

/// Element selector of the variants that keep whole elements.
pub type Same<T> = fn(T) -> T;

pub struct GroupBy<E, KF, VF, Q, K, V> {
    source: E,
    key: KF,
    element: VF,
    // Moved into the lookup when the groups are built.
    equaler: Option<Q>,
    groups: Option<SliceEnumerator<Grouping<K, V>>>,
}

fn build<E, KF, VF, Q, K, V>(
    source: Option<E>,
    key: Option<KF>,
    element: Option<VF>,
    equaler: Q,
) -> Result<GroupBy<E, KF, VF, Q, K, V>> {
    let source = require(source, Error::NilSource)?;
    let key = require(key, Error::NilSelector)?;
    let element = require(element, Error::NilSelector)?;
    Ok(GroupBy {
        source,
        key,
        element,
        equaler: Some(equaler),
        groups: None,
    })
}

/// Group elements by a hashed key.
pub fn group_by<E, KF, K>(
    source: Option<E>,
    key: Option<KF>,
) -> Result<GroupBy<E, KF, Same<E::Item>, HashEqual, K, E::Item>>
where
    E: Enumerator,
    KF: Fn(&E::Item) -> K,
    K: Hash + Eq + Clone,
{
    build(source, key, Some(same as Same<E::Item>), HashEqual)
}

/// Group elements by key under an equality strategy; `None` means
/// structural equality.
pub fn group_by_eq<E, KF, K, Q>(
    source: Option<E>,
    key: Option<KF>,
    equaler: Option<Q>,
) -> Result<GroupBy<E, KF, Same<E::Item>, Option<Q>, K, E::Item>>
where
    E: Enumerator,
    KF: Fn(&E::Item) -> K,
    K: PartialEq + Clone,
    Q: Equaler<K>,
{
    build(source, key, Some(same as Same<E::Item>), equaler)
}

/// Group projected elements by a hashed key.
pub fn group_by_sel<E, KF, VF, K, V>(
    source: Option<E>,
    key: Option<KF>,
    element: Option<VF>,
) -> Result<GroupBy<E, KF, VF, HashEqual, K, V>>
where
    E: Enumerator,
    KF: Fn(&E::Item) -> K,
    VF: Fn(E::Item) -> V,
    K: Hash + Eq + Clone,
{
    build(source, key, element, HashEqual)
}

/// Group projected elements by key under an equality strategy.
pub fn group_by_sel_eq<E, KF, VF, K, V, Q>(
    source: Option<E>,
    key: Option<KF>,
    element: Option<VF>,
    equaler: Option<Q>,
) -> Result<GroupBy<E, KF, VF, Option<Q>, K, V>>
where
    E: Enumerator,
    KF: Fn(&E::Item) -> K,
    VF: Fn(E::Item) -> V,
    K: PartialEq + Clone,
    Q: Equaler<K>,
{
    build(source, key, element, equaler)
}

impl<E, KF, VF, Q, K, V> Enumerator for GroupBy<E, KF, VF, Q, K, V>
where
    E: Enumerator,
    KF: Fn(&E::Item) -> K,
    VF: Fn(E::Item) -> V,
    Q: Equaler<K>,
    K: Clone,
    V: Clone,
{
    type Item = Grouping<K, V>;

    fn advance(&mut self) -> bool {
        if self.groups.is_none() {
            let Some(equaler) = self.equaler.take() else {
                return false;
            };
            let lookup = Lookup::build(&mut self.source, &self.key, &self.element, equaler);
            self.groups = Some(lookup.enumerator());
        }
        self.groups.as_mut().map_or(false, |g| g.advance())
    }

    fn current(&self) -> Option<Grouping<K, V>> {
        self.groups.as_ref().and_then(|g| g.current())
    }

    fn restart(&mut self) {
        if let Some(g) = self.groups.as_mut() {
            g.restart();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumq_core::prelude::*;

    fn keys_and_members<K: Clone, V: Clone>(
        e: &mut impl Enumerator<Item = Grouping<K, V>>,
    ) -> Vec<(K, Vec<V>)> {
        to_vec(e)
            .into_iter()
            .map(|g| (g.key().clone(), g.elements().to_vec()))
            .collect()
    }

    #[test]
    fn groups_follow_first_occurrence() {
        let src = from_vec(vec![1, 2, 3, 4, 5, 6, 7]);
        let mut g = group_by(Some(src), Some(|x: &i32| x % 3)).unwrap();
        assert_eq!(
            keys_and_members(&mut g),
            vec![(1, vec![1, 4, 7]), (2, vec![2, 5]), (0, vec![3, 6])]
        );
    }

    #[test]
    fn deferred_until_first_advance_and_restart_rewinds() {
        let shared = Shared::new(from_vec(vec!["a", "bb", "cc"]));
        let probe = shared.clone();
        let mut g = group_by(Some(shared), Some(|s: &&str| s.len())).unwrap();
        assert_eq!(probe.current(), None);
        let first = keys_and_members(&mut g);
        assert_eq!(first, vec![(1, vec!["a"]), (2, vec!["bb", "cc"])]);
        g.restart();
        assert_eq!(keys_and_members(&mut g), first);
    }

    #[test]
    fn element_selector_and_strategy() {
        let pets = from_vec(vec![
            ("Barley", 8.3),
            ("Boots", 4.9),
            ("whiskers", 1.5),
            ("Daisy", 4.3),
        ]);
        let mut g = group_by_sel_eq(
            Some(pets),
            Some(|p: &(&str, f64)| p.0[..1].to_string()),
            Some(|p: (&str, f64)| p.1),
            Some(CaseInsensitive),
        )
        .unwrap();
        let groups = keys_and_members(&mut g);
        assert_eq!(groups[0], ("B".to_string(), vec![8.3, 4.9]));
        assert_eq!(groups.len(), 3);

        let mut by_age = group_by_sel(
            Some(from_vec(vec![('a', 1), ('b', 2), ('c', 1)])),
            Some(|p: &(char, i32)| p.1),
            Some(|p: (char, i32)| p.0),
        )
        .unwrap();
        let expected = vec![(1, vec!['a', 'c']), (2, vec!['b'])];
        assert_eq!(keys_and_members(&mut by_age), expected);
    }

    #[test]
    fn each_group_enumerates_its_members() {
        let src = from_vec(vec![1.0, 1.0, 2.0]);
        let mut g = group_by_eq(Some(src), Some(|x: &f64| *x), None::<DeepEqual>).unwrap();
        assert!(g.advance());
        let mut first = g.current().unwrap();
        assert_eq!(to_vec(&mut first), vec![1.0, 1.0]);
    }

    #[test]
    fn empty_source_yields_no_groups() {
        let mut g = group_by(Some(empty::<i32>()), Some(|x: &i32| *x)).unwrap();
        assert!(!g.advance());
        assert_eq!(
            group_by(None::<Empty<i32>>, Some(|x: &i32| *x))
                .err()
                .map(|e| e.to_string()),
            Some("source is nil".to_string())
        );
    }
}
