//! Join and GroupJoin: equi-joins that build a lookup over the inner
//! sequence on the first `advance()` and stream the outer sequence against it.

use std::hash::Hash;

use enumq_core::compare::{Equaler, HashEqual};
use enumq_core::error::{require, Error, Result};
use enumq_core::source::SliceEnumerator;
use enumq_core::Enumerator;

use super::lookup::{same, Lookup};

/// Keys, result selector and strategy shared by both join shapes.
struct JoinSpec<OK, IK, R, Q> {
    outer_key: OK,
    inner_key: IK,
    result: R,
    equaler: Option<Q>,
}

fn spec<OK, IK, R, Q>(
    outer_key: Option<OK>,
    inner_key: Option<IK>,
    result: Option<R>,
    equaler: Q,
) -> Result<JoinSpec<OK, IK, R, Q>> {
    Ok(JoinSpec {
        outer_key: require(outer_key, Error::NilSelector)?,
        inner_key: require(inner_key, Error::NilSelector)?,
        result: require(result, Error::NilSelector)?,
        equaler: Some(equaler),
    })
}

/// Inner equi-join: one output per matching (outer, inner) pair, in outer
/// order and then inner order.
pub struct Join<O, I, OK, IK, R, Q, K>
where
    O: Enumerator,
    I: Enumerator,
{
    outer: O,
    inner: I,
    spec: JoinSpec<OK, IK, R, Q>,
    lookup: Option<Lookup<K, I::Item, Q>>,
    outer_item: Option<<O as Enumerator>::Item>,
    group: Option<usize>,
    next: usize,
    matched: Option<usize>,
}

impl<O, I, OK, IK, R, Q, K> Join<O, I, OK, IK, R, Q, K>
where
    O: Enumerator,
    I: Enumerator,
{
    fn new(outer: O, inner: I, spec: JoinSpec<OK, IK, R, Q>) -> Self {
        Self {
            outer,
            inner,
            spec,
            lookup: None,
            outer_item: None,
            group: None,
            next: 0,
            matched: None,
        }
    }
}

/// Join on hashed keys.
pub fn join<O, I, OK, IK, R, K, T>(
    outer: Option<O>,
    inner: Option<I>,
    outer_key: Option<OK>,
    inner_key: Option<IK>,
    result: Option<R>,
) -> Result<Join<O, I, OK, IK, R, HashEqual, K>>
where
    O: Enumerator,
    I: Enumerator,
    OK: Fn(&O::Item) -> K,
    IK: Fn(&I::Item) -> K,
    R: Fn(O::Item, I::Item) -> T,
    K: Hash + Eq + Clone,
{
    let outer = require(outer, Error::NilSource)?;
    let inner = require(inner, Error::NilSource)?;
    let spec = spec(outer_key, inner_key, result, HashEqual)?;
    Ok(Join::new(outer, inner, spec))
}

/// Join on keys compared by an equality strategy; `None` means structural
/// equality.
pub fn join_eq<O, I, OK, IK, R, K, T, Q>(
    outer: Option<O>,
    inner: Option<I>,
    outer_key: Option<OK>,
    inner_key: Option<IK>,
    result: Option<R>,
    equaler: Option<Q>,
) -> Result<Join<O, I, OK, IK, R, Option<Q>, K>>
where
    O: Enumerator,
    I: Enumerator,
    OK: Fn(&O::Item) -> K,
    IK: Fn(&I::Item) -> K,
    R: Fn(O::Item, I::Item) -> T,
    K: PartialEq + Clone,
    Q: Equaler<K>,
{
    let outer = require(outer, Error::NilSource)?;
    let inner = require(inner, Error::NilSource)?;
    let spec = spec(outer_key, inner_key, result, equaler)?;
    Ok(Join::new(outer, inner, spec))
}

impl<O, I, OK, IK, R, Q, K, T> Enumerator for Join<O, I, OK, IK, R, Q, K>
where
    O: Enumerator,
    O::Item: Clone,
    I: Enumerator,
    I::Item: Clone,
    OK: Fn(&O::Item) -> K,
    IK: Fn(&I::Item) -> K,
    R: Fn(O::Item, I::Item) -> T,
    Q: Equaler<K>,
    K: Clone,
{
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.lookup.is_none() {
            let Some(equaler) = self.spec.equaler.take() else {
                return false;
            };
            let lookup = Lookup::build(&mut self.inner, &self.spec.inner_key, same, equaler);
            self.lookup = Some(lookup);
        }
        let Some(lookup) = self.lookup.as_ref() else {
            return false;
        };
        loop {
            if let Some(g) = self.group.and_then(|g| lookup.group_at(g)) {
                if self.next < g.len() {
                    self.matched = Some(self.next);
                    self.next += 1;
                    return true;
                }
            }
            self.matched = None;
            if !self.outer.advance() {
                self.outer_item = None;
                self.group = None;
                return false;
            }
            self.outer_item = self.outer.current();
            self.group = self
                .outer_item
                .as_ref()
                .and_then(|o| lookup.position(&(self.spec.outer_key)(o)));
            self.next = 0;
        }
    }

    fn current(&self) -> Option<T> {
        let outer = self.outer_item.clone()?;
        let group = self.lookup.as_ref()?.group_at(self.group?)?;
        let inner = group.elements().get(self.matched?)?.clone();
        Some((self.spec.result)(outer, inner))
    }

    fn restart(&mut self) {
        self.outer.restart();
        self.outer_item = None;
        self.group = None;
        self.next = 0;
        self.matched = None;
    }
}

/// Outer-keyed group join: one output per outer element, paired with a cursor
/// over its (possibly empty) inner matches.
pub struct GroupJoin<O, I, OK, IK, R, Q, K>
where
    O: Enumerator,
    I: Enumerator,
{
    outer: O,
    inner: I,
    spec: JoinSpec<OK, IK, R, Q>,
    lookup: Option<Lookup<K, I::Item, Q>>,
    outer_item: Option<<O as Enumerator>::Item>,
}

pub fn group_join<O, I, OK, IK, R, K, T>(
    outer: Option<O>,
    inner: Option<I>,
    outer_key: Option<OK>,
    inner_key: Option<IK>,
    result: Option<R>,
) -> Result<GroupJoin<O, I, OK, IK, R, HashEqual, K>>
where
    O: Enumerator,
    I: Enumerator,
    OK: Fn(&O::Item) -> K,
    IK: Fn(&I::Item) -> K,
    R: Fn(O::Item, SliceEnumerator<I::Item>) -> T,
    K: Hash + Eq + Clone,
{
    let outer = require(outer, Error::NilSource)?;
    let inner = require(inner, Error::NilSource)?;
    Ok(GroupJoin {
        outer,
        inner,
        spec: spec(outer_key, inner_key, result, HashEqual)?,
        lookup: None,
        outer_item: None,
    })
}

pub fn group_join_eq<O, I, OK, IK, R, K, T, Q>(
    outer: Option<O>,
    inner: Option<I>,
    outer_key: Option<OK>,
    inner_key: Option<IK>,
    result: Option<R>,
    equaler: Option<Q>,
) -> Result<GroupJoin<O, I, OK, IK, R, Option<Q>, K>>
where
    O: Enumerator,
    I: Enumerator,
    OK: Fn(&O::Item) -> K,
    IK: Fn(&I::Item) -> K,
    R: Fn(O::Item, SliceEnumerator<I::Item>) -> T,
    K: PartialEq + Clone,
    Q: Equaler<K>,
{
    let outer = require(outer, Error::NilSource)?;
    let inner = require(inner, Error::NilSource)?;
    Ok(GroupJoin {
        outer,
        inner,
        spec: spec(outer_key, inner_key, result, equaler)?,
        lookup: None,
        outer_item: None,
    })
}

impl<O, I, OK, IK, R, Q, K, T> Enumerator for GroupJoin<O, I, OK, IK, R, Q, K>
where
    O: Enumerator,
    O::Item: Clone,
    I: Enumerator,
    OK: Fn(&O::Item) -> K,
    IK: Fn(&I::Item) -> K,
    R: Fn(O::Item, SliceEnumerator<I::Item>) -> T,
    Q: Equaler<K>,
    K: Clone,
{
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.lookup.is_none() {
            let Some(equaler) = self.spec.equaler.take() else {
                return false;
            };
            let lookup = Lookup::build(&mut self.inner, &self.spec.inner_key, same, equaler);
            self.lookup = Some(lookup);
        }
        if self.outer.advance() {
            self.outer_item = self.outer.current();
            true
        } else {
            self.outer_item = None;
            false
        }
    }

    fn current(&self) -> Option<T> {
        let outer = self.outer_item.clone()?;
        let lookup = self.lookup.as_ref()?;
        let matches = match lookup.get(&(self.spec.outer_key)(&outer)) {
            Some(g) => g.enumerator(),
            None => SliceEnumerator::new(Vec::new()),
        };
        Some((self.spec.result)(outer, matches))
    }

    fn restart(&mut self) {
        self.outer.restart();
        self.outer_item = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumq_core::prelude::*;

    // (name, id) for people, (name, owner id) for pets.
    type Row = (&'static str, u32);

    fn people() -> SliceEnumerator<Row> {
        from_vec(vec![("Hedlund", 1), ("Adams", 2), ("Weiss", 3)])
    }

    fn pets() -> SliceEnumerator<Row> {
        from_vec(vec![
            ("Barley", 3),
            ("Boots", 1),
            ("Whiskers", 3),
            ("Daisy", 1),
        ])
    }

    fn id(p: &Row) -> u32 {
        p.1
    }

    fn strings(items: &[&str]) -> SliceEnumerator<String> {
        from_vec(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn join_pairs_outer_then_inner_order() {
        let mut j = join(
            Some(people()),
            Some(pets()),
            Some(id),
            Some(id),
            Some(|p: Row, pet: Row| format!("{} - {}", p.0, pet.0)),
        )
        .unwrap();
        let expected = vec![
            "Hedlund - Boots",
            "Hedlund - Daisy",
            "Weiss - Barley",
            "Weiss - Whiskers",
        ];
        assert_eq!(to_vec(&mut j), expected);
        j.restart();
        assert_eq!(to_vec(&mut j), expected);
    }

    #[test]
    fn join_with_strategy() {
        let mut j = join_eq(
            Some(strings(&["a", "B"])),
            Some(strings(&["A", "b", "a"])),
            Some(|s: &String| s.clone()),
            Some(|s: &String| s.clone()),
            Some(|o: String, i: String| o + &i),
            Some(CaseInsensitive),
        )
        .unwrap();
        assert_eq!(to_vec(&mut j), vec!["aA", "aa", "Bb"]);
    }

    #[test]
    fn group_join_keeps_unmatched_outer_elements() {
        let mut gj = group_join(
            Some(people()),
            Some(pets()),
            Some(id),
            Some(id),
            Some(|p: Row, mut matches: SliceEnumerator<Row>| {
                let names: Vec<String> = to_vec(&mut matches)
                    .into_iter()
                    .map(|m| m.0.to_string())
                    .collect();
                (p.1, names)
            }),
        )
        .unwrap();
        assert_eq!(
            to_vec(&mut gj),
            vec![
                (1, vec!["Boots".to_string(), "Daisy".to_string()]),
                (2, vec![]),
                (3, vec!["Barley".to_string(), "Whiskers".to_string()]),
            ]
        );
    }

    #[test]
    fn nil_arguments() {
        let r = join(
            Some(people()),
            None::<SliceEnumerator<Row>>,
            Some(id),
            Some(id),
            Some(|_: Row, _: Row| ()),
        );
        assert_eq!(r.err(), Some(Error::NilSource));

        let r = group_join_eq(
            Some(people()),
            Some(pets()),
            Some(id),
            None::<fn(&Row) -> u32>,
            Some(|_: Row, _: SliceEnumerator<Row>| ()),
            None::<DeepEqual>,
        );
        assert_eq!(r.err(), Some(Error::NilSelector));
    }
}
