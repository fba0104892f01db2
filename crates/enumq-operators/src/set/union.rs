//! Union: Distinct over the first sequence, then the second sequence's keys
//! not yet emitted.

use std::hash::Hash;

use enumq_core::compare::{Equaler, HashEqual, Lesser};
use enumq_core::error::{require, Error, Result};
use enumq_core::Enumerator;

use super::keyset::{EqualerSet, KeySet, LesserSet};
use super::{identity, Identity};

pub struct UnionBy<A, B, F, S> {
    first: A,
    second: B,
    key: F,
    seen: S,
    on_second: bool,
}

/// Union of whole elements, with no key selector.
pub type Union<A, B, S> = UnionBy<A, B, Identity<<A as Enumerator>::Item>, S>;

fn build<A, B, F, S>(
    first: Option<A>,
    second: Option<B>,
    key: F,
    seen: S,
) -> Result<UnionBy<A, B, F, S>> {
    let first = require(first, Error::NilSource)?;
    let second = require(second, Error::NilSource)?;
    Ok(UnionBy {
        first,
        second,
        key,
        seen,
        on_second: false,
    })
}

pub fn union<A, B>(
    first: Option<A>,
    second: Option<B>,
) -> Result<Union<A, B, EqualerSet<A::Item, HashEqual>>>
where
    A: Enumerator,
    B: Enumerator<Item = A::Item>,
    A::Item: Hash + Eq + Clone,
{
    let key = identity as Identity<A::Item>;
    build(first, second, key, EqualerSet::new(HashEqual))
}

pub fn union_eq<A, B, Q>(
    first: Option<A>,
    second: Option<B>,
    equaler: Option<Q>,
) -> Result<Union<A, B, EqualerSet<A::Item, Option<Q>>>>
where
    A: Enumerator,
    B: Enumerator<Item = A::Item>,
    A::Item: PartialEq + Clone,
    Q: Equaler<A::Item>,
{
    let key = identity as Identity<A::Item>;
    build(first, second, key, EqualerSet::new(equaler))
}

pub fn union_cmp<A, B, L>(
    first: Option<A>,
    second: Option<B>,
    lesser: Option<L>,
) -> Result<Union<A, B, LesserSet<A::Item, L>>>
where
    A: Enumerator,
    B: Enumerator<Item = A::Item>,
    A::Item: Clone,
    L: Lesser<A::Item>,
{
    let first = require(first, Error::NilSource)?;
    let second = require(second, Error::NilSource)?;
    let lesser = require(lesser, Error::NilComparer)?;
    let key = identity as Identity<A::Item>;
    build(Some(first), Some(second), key, LesserSet::new(lesser))
}

/// Union by a key selector applied to both sides.
pub fn union_by<A, B, F, K>(
    first: Option<A>,
    second: Option<B>,
    key: Option<F>,
) -> Result<UnionBy<A, B, F, EqualerSet<K, HashEqual>>>
where
    A: Enumerator,
    B: Enumerator<Item = A::Item>,
    F: Fn(&A::Item) -> K,
    K: Hash + Eq,
{
    let first = require(first, Error::NilSource)?;
    let second = require(second, Error::NilSource)?;
    let key = require(key, Error::NilSelector)?;
    build(Some(first), Some(second), key, EqualerSet::new(HashEqual))
}

impl<A, B, F, K, S> Enumerator for UnionBy<A, B, F, S>
where
    A: Enumerator,
    B: Enumerator<Item = A::Item>,
    F: Fn(&A::Item) -> K,
    S: KeySet<K>,
{
    type Item = A::Item;

    fn advance(&mut self) -> bool {
        if !self.on_second {
            while self.first.advance() {
                if let Some(item) = self.first.current() {
                    if self.seen.insert((self.key)(&item)) {
                        return true;
                    }
                }
            }
            self.on_second = true;
        }
        while self.second.advance() {
            if let Some(item) = self.second.current() {
                if self.seen.insert((self.key)(&item)) {
                    return true;
                }
            }
        }
        false
    }

    fn current(&self) -> Option<A::Item> {
        if self.on_second {
            self.second.current()
        } else {
            self.first.current()
        }
    }

    fn restart(&mut self) {
        self.first.restart();
        self.second.restart();
        self.seen.clear();
        self.on_second = false;
    }
}
