//! Intersect and Except: the second sequence is buffered into a key-set on
//! the first `advance()`, then the first sequence is streamed against it.

use std::hash::Hash;

use enumq_core::compare::{Equaler, HashEqual, Lesser};
use enumq_core::error::{require, Error, Result};
use enumq_core::Enumerator;

use super::keyset::{EqualerSet, KeySet, LesserSet};
use super::{identity, Identity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Keep keys present in the second sequence; each is consumed once.
    Intersect,
    /// Keep keys absent from the second sequence; emitted keys join the set.
    Except,
}

/// Shared engine behind [`intersect`] and [`except`] and their variants.
pub struct SetFilter<A, B, F, S> {
    first: A,
    second: B,
    key: F,
    set: S,
    built: bool,
    mode: Mode,
}

pub type IntersectBy<A, B, F, S> = SetFilter<A, B, F, S>;
pub type ExceptBy<A, B, F, S> = SetFilter<A, B, F, S>;

type Identical<A, B, S> = SetFilter<A, B, Identity<<A as Enumerator>::Item>, S>;

fn build<A, B, F, S>(
    first: Option<A>,
    second: Option<B>,
    key: Option<F>,
    set: Option<S>,
    mode: Mode,
) -> Result<SetFilter<A, B, F, S>> {
    let first = require(first, Error::NilSource)?;
    let second = require(second, Error::NilSource)?;
    let key = require(key, Error::NilSelector)?;
    let set = require(set, Error::NilComparer)?;
    Ok(SetFilter {
        first,
        second,
        key,
        set,
        built: false,
        mode,
    })
}

macro_rules! set_filter_family {
    ($mode:ident, $plain:ident, $eq:ident, $cmp:ident, $by:ident) => {
        pub fn $plain<A, B>(
            first: Option<A>,
            second: Option<B>,
        ) -> Result<Identical<A, B, EqualerSet<A::Item, HashEqual>>>
        where
            A: Enumerator,
            B: Enumerator<Item = A::Item>,
            A::Item: Hash + Eq + Clone,
        {
            let key = Some(identity as Identity<A::Item>);
            let set = EqualerSet::new(HashEqual);
            build(first, second, key, Some(set), Mode::$mode)
        }

        /// `None` for the equality strategy means structural equality.
        pub fn $eq<A, B, Q>(
            first: Option<A>,
            second: Option<B>,
            equaler: Option<Q>,
        ) -> Result<Identical<A, B, EqualerSet<A::Item, Option<Q>>>>
        where
            A: Enumerator,
            B: Enumerator<Item = A::Item>,
            A::Item: PartialEq + Clone,
            Q: Equaler<A::Item>,
        {
            let key = Some(identity as Identity<A::Item>);
            let set = EqualerSet::new(equaler);
            build(first, second, key, Some(set), Mode::$mode)
        }

        pub fn $cmp<A, B, L>(
            first: Option<A>,
            second: Option<B>,
            lesser: Option<L>,
        ) -> Result<Identical<A, B, LesserSet<A::Item, L>>>
        where
            A: Enumerator,
            B: Enumerator<Item = A::Item>,
            A::Item: Clone,
            L: Lesser<A::Item>,
        {
            let key = Some(identity as Identity<A::Item>);
            let set = lesser.map(LesserSet::new);
            build(first, second, key, set, Mode::$mode)
        }

        /// Key selector applied to elements of both sequences.
        pub fn $by<A, B, F, K>(
            first: Option<A>,
            second: Option<B>,
            key: Option<F>,
        ) -> Result<SetFilter<A, B, F, EqualerSet<K, HashEqual>>>
        where
            A: Enumerator,
            B: Enumerator<Item = A::Item>,
            F: Fn(&A::Item) -> K,
            K: Hash + Eq,
        {
            let set = EqualerSet::new(HashEqual);
            build(first, second, key, Some(set), Mode::$mode)
        }
    };
}

set_filter_family!(
    Intersect,
    intersect,
    intersect_eq,
    intersect_cmp,
    intersect_by
);
set_filter_family!(Except, except, except_eq, except_cmp, except_by);

impl<A, B, F, K, S> SetFilter<A, B, F, S>
where
    A: Enumerator,
    B: Enumerator<Item = A::Item>,
    F: Fn(&A::Item) -> K,
    S: KeySet<K>,
{
    fn build_set(&mut self) {
        while self.second.advance() {
            if let Some(item) = self.second.current() {
                self.set.insert((self.key)(&item));
            }
        }
        self.built = true;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            mode = ?self.mode,
            keys = self.set.len(),
            "set operator buffered second sequence"
        );
    }
}

impl<A, B, F, K, S> Enumerator for SetFilter<A, B, F, S>
where
    A: Enumerator,
    B: Enumerator<Item = A::Item>,
    F: Fn(&A::Item) -> K,
    S: KeySet<K>,
{
    type Item = A::Item;

    fn advance(&mut self) -> bool {
        if !self.built {
            self.build_set();
        }
        while self.first.advance() {
            let Some(item) = self.first.current() else {
                continue;
            };
            let key = (self.key)(&item);
            let keep = match self.mode {
                Mode::Intersect => self.set.remove(&key),
                Mode::Except => self.set.insert(key),
            };
            if keep {
                return true;
            }
        }
        false
    }

    fn current(&self) -> Option<A::Item> {
        self.first.current()
    }

    fn restart(&mut self) {
        self.first.restart();
        self.second.restart();
        self.set.clear();
        self.built = false;
    }
}
