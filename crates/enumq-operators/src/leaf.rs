//! Thin terminal and edge operators.

use enumq_core::compare::{DeepEqual, Equaler};
use enumq_core::enumerator;
use enumq_core::error::{require, Error, Result};
use enumq_core::source::SliceEnumerator;
use enumq_core::Enumerator;

use crate::transform::{concat, Concat};

pub fn count<E: Enumerator>(source: Option<E>) -> Result<usize> {
    let mut source = require(source, Error::NilSource)?;
    let mut n = 0;
    while source.advance() {
        n += 1;
    }
    Ok(n)
}

/// Number of elements satisfying `predicate`.
pub fn count_by<E, P>(source: Option<E>, predicate: Option<P>) -> Result<usize>
where
    E: Enumerator,
    P: Fn(&E::Item) -> bool,
{
    let mut source = require(source, Error::NilSource)?;
    let predicate = require(predicate, Error::NilPredicate)?;
    let mut n = 0;
    while source.advance() {
        if source.current().map_or(false, |x| predicate(&x)) {
            n += 1;
        }
    }
    Ok(n)
}

pub fn contains<E>(source: Option<E>, value: &E::Item) -> Result<bool>
where
    E: Enumerator,
    E::Item: PartialEq,
{
    contains_eq(source, value, None::<DeepEqual>)
}

/// Membership under an equality strategy; `None` means structural equality.
pub fn contains_eq<E, Q>(source: Option<E>, value: &E::Item, equaler: Option<Q>) -> Result<bool>
where
    E: Enumerator,
    E::Item: PartialEq,
    Q: Equaler<E::Item>,
{
    let mut source = require(source, Error::NilSource)?;
    while source.advance() {
        if source.current().map_or(false, |x| equaler.equal(&x, value)) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// `source` followed by `element`.
pub fn append<E: Enumerator>(
    source: Option<E>,
    element: E::Item,
) -> Result<Concat<E, SliceEnumerator<E::Item>>>
where
    E::Item: Clone,
{
    concat(source, Some(SliceEnumerator::new(vec![element])))
}

/// `element` followed by `source`.
pub fn prepend<E: Enumerator>(
    source: Option<E>,
    element: E::Item,
) -> Result<Concat<SliceEnumerator<E::Item>, E>>
where
    E::Item: Clone,
{
    concat(Some(SliceEnumerator::new(vec![element])), source)
}

/// Same length and pairwise equal elements.
pub fn sequence_equal<A, B>(first: Option<A>, second: Option<B>) -> Result<bool>
where
    A: Enumerator,
    B: Enumerator<Item = A::Item>,
    A::Item: PartialEq,
{
    sequence_equal_eq(first, second, None::<DeepEqual>)
}

pub fn sequence_equal_eq<A, B, Q>(
    first: Option<A>,
    second: Option<B>,
    equaler: Option<Q>,
) -> Result<bool>
where
    A: Enumerator,
    B: Enumerator<Item = A::Item>,
    A::Item: PartialEq,
    Q: Equaler<A::Item>,
{
    let mut first = require(first, Error::NilSource)?;
    let mut second = require(second, Error::NilSource)?;
    loop {
        match (first.advance(), second.advance()) {
            (false, false) => return Ok(true),
            (true, true) => {
                let same = match (first.current(), second.current()) {
                    (Some(x), Some(y)) => equaler.equal(&x, &y),
                    (None, None) => true,
                    _ => false,
                };
                if !same {
                    return Ok(false);
                }
            }
            _ => return Ok(false),
        }
    }
}

/// Remaining elements of `source`, collected.
pub fn to_vec<E: Enumerator>(source: Option<E>) -> Result<Vec<E::Item>> {
    let mut source = require(source, Error::NilSource)?;
    Ok(enumerator::to_vec(&mut source))
}
