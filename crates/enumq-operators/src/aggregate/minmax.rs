//! Min/Max reducers. A running extreme is replaced only by a strictly better
//! key, so the first element reaching the extreme wins and an incomparable
//! value (NaN) never displaces a number.

use enumq_core::compare::{Lesser, Order};
use enumq_core::error::{require, Error, Result};
use enumq_core::Enumerator;

#[derive(Clone, Copy)]
enum Want {
    Min,
    Max,
}

fn extreme<E, F, K, L>(source: &mut E, key: F, lesser: L, want: Want) -> Result<(E::Item, K)>
where
    E: Enumerator,
    F: Fn(&E::Item) -> K,
    L: Lesser<K>,
{
    let mut best: Option<(E::Item, K)> = None;
    while source.advance() {
        let Some(item) = source.current() else {
            continue;
        };
        let k = key(&item);
        let better = match &best {
            None => true,
            Some((_, b)) => match want {
                Want::Min => lesser.less(&k, b),
                Want::Max => lesser.less(b, &k),
            },
        };
        if better {
            best = Some((item, k));
        }
    }
    best.ok_or(Error::EmptySource)
}

fn checked<E, F, L>(
    source: Option<E>,
    selector: Option<F>,
    lesser: Option<L>,
) -> Result<(E, F, L)> {
    let source = require(source, Error::NilSource)?;
    let selector = require(selector, Error::NilSelector)?;
    let lesser = require(lesser, Error::NilComparer)?;
    Ok((source, selector, lesser))
}

/// Smallest projected key.
pub fn min<E, F, K, L>(source: Option<E>, selector: Option<F>, lesser: Option<L>) -> Result<K>
where
    E: Enumerator,
    F: Fn(&E::Item) -> K,
    L: Lesser<K>,
{
    let (mut source, selector, lesser) = checked(source, selector, lesser)?;
    extreme(&mut source, selector, lesser, Want::Min).map(|(_, k)| k)
}

/// Largest projected key.
pub fn max<E, F, K, L>(source: Option<E>, selector: Option<F>, lesser: Option<L>) -> Result<K>
where
    E: Enumerator,
    F: Fn(&E::Item) -> K,
    L: Lesser<K>,
{
    let (mut source, selector, lesser) = checked(source, selector, lesser)?;
    extreme(&mut source, selector, lesser, Want::Max).map(|(_, k)| k)
}

/// Element with the smallest projected key.
pub fn min_el<E, F, K, L>(
    source: Option<E>,
    selector: Option<F>,
    lesser: Option<L>,
) -> Result<E::Item>
where
    E: Enumerator,
    F: Fn(&E::Item) -> K,
    L: Lesser<K>,
{
    let (mut source, selector, lesser) = checked(source, selector, lesser)?;
    extreme(&mut source, selector, lesser, Want::Min).map(|(el, _)| el)
}

/// Element with the largest projected key.
pub fn max_el<E, F, K, L>(
    source: Option<E>,
    selector: Option<F>,
    lesser: Option<L>,
) -> Result<E::Item>
where
    E: Enumerator,
    F: Fn(&E::Item) -> K,
    L: Lesser<K>,
{
    let (mut source, selector, lesser) = checked(source, selector, lesser)?;
    extreme(&mut source, selector, lesser, Want::Max).map(|(el, _)| el)
}

fn by_value<T: Clone>(item: &T) -> T {
    item.clone()
}

/// Smallest element under its own ordering.
pub fn min_value<E>(source: Option<E>) -> Result<E::Item>
where
    E: Enumerator,
    E::Item: PartialOrd + Clone,
{
    let mut source = require(source, Error::NilSource)?;
    extreme(&mut source, by_value, Order, Want::Min).map(|(el, _)| el)
}

/// Largest element under its own ordering.
pub fn max_value<E>(source: Option<E>) -> Result<E::Item>
where
    E: Enumerator,
    E::Item: PartialOrd + Clone,
{
    let mut source = require(source, Error::NilSource)?;
    extreme(&mut source, by_value, Order, Want::Max).map(|(el, _)| el)
}
