//! Sum and Average over native numeric arithmetic.
//!
//! No overflow guard: floats follow IEEE 754 (NaN propagates, overflow is
//! infinite) and integers behave as their `+` does.

use num_traits::{ToPrimitive, Zero};

use enumq_core::error::{require, Error, Result};
use enumq_core::Enumerator;

fn accumulate<E, F, N>(source: &mut E, selector: F) -> N
where
    E: Enumerator,
    F: Fn(E::Item) -> N,
    N: Zero,
{
    let mut total = N::zero();
    while source.advance() {
        if let Some(item) = source.current() {
            total = total + selector(item);
        }
    }
    total
}

/// Sum of projected values; an empty sequence sums to zero.
pub fn sum<E, F, N>(source: Option<E>, selector: Option<F>) -> Result<N>
where
    E: Enumerator,
    F: Fn(E::Item) -> N,
    N: Zero,
{
    let mut source = require(source, Error::NilSource)?;
    let selector = require(selector, Error::NilSelector)?;
    Ok(accumulate(&mut source, selector))
}

pub fn sum_value<E>(source: Option<E>) -> Result<E::Item>
where
    E: Enumerator,
    E::Item: Zero,
{
    let mut source = require(source, Error::NilSource)?;
    Ok(accumulate(&mut source, |x| x))
}

fn mean<E, F, N>(source: &mut E, selector: F) -> Result<f64>
where
    E: Enumerator,
    F: Fn(E::Item) -> N,
    N: ToPrimitive,
{
    let mut total = 0.0_f64;
    let mut count = 0_u64;
    while source.advance() {
        if let Some(item) = source.current() {
            total += selector(item).to_f64().unwrap_or(f64::NAN);
            count += 1;
        }
    }
    if count == 0 {
        return Err(Error::EmptySource);
    }
    Ok(total / count as f64)
}

/// Arithmetic mean of projected values, accumulated in `f64`.
pub fn average<E, F, N>(source: Option<E>, selector: Option<F>) -> Result<f64>
where
    E: Enumerator,
    F: Fn(E::Item) -> N,
    N: ToPrimitive,
{
    let mut source = require(source, Error::NilSource)?;
    let selector = require(selector, Error::NilSelector)?;
    mean(&mut source, selector)
}

pub fn average_value<E>(source: Option<E>) -> Result<f64>
where
    E: Enumerator,
    E::Item: ToPrimitive,
{
    let mut source = require(source, Error::NilSource)?;
    mean(&mut source, |x| x)
}
