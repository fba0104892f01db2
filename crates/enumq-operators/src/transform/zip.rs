//! Zip: pair elements step by step, stopping at the shorter side.

use enumq_core::error::{require, Error, Result};
use enumq_core::Enumerator;

pub struct Zip<A, B, F> {
    first: A,
    second: B,
    selector: F,
}

/// Combine `first` and `second` element-wise with `selector`. No padding:
/// enumeration ends as soon as either side is exhausted, and the second side
/// is not pulled once the first has run out.
pub fn zip<A, B, F, R>(
    first: Option<A>,
    second: Option<B>,
    selector: Option<F>,
) -> Result<Zip<A, B, F>>
where
    A: Enumerator,
    B: Enumerator,
    F: Fn(A::Item, B::Item) -> R,
{
    let first = require(first, Error::NilSource)?;
    let second = require(second, Error::NilSource)?;
    let selector = require(selector, Error::NilSelector)?;
    Ok(Zip {
        first,
        second,
        selector,
    })
}

impl<A, B, F, R> Enumerator for Zip<A, B, F>
where
    A: Enumerator,
    B: Enumerator,
    F: Fn(A::Item, B::Item) -> R,
{
    type Item = R;

    fn advance(&mut self) -> bool {
        self.first.advance() && self.second.advance()
    }

    fn current(&self) -> Option<R> {
        let a = self.first.current()?;
        let b = self.second.current()?;
        Some((self.selector)(a, b))
    }

    fn restart(&mut self) {
        self.first.restart();
        self.second.restart();
    }
}
