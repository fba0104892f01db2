//! Select: per-element projection, recomputed on every read.

use enumq_core::error::{require, Error, Result};
use enumq_core::Enumerator;

pub struct Select<E, F> {
    source: E,
    selector: F,
}

/// Project each element of `source` through `selector`.
pub fn select<E, F, R>(source: Option<E>, selector: Option<F>) -> Result<Select<E, F>>
where
    E: Enumerator,
    F: Fn(E::Item) -> R,
{
    let source = require(source, Error::NilSource)?;
    let selector = require(selector, Error::NilSelector)?;
    Ok(Select { source, selector })
}

impl<E, F, R> Enumerator for Select<E, F>
where
    E: Enumerator,
    F: Fn(E::Item) -> R,
{
    type Item = R;

    fn advance(&mut self) -> bool {
        self.source.advance()
    }

    fn current(&self) -> Option<R> {
        self.source.current().map(&self.selector)
    }

    fn restart(&mut self) {
        self.source.restart()
    }
}
