//! SelectMany: flatten one enumerator per source element.

use enumq_core::error::{require, Error, Result};
use enumq_core::Enumerator;

pub struct SelectMany<E, F, I> {
    source: E,
    selector: F,
    inner: Option<I>,
}

/// Map each element to an enumerator and yield the inner elements in order.
pub fn select_many<E, F, I>(source: Option<E>, selector: Option<F>) -> Result<SelectMany<E, F, I>>
where
    E: Enumerator,
    F: Fn(E::Item) -> I,
    I: Enumerator,
{
    let source = require(source, Error::NilSource)?;
    let selector = require(selector, Error::NilSelector)?;
    Ok(SelectMany {
        source,
        selector,
        inner: None,
    })
}

impl<E, F, I> Enumerator for SelectMany<E, F, I>
where
    E: Enumerator,
    F: Fn(E::Item) -> I,
    I: Enumerator,
{
    type Item = I::Item;

    fn advance(&mut self) -> bool {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if inner.advance() {
                    return true;
                }
            }
            if !self.source.advance() {
                self.inner = None;
                return false;
            }
            self.inner = self.source.current().map(&self.selector);
        }
    }

    fn current(&self) -> Option<I::Item> {
        self.inner.as_ref()?.current()
    }

    fn restart(&mut self) {
        self.source.restart();
        self.inner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumq_core::prelude::*;

    #[test]
    fn flattens_and_skips_empty_inners() {
        let mut m = select_many(
            Some(from_vec(vec![0i64, 2, 1])),
            Some(|n: i64| range(n * 10, n).unwrap()),
        )
        .unwrap();
        assert_eq!(to_vec(&mut m), vec![20, 21, 10]);
        m.restart();
        assert_eq!(to_vec(&mut m), vec![20, 21, 10]);
    }
}
