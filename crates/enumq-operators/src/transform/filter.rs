//! Where: skip elements failing a predicate.

use enumq_core::error::{require, Error, Result};
use enumq_core::Enumerator;

pub struct Filter<E, P> {
    source: E,
    predicate: P,
}

/// Keep only the elements of `source` for which `predicate` holds.
pub fn filter<E, P>(source: Option<E>, predicate: Option<P>) -> Result<Filter<E, P>>
where
    E: Enumerator,
    P: Fn(&E::Item) -> bool,
{
    let source = require(source, Error::NilSource)?;
    let predicate = require(predicate, Error::NilPredicate)?;
    Ok(Filter { source, predicate })
}

impl<E, P> Enumerator for Filter<E, P>
where
    E: Enumerator,
    P: Fn(&E::Item) -> bool,
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        while self.source.advance() {
            if let Some(item) = self.source.current() {
                if (self.predicate)(&item) {
                    return true;
                }
            }
        }
        false
    }

    fn current(&self) -> Option<E::Item> {
        self.source.current()
    }

    fn restart(&mut self) {
        self.source.restart()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumq_core::prelude::*;

    #[test]
    fn keeps_matching_elements() {
        let mut evens = filter(Some(range(1, 10).unwrap()), Some(|x: &i64| x % 2 == 0)).unwrap();
        assert_eq!(to_vec(&mut evens), vec![2, 4, 6, 8, 10]);
        evens.restart();
        assert_eq!(to_vec(&mut evens), vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn nil_predicate_is_rejected() {
        let r = filter(Some(empty::<i32>()), None::<fn(&i32) -> bool>);
        assert_eq!(r.err(), Some(Error::NilPredicate));
    }
}
