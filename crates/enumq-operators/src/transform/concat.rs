//! Concat: exhaust the first enumerator, then the second.

use enumq_core::error::{require, Error, Result};
use enumq_core::Enumerator;

pub struct Concat<A, B> {
    first: A,
    second: B,
    on_second: bool,
}

/// Yield all of `first` followed by all of `second`.
///
/// The two arguments must be independent instances.
pub fn concat<A, B>(first: Option<A>, second: Option<B>) -> Result<Concat<A, B>>
where
    A: Enumerator,
    B: Enumerator<Item = A::Item>,
{
    let first = require(first, Error::NilSource)?;
    let second = require(second, Error::NilSource)?;
    Ok(Concat {
        first,
        second,
        on_second: false,
    })
}

impl<A, B> Enumerator for Concat<A, B>
where
    A: Enumerator,
    B: Enumerator<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(&mut self) -> bool {
        if !self.on_second {
            if self.first.advance() {
                return true;
            }
            self.on_second = true;
        }
        self.second.advance()
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
        self.on_second = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumq_core::prelude::*;

    #[test]
    fn first_then_second() {
        let mut c = concat(Some(from_vec(vec![1, 2])), Some(from_vec(vec![3]))).unwrap();
        assert_eq!(to_vec(&mut c), vec![1, 2, 3]);
        c.restart();
        assert_eq!(to_vec(&mut c), vec![1, 2, 3]);
    }

    #[test]
    fn either_side_may_be_empty() {
        let mut c = concat(Some(empty::<u8>()), Some(from_vec(vec![9u8]))).unwrap();
        assert_eq!(to_vec(&mut c), vec![9]);
        let missing = concat(Some(empty::<u8>()), None::<Empty<u8>>);
        assert_eq!(missing.err(), Some(Error::NilSource));
    }
}
