//! Chunk: fixed-size slices of the source, pulled one chunk per `advance()`.

use enumq_core::error::{require, Error, Result};
use enumq_core::Enumerator;

pub struct Chunk<E: Enumerator> {
    source: E,
    size: usize,
    chunk: Option<Vec<E::Item>>,
}

/// Split `source` into chunks of `size` elements; the last chunk may be
/// shorter. A non-positive size is `SizeOutOfRange`.
pub fn chunk<E: Enumerator>(source: Option<E>, size: i64) -> Result<Chunk<E>> {
    let source = require(source, Error::NilSource)?;
    let out_of_range = Error::SizeOutOfRange {
        what: "size",
        value: size,
    };
    if size <= 0 {
        return Err(out_of_range);
    }
    let size = usize::try_from(size).map_err(|_| out_of_range)?;
    Ok(Chunk {
        source,
        size,
        chunk: None,
    })
}

impl<E> Enumerator for Chunk<E>
where
    E: Enumerator,
    E::Item: Clone,
{
    type Item = Vec<E::Item>;

    fn advance(&mut self) -> bool {
        // Capacity grows with the data, not with the requested size.
        let mut buf = Vec::new();
        while buf.len() < self.size && self.source.advance() {
            if let Some(item) = self.source.current() {
                buf.push(item);
            }
        }
        if buf.is_empty() {
            self.chunk = None;
            false
        } else {
            self.chunk = Some(buf);
            true
        }
    }

    fn current(&self) -> Option<Vec<E::Item>> {
        self.chunk.clone()
    }

    fn restart(&mut self) {
        self.source.restart();
        self.chunk = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumq_core::prelude::*;

    #[test]
    fn last_chunk_may_be_short() {
        let mut c = chunk(Some(from_vec(vec![1, 2, 3])), 2).unwrap();
        assert_eq!(to_vec(&mut c), vec![vec![1, 2], vec![3]]);
        c.restart();
        assert_eq!(to_vec(&mut c), vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn exact_multiple_and_empty() {
        let mut c = chunk(Some(range(1, 4).unwrap()), 2).unwrap();
        assert_eq!(to_vec(&mut c), vec![vec![1, 2], vec![3, 4]]);
        let mut none = chunk(Some(empty::<i32>()), 3).unwrap();
        assert!(!none.advance());
    }

    #[test]
    fn size_must_be_positive() {
        assert_eq!(
            chunk(Some(from_vec(vec![1])), 0).err(),
            Some(Error::SizeOutOfRange {
                what: "size",
                value: 0
            })
        );
        assert!(chunk(Some(from_vec(vec![1])), -3).is_err());
        assert_eq!(chunk(None::<Empty<i32>>, 2).err(), Some(Error::NilSource));
    }
}
