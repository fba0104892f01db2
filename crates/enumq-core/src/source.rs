//! Source adapters: the leaves of every pipeline.
//!
//! All sources here are restartable and replay the same elements in the same
//! order after `restart()`. Generators validate their count when constructed,
//! not when enumerated.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::enumerator::Enumerator;
use crate::error::{Error, Result};

/// Cursor over a fixed in-memory sequence.
///
/// Cloning yields an independent cursor over the same buffer.
#[derive(Debug)]
pub struct SliceEnumerator<T> {
    items: Arc<[T]>,
    // Index of the element under the cursor; `None` before the first advance.
    idx: Option<usize>,
}

impl<T> SliceEnumerator<T> {
    pub fn new(items: impl Into<Arc<[T]>>) -> Self {
        Self {
            items: items.into(),
            idx: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The buffer this cursor walks.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Clone for SliceEnumerator<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            idx: None,
        }
    }
}

impl<T: Clone> Enumerator for SliceEnumerator<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        let next = self.idx.map_or(0, |i| i.saturating_add(1));
        if next < self.items.len() {
            self.idx = Some(next);
            true
        } else {
            self.idx = Some(self.items.len());
            false
        }
    }

    fn current(&self) -> Option<T> {
        self.idx.and_then(|i| self.items.get(i)).cloned()
    }

    fn restart(&mut self) {
        self.idx = None;
    }
}

/// Build a source over owned elements.
pub fn from_vec<T>(items: Vec<T>) -> SliceEnumerator<T> {
    SliceEnumerator::new(items)
}

/// Build a source by copying a slice.
pub fn from_slice<T: Clone>(items: &[T]) -> SliceEnumerator<T> {
    SliceEnumerator::new(items.to_vec())
}

/// The empty sequence; its first `advance()` returns `false`.
#[derive(Debug)]
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

impl<T> Enumerator for Empty<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        false
    }

    fn current(&self) -> Option<T> {
        None
    }

    fn restart(&mut self) {}
}

/// `count` consecutive integers starting at `start`.
#[derive(Debug, Clone)]
pub struct Range {
    start: i64,
    count: i64,
    // Number of successful advances in this pass.
    pos: i64,
    exhausted: bool,
}

/// Generate `count` consecutive integers starting at `start`.
///
/// Fails with `SizeOutOfRange` if `count` is negative or if the last value
/// would not fit in an `i64`.
pub fn range(start: i64, count: i64) -> Result<Range> {
    if count < 0 {
        return Err(Error::SizeOutOfRange {
            what: "count",
            value: count,
        });
    }
    if count > 0 && start.checked_add(count - 1).is_none() {
        return Err(Error::SizeOutOfRange {
            what: "count",
            value: count,
        });
    }
    Ok(Range {
        start,
        count,
        pos: 0,
        exhausted: false,
    })
}

impl Enumerator for Range {
    type Item = i64;

    fn advance(&mut self) -> bool {
        if self.pos < self.count {
            self.pos += 1;
            true
        } else {
            self.exhausted = true;
            false
        }
    }

    fn current(&self) -> Option<i64> {
        if self.pos >= 1 && !self.exhausted {
            Some(self.start + (self.pos - 1))
        } else {
            None
        }
    }

    fn restart(&mut self) {
        self.pos = 0;
        self.exhausted = false;
    }
}

/// One value repeated a fixed number of times.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    count: i64,
    pos: i64,
    exhausted: bool,
}

/// Repeat `value` `count` times. A negative count is `SizeOutOfRange`.
pub fn repeat<T>(value: T, count: i64) -> Result<Repeat<T>> {
    if count < 0 {
        return Err(Error::SizeOutOfRange {
            what: "count",
            value: count,
        });
    }
    Ok(Repeat {
        value,
        count,
        pos: 0,
        exhausted: false,
    })
}

impl<T: Clone> Enumerator for Repeat<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.pos < self.count {
            self.pos += 1;
            true
        } else {
            self.exhausted = true;
            false
        }
    }

    fn current(&self) -> Option<T> {
        if self.pos >= 1 && !self.exhausted {
            Some(self.value.clone())
        } else {
            None
        }
    }

    fn restart(&mut self) {
        self.pos = 0;
        self.exhausted = false;
    }
}

/// Enumerator over a cloneable Rust iterator.
///
/// The original iterator is kept untouched; each pass walks a fresh clone of
/// it, which is what makes `restart()` possible.
#[derive(Debug, Clone)]
pub struct OnIter<I: Iterator> {
    origin: I,
    live: I,
    current: Option<I::Item>,
}

pub fn on_iter<I>(iter: I) -> OnIter<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    let origin = iter.into_iter();
    OnIter {
        live: origin.clone(),
        origin,
        current: None,
    }
}

impl<I> Enumerator for OnIter<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = I::Item;

    fn advance(&mut self) -> bool {
        self.current = self.live.next();
        self.current.is_some()
    }

    fn current(&self) -> Option<I::Item> {
        self.current.clone()
    }

    fn restart(&mut self) {
        self.live = self.origin.clone();
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerator::to_vec;

    #[test]
    fn slice_replays_after_restart() {
        let mut e = from_vec(vec![3, 1, 2]);
        assert_eq!(to_vec(&mut e), vec![3, 1, 2]);
        e.restart();
        assert_eq!(to_vec(&mut e), vec![3, 1, 2]);
    }

    #[test]
    fn cloned_slice_cursors_are_independent() {
        let mut a = from_vec(vec![1, 2, 3]);
        let mut b = a.clone();
        assert!(a.advance());
        assert!(a.advance());
        assert!(b.advance());
        assert_eq!(a.current(), Some(2));
        assert_eq!(b.current(), Some(1));
    }

    #[test]
    fn empty_never_advances() {
        let mut e = empty::<u8>();
        assert!(!e.advance());
        assert_eq!(e.current(), None);
    }

    #[test]
    fn range_counts_up() {
        let mut r = range(-2, 4).unwrap();
        assert_eq!(to_vec(&mut r), vec![-2, -1, 0, 1]);
        r.restart();
        assert_eq!(to_vec(&mut r), vec![-2, -1, 0, 1]);
    }

    #[test]
    fn range_rejects_bad_counts_eagerly() {
        assert_eq!(
            range(0, -1).unwrap_err(),
            Error::SizeOutOfRange {
                what: "count",
                value: -1
            }
        );
        assert!(range(i64::MAX, 2).is_err());
        assert!(range(i64::MAX, 1).is_ok());
        assert_eq!(to_vec(&mut range(5, 0).unwrap()), Vec::<i64>::new());
    }

    #[test]
    fn repeat_yields_value_count_times() {
        let mut r = repeat("x", 3).unwrap();
        assert_eq!(to_vec(&mut r), vec!["x", "x", "x"]);
        assert!(repeat(1, -5).is_err());
        assert_eq!(to_vec(&mut repeat(1, 0).unwrap()), Vec::<i32>::new());
    }

    #[test]
    fn on_iter_restarts_from_a_fresh_clone() {
        let mut e = on_iter((1..4).map(|x| x * 10));
        assert_eq!(to_vec(&mut e), vec![10, 20, 30]);
        e.restart();
        assert_eq!(to_vec(&mut e), vec![10, 20, 30]);
    }
}
