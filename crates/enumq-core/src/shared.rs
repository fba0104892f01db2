//! Aliased cursors and the `tee` split.
//!
//! A [`Shared`] handle lets several pipeline stages hold the *same*
//! enumerator instance. Every clone drives one cursor: advancing through any
//! handle moves it for all of them. Feeding two such handles to a binary
//! operator (concat, zip, union, join, ...) entangles the two sides and the
//! result is generally not what either side alone would produce.
//!
//! To relate a sequence to itself (adjacent pairs, self-joins), buffer it once
//! with [`tee`] and use the two independent cursors it returns.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::BufferConfig;
use crate::enumerator::{to_vec_with, Enumerator};
use crate::source::SliceEnumerator;

/// Reference-counted handle to one enumerator instance. Clones are entangled.
pub struct Shared<E> {
    inner: Rc<RefCell<E>>,
}

impl<E> Shared<E> {
    pub fn new(source: E) -> Self {
        Self {
            inner: Rc::new(RefCell::new(source)),
        }
    }

    /// True if both handles drive the same cursor.
    pub fn same_instance(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<E> Clone for Shared<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: Enumerator> Enumerator for Shared<E> {
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        self.inner.borrow_mut().advance()
    }

    fn current(&self) -> Option<E::Item> {
        self.inner.borrow().current()
    }

    fn restart(&mut self) {
        self.inner.borrow_mut().restart()
    }
}

/// Buffer the remaining elements of `source` once and return two independent
/// cursors over the buffer.
pub fn tee<E>(source: E) -> (SliceEnumerator<E::Item>, SliceEnumerator<E::Item>)
where
    E: Enumerator,
{
    tee_with(source, &BufferConfig::default())
}

/// Like [`tee`] but sizes the buffer from `cfg`.
pub fn tee_with<E>(
    mut source: E,
    cfg: &BufferConfig,
) -> (SliceEnumerator<E::Item>, SliceEnumerator<E::Item>)
where
    E: Enumerator,
{
    let items = to_vec_with(&mut source, cfg);
    #[cfg(feature = "tracing")]
    tracing::trace!(len = items.len(), "tee buffered source");
    let left = SliceEnumerator::new(items);
    let right = left.clone();
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::from_vec;

    #[test]
    fn shared_handles_are_entangled() {
        let mut a = Shared::new(from_vec(vec![1, 2, 3, 4]));
        let mut b = a.clone();
        assert!(a.same_instance(&b));

        assert!(a.advance());
        assert!(b.advance());
        // Both handles read the one cursor, which has moved twice.
        assert_eq!(a.current(), Some(2));
        assert_eq!(b.current(), Some(2));
    }

    #[test]
    fn tee_cursors_are_independent() {
        let (mut a, mut b) = tee(from_vec(vec!['x', 'y']));
        assert!(a.advance());
        assert!(a.advance());
        assert!(b.advance());
        assert_eq!(a.current(), Some('y'));
        assert_eq!(b.current(), Some('x'));
    }
}
