//! The enumerator protocol every operator consumes and produces.
//!
//! An enumerator is a single cursor over a sequence:
//! - `advance()` moves to the next element and reports whether one exists.
//! - `current()` reads the element under the cursor. It is only meaningful
//!   after an `advance()` that returned `true`; otherwise it yields `None`.
//! - `restart()` puts the cursor back to its pre-iteration state.
//!
//! Building a pipeline does no work. Elements are pulled from the source only
//! while a consumer drives `advance()` on the terminal stage.
//!
//! Each enumerator is mutable cursor state. Binary operators assume their two
//! arguments are independent instances; see [`crate::shared`] for the
//! consequences of breaking that rule and for `tee`, the supported way to
//! relate a sequence to itself.

use crate::config::BufferConfig;

/// Restartable, single-cursor iteration handle over a typed sequence.
pub trait Enumerator {
    type Item;

    /// Attempt to move to the next element.
    fn advance(&mut self) -> bool;

    /// Element at the cursor, or `None` when the cursor is not positioned.
    fn current(&self) -> Option<Self::Item>;

    /// Return to the pre-iteration state so a fresh pass can begin.
    fn restart(&mut self);
}

impl<E: Enumerator + ?Sized> Enumerator for Box<E> {
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn current(&self) -> Option<Self::Item> {
        (**self).current()
    }

    fn restart(&mut self) {
        (**self).restart()
    }
}

impl<E: Enumerator + ?Sized> Enumerator for &mut E {
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn current(&self) -> Option<Self::Item> {
        (**self).current()
    }

    fn restart(&mut self) {
        (**self).restart()
    }
}

/// Type-erased enumerator, for pipelines whose stage types vary at runtime.
pub type BoxEnumerator<'a, T> = Box<dyn Enumerator<Item = T> + 'a>;

/// Erase the concrete type of an enumerator.
pub fn boxed<'a, E>(source: E) -> BoxEnumerator<'a, E::Item>
where
    E: Enumerator + 'a,
{
    Box::new(source)
}

/// Bridges an enumerator into a Rust `Iterator`.
///
/// Iteration continues from wherever the cursor is; call `restart()` on the
/// enumerator first (or [`Iter::restart`]) for a full pass.
pub struct Iter<E> {
    inner: E,
}

impl<E: Enumerator> Iter<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    /// Rewind the underlying enumerator.
    pub fn restart(&mut self) {
        self.inner.restart();
    }

    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Enumerator> Iterator for Iter<E> {
    type Item = E::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.inner.advance() {
            self.inner.current()
        } else {
            None
        }
    }
}

/// Pull every remaining element into a vector.
pub fn to_vec<E: Enumerator + ?Sized>(source: &mut E) -> Vec<E::Item> {
    to_vec_with(source, &BufferConfig::default())
}

/// Like [`to_vec`] but sizes the buffer from `cfg`.
pub fn to_vec_with<E: Enumerator + ?Sized>(source: &mut E, cfg: &BufferConfig) -> Vec<E::Item> {
    let mut out = Vec::with_capacity(cfg.initial_capacity);
    while source.advance() {
        if let Some(item) = source.current() {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::from_vec;

    #[test]
    fn iter_bridge_drives_for_loops() {
        let mut seen = Vec::new();
        for x in Iter::new(from_vec(vec![1, 2, 3])) {
            seen.push(x);
        }
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn current_is_none_outside_a_pass() {
        let mut e = from_vec(vec![7]);
        assert_eq!(e.current(), None);
        assert!(e.advance());
        assert_eq!(e.current(), Some(7));
        assert!(!e.advance());
        assert_eq!(e.current(), None);
    }

    #[test]
    fn boxed_enumerator_keeps_protocol() {
        let mut e = boxed(from_vec(vec!["a", "b"]));
        assert_eq!(to_vec(&mut e), vec!["a", "b"]);
        e.restart();
        assert_eq!(to_vec(&mut e), vec!["a", "b"]);
    }
}
