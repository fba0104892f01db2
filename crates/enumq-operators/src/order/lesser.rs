//! Composite orderings built by OrderBy/ThenBy.

use enumq_core::compare::Lesser;

/// Orders elements by a projected key, ascending or descending.
#[derive(Clone)]
pub struct KeyLesser<F, L> {
    key: F,
    lesser: L,
    descending: bool,
}

impl<F, L> KeyLesser<F, L> {
    pub fn ascending(key: F, lesser: L) -> Self {
        Self {
            key,
            lesser,
            descending: false,
        }
    }

    pub fn descending(key: F, lesser: L) -> Self {
        Self {
            key,
            lesser,
            descending: true,
        }
    }
}

impl<T, K, F, L> Lesser<T> for KeyLesser<F, L>
where
    F: Fn(&T) -> K,
    L: Lesser<K>,
{
    fn less(&self, x: &T, y: &T) -> bool {
        let (kx, ky) = ((self.key)(x), (self.key)(y));
        if self.descending {
            self.lesser.less(&ky, &kx)
        } else {
            self.lesser.less(&kx, &ky)
        }
    }
}

/// Lexicographic composition: `primary` decides, `secondary` breaks ties.
///
/// Two strict weak orderings compose into a strict weak ordering.
#[derive(Clone)]
pub struct ThenLesser<A, B> {
    primary: A,
    secondary: B,
}

impl<A, B> ThenLesser<A, B> {
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<T: ?Sized, A: Lesser<T>, B: Lesser<T>> Lesser<T> for ThenLesser<A, B> {
    fn less(&self, x: &T, y: &T) -> bool {
        if self.primary.less(x, y) {
            return true;
        }
        if self.primary.less(y, x) {
            return false;
        }
        self.secondary.less(x, y)
    }
}
