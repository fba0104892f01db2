//! Pluggable equality and ordering strategies.
//!
//! Operators never rely on a language-level notion of sameness. They take an
//! [`Equaler`] (sameness, optionally with a hash surrogate) or a [`Lesser`]
//! (strict weak ordering). Defaults come from trait bounds on the element
//! type: [`DeepEqual`] for `PartialEq`, [`HashEqual`] for `Hash + Eq`,
//! [`Order`] for `PartialOrd`.
//!
//! When an operator is handed both a direct equality and an ordering-derived
//! one, keeping them consistent is the caller's job; nothing here reconciles
//! them.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;

use rustc_hash::FxHasher;

/// Decides whether two elements are the same.
pub trait Equaler<T: ?Sized> {
    fn equal(&self, x: &T, y: &T) -> bool;

    /// Hash surrogate consistent with `equal`: equal elements must produce
    /// equal hashes. `None` means the strategy cannot hash and callers fall
    /// back to linear scans.
    fn hash_of(&self, _x: &T) -> Option<u64> {
        None
    }
}

/// Strict weak ordering: irreflexive, asymmetric, transitive.
pub trait Lesser<T: ?Sized> {
    fn less(&self, x: &T, y: &T) -> bool;

    /// Three-way comparison derived from `less`; ties are `Equal`.
    fn compare(&self, x: &T, y: &T) -> Ordering {
        if self.less(x, y) {
            Ordering::Less
        } else if self.less(y, x) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

macro_rules! forward_strategies {
    ($($ptr:ident),*) => {$(
        impl<T: ?Sized, Q: Equaler<T> + ?Sized> Equaler<T> for $ptr<Q> {
            fn equal(&self, x: &T, y: &T) -> bool {
                (**self).equal(x, y)
            }
            fn hash_of(&self, x: &T) -> Option<u64> {
                (**self).hash_of(x)
            }
        }

        impl<T: ?Sized, L: Lesser<T> + ?Sized> Lesser<T> for $ptr<L> {
            fn less(&self, x: &T, y: &T) -> bool {
                (**self).less(x, y)
            }
        }
    )*};
}

forward_strategies!(Box, Rc, Arc);

impl<T: ?Sized, Q: Equaler<T> + ?Sized> Equaler<T> for &Q {
    fn equal(&self, x: &T, y: &T) -> bool {
        (**self).equal(x, y)
    }
    fn hash_of(&self, x: &T) -> Option<u64> {
        (**self).hash_of(x)
    }
}

impl<T: ?Sized, L: Lesser<T> + ?Sized> Lesser<T> for &L {
    fn less(&self, x: &T, y: &T) -> bool {
        (**self).less(x, y)
    }
}

/// An absent equality strategy means structural equality.
impl<T: PartialEq + ?Sized, Q: Equaler<T>> Equaler<T> for Option<Q> {
    fn equal(&self, x: &T, y: &T) -> bool {
        match self {
            Some(q) => q.equal(x, y),
            None => x == y,
        }
    }

    fn hash_of(&self, x: &T) -> Option<u64> {
        self.as_ref().and_then(|q| q.hash_of(x))
    }
}

/// Structural equality via `PartialEq`. Cannot hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeepEqual;

impl<T: PartialEq + ?Sized> Equaler<T> for DeepEqual {
    fn equal(&self, x: &T, y: &T) -> bool {
        x == y
    }
}

/// Equality via `Eq` with an `Fx` hash surrogate.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashEqual;

impl<T: Hash + Eq + ?Sized> Equaler<T> for HashEqual {
    fn equal(&self, x: &T, y: &T) -> bool {
        x == y
    }

    fn hash_of(&self, x: &T) -> Option<u64> {
        let mut h = FxHasher::default();
        x.hash(&mut h);
        Some(h.finish())
    }
}

/// Ordering via `PartialOrd`.
///
/// Incomparable values (NaN) are never less than anything, so they tie with
/// every element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Order;

impl<T: PartialOrd + ?Sized> Lesser<T> for Order {
    fn less(&self, x: &T, y: &T) -> bool {
        x < y
    }
}

/// Reverses an ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reverse<L>(pub L);

impl<T: ?Sized, L: Lesser<T>> Lesser<T> for Reverse<L> {
    fn less(&self, x: &T, y: &T) -> bool {
        self.0.less(y, x)
    }
}

/// Equality derived from an ordering: neither element is less than the other.
#[derive(Debug, Clone, Copy, Default)]
pub struct LesserEqualer<L>(pub L);

impl<T: ?Sized, L: Lesser<T>> Equaler<T> for LesserEqualer<L> {
    fn equal(&self, x: &T, y: &T) -> bool {
        !self.0.less(x, y) && !self.0.less(y, x)
    }
}

/// Equality strategy from a closure.
#[derive(Clone, Copy)]
pub struct EqualerFunc<F>(pub F);

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Equaler<T> for EqualerFunc<F> {
    fn equal(&self, x: &T, y: &T) -> bool {
        (self.0)(x, y)
    }
}

/// Ordering strategy from a closure.
#[derive(Clone, Copy)]
pub struct LesserFunc<F>(pub F);

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Lesser<T> for LesserFunc<F> {
    fn less(&self, x: &T, y: &T) -> bool {
        (self.0)(x, y)
    }
}

/// Case-insensitive equality and ordering for strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitive;

fn fold(s: &str) -> String {
    s.to_lowercase()
}

impl<T: AsRef<str> + ?Sized> Equaler<T> for CaseInsensitive {
    fn equal(&self, x: &T, y: &T) -> bool {
        fold(x.as_ref()) == fold(y.as_ref())
    }

    fn hash_of(&self, x: &T) -> Option<u64> {
        let mut h = FxHasher::default();
        fold(x.as_ref()).hash(&mut h);
        Some(h.finish())
    }
}

impl<T: AsRef<str> + ?Sized> Lesser<T> for CaseInsensitive {
    fn less(&self, x: &T, y: &T) -> bool {
        fold(x.as_ref()) < fold(y.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_strict() {
        assert!(Order.less(&1, &2));
        assert!(!Order.less(&2, &2));
        assert!(!Order.less(&f64::NAN, &1.0));
        assert!(!Order.less(&1.0, &f64::NAN));
        assert_eq!(Order.compare(&3, &1), Ordering::Greater);
    }

    #[test]
    fn reverse_flips_order() {
        let r = Reverse(Order);
        assert!(r.less(&2, &1));
        assert!(!r.less(&1, &2));
    }

    #[test]
    fn equality_from_ordering_treats_ties_as_equal() {
        let eq = LesserEqualer(CaseInsensitive);
        assert!(eq.equal("Venus", "VENUS"));
        assert!(!eq.equal("Venus", "Mars"));
    }

    #[test]
    fn case_insensitive_hash_matches_equality() {
        let a = Equaler::<str>::hash_of(&CaseInsensitive, "XyZ");
        let b = Equaler::<str>::hash_of(&CaseInsensitive, "xyz");
        assert_eq!(a, b);
        assert!(Equaler::<str>::equal(&CaseInsensitive, "XyZ", "xyz"));
    }

    #[test]
    fn absent_equaler_is_structural() {
        let (lower, upper) = ("a".to_string(), "A".to_string());
        let none: Option<CaseInsensitive> = None;
        assert!(!none.equal(&lower, &upper));
        assert!(Some(CaseInsensitive).equal(&lower, &upper));
    }

    #[test]
    fn closures_become_strategies() {
        let by_len = LesserFunc(|a: &&str, b: &&str| a.len() < b.len());
        assert!(by_len.less(&"ab", &"abc"));
        let same_parity = EqualerFunc(|a: &i32, b: &i32| a % 2 == b % 2);
        assert!(same_parity.equal(&1, &3));
        assert_eq!(same_parity.hash_of(&1), None);
    }
}
