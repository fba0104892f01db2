//! Buffering set operators: Distinct, Union, Intersect, Except.
//!
//! Every operator comes in four flavors: hash + `Eq` keys by default, an
//! explicit equality strategy (`_eq`), an ordering strategy whose ties count
//! as equal (`_cmp`), and a key selector applied to every element (`_by`).
//! Output always follows first-occurrence order of the first sequence.

pub mod distinct;
pub mod intersect;
pub mod keyset;
pub mod union;

pub use distinct::{distinct, distinct_by, distinct_cmp, distinct_eq, Distinct, DistinctBy};
pub use intersect::{
    except, except_by, except_cmp, except_eq, intersect, intersect_by, intersect_cmp,
    intersect_eq, ExceptBy, IntersectBy, SetFilter,
};
pub use keyset::{EqualerSet, KeyIndex, KeySet, LesserSet};
pub use union::{union, union_by, union_cmp, union_eq, Union, UnionBy};

/// Key selector of the whole-element variants.
pub type Identity<T> = fn(&T) -> T;

pub(crate) fn identity<T: Clone>(item: &T) -> T {
    item.clone()
}
