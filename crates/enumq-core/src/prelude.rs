//! Convenient re-exports for downstream crates.

pub use crate::compare::{
    CaseInsensitive, DeepEqual, Equaler, EqualerFunc, HashEqual, Lesser, LesserEqualer,
    LesserFunc, Order, Reverse,
};
pub use crate::config::BufferConfig;
pub use crate::enumerator::{boxed, to_vec, to_vec_with, BoxEnumerator, Enumerator, Iter};
pub use crate::error::{must, Error, Result};
pub use crate::shared::{tee, tee_with, Shared};
pub use crate::source::{
    empty, from_slice, from_vec, on_iter, range, repeat, Empty, OnIter, Range, Repeat,
    SliceEnumerator,
};
