//! Ordering subsystem: OrderBy/ThenBy over a deferred, stably sorted buffer.

pub mod lesser;
pub mod ordered;
mod stable;

pub use lesser::{KeyLesser, ThenLesser};
pub use ordered::{
    order, order_by, order_by_descending, order_by_descending_ls, order_by_ls, order_descending,
    order_descending_ls, order_ls, then_by, then_by_descending, then_by_descending_ls, then_by_ls,
    OrderedEnumerable, ThenByLesser,
};
