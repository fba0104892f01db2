//! Stateless transforms: each output element is derived on demand from the
//! upstream cursor(s). Nothing is buffered and nothing is computed ahead of
//! the consumer's `advance()`.

pub mod concat;
pub mod filter;
pub mod select;
pub mod select_many;
pub mod zip;

pub use concat::{concat, Concat};
pub use filter::{filter, Filter};
pub use select::{select, Select};
pub use select_many::{select_many, SelectMany};
pub use zip::{zip, Zip};
