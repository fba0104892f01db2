#![forbid(unsafe_code)]
//! enumq-operators: lazy sequence operators over the enumq enumerator protocol.
//!
//! Design intent:
//! - Constructing an operator validates its arguments and does no other work.
//!   Elements are pulled only while a consumer drives `advance()`.
//! - Streaming stages (transform/) hold nothing but their upstream handles.
//!   Buffering stages (set/, group/, order/) materialize once, on the first
//!   `advance()`.
//! - Every operation exists twice: a fallible free function taking `Option`
//!   arguments, and a panicking method on [`EnumeratorExt`].

pub mod aggregate;
pub mod chunk;
pub mod ext;
pub mod group;
pub mod leaf;
pub mod order;
pub mod set;
pub mod transform;

pub use chunk::{chunk, Chunk};
pub use ext::EnumeratorExt;
pub use group::{GroupBy, GroupJoin, Grouping, Join, Lookup};
pub use order::OrderedEnumerable;
