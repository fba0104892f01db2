//! Grouping operators: GroupBy, ToLookup, Join, GroupJoin.
//!
//! All of them share one materialization: an append-ordered key index over
//! the grouped sequence, built on the first `advance()`. Restarting rewinds
//! over the groups already built; the grouped sequence is not pulled again.

pub mod group_by;
pub mod join;
pub mod lookup;

pub use group_by::{group_by, group_by_eq, group_by_sel, group_by_sel_eq, GroupBy, Same};
pub use join::{group_join, group_join_eq, join, join_eq, GroupJoin, Join};
pub use lookup::{to_lookup, to_lookup_sel, Grouping, Lookup};
