//! Single-pass reducers. They pull from the cursor's current position to
//! exhaustion and return a value rather than an enumerator.

pub mod minmax;
pub mod sum;

pub use minmax::{max, max_el, max_value, min, min_el, min_value};
pub use sum::{average, average_value, sum, sum_value};
