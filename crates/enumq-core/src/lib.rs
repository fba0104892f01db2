#![forbid(unsafe_code)]
//! enumq-core: the enumerator protocol, source adapters, and comparison
//! strategies shared by every enumq operator.
//!
//! Design intent:
//! - Single-threaded, synchronous, pull-based. Nothing here spawns work or
//!   blocks on I/O; sources are in-memory or pure generators.
//! - Argument validation happens at construction time and is reported through
//!   [`Error`]. Enumeration itself never fails.
//! - Element comparison goes through strategy traits (`Equaler`, `Lesser`)
//!   rather than assuming a language-level equality.

pub mod compare;
pub mod config;
pub mod enumerator;
pub mod error;
pub mod prelude;
pub mod shared;
pub mod source;

pub use enumerator::{Enumerator, Iter};
pub use error::{must, Error, Result};
