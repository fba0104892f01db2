#![forbid(unsafe_code)]
//! enumq: lazily-evaluated, restartable sequence operators.
//!
//! This crate only re-exports the workspace members:
//! - `enumq_core`: the enumerator protocol, sources, strategies and errors.
//! - `enumq_operators`: the operators and the fluent [`EnumeratorExt`] layer.

pub use enumq_core;
pub use enumq_operators;

pub use enumq_core::{must, Enumerator, Error, Iter, Result};
pub use enumq_operators::EnumeratorExt;

/// Everything needed to build and drive pipelines.
pub mod prelude {
    pub use enumq_core::prelude::*;
    pub use enumq_operators::EnumeratorExt;
}
