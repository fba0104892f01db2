use thiserror::Error;

/// Canonical result for enumq.
pub type Result<T> = std::result::Result<T, Error>;

/// Argument and sequence errors.
///
/// Everything except `EmptySource` is raised when an operator is constructed,
/// never while it is being enumerated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("source is nil")]
    NilSource,

    #[error("predicate is nil")]
    NilPredicate,

    #[error("selector is nil")]
    NilSelector,

    #[error("comparer is nil")]
    NilComparer,

    #[error("{what} is out of range: {value}")]
    SizeOutOfRange { what: &'static str, value: i64 },

    // Aggregations without an identity element can only discover this by pulling.
    #[error("source contains no elements")]
    EmptySource,
}

/// Unwrap an operator result, aborting with the error message.
///
/// This is the building block of the panicking convenience layer; the
/// fallible functions never call it.
#[track_caller]
pub fn must<T>(res: Result<T>) -> T {
    match res {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

/// Unwrap an optional argument into the given nil error.
pub fn require<T>(arg: Option<T>, err: Error) -> Result<T> {
    arg.ok_or(err)
}
