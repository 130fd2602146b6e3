use thiserror::Error;

/// Errors raised by cursor operations and the combinators built on them.
///
/// Every variant is raised synchronously to the immediate caller, at the
/// point of the offending call. There is no retry or recovery path: these
/// are either contract violations (reading past the end of a cursor) or
/// expected "absence" signals that callers match on directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    /// `next()` or `current()` was called with no element available, either
    /// because the cursor is exhausted or because a derived cursor (such as
    /// [`KeepWhile`](crate::KeepWhile)) masks the remaining elements.
    #[error("cursor has no element at its current position")]
    OutOfRange,

    /// `find` reached the end of the cursor without any element satisfying
    /// the predicate.
    #[error("no element satisfies the predicate")]
    NoSuchElement,

    /// `min` was called on an already-exhausted cursor.
    #[error("no min of empty iterator")]
    EmptyMin,

    /// `max` was called on an already-exhausted cursor.
    #[error("no max of empty iterator")]
    EmptyMax,

    /// `minmax` was called on an already-exhausted cursor.
    #[error("no min or max of empty iterator")]
    EmptyMinMax,
}
