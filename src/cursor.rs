use crate::error::CursorError;

/// Generic cursor trait for iterator combinators
///
/// A cursor sits on one element of a sequence at a time and can be queried
/// without advancing. This abstraction allows the combinators to work with
/// different underlying sources (vectors, generators over other data, etc.)
/// while maintaining the same interface.
///
/// The protocol is deliberately stricter than `Iterator`: `current()` is a
/// non-advancing peek, which combinators like [`filter`](crate::filter) and
/// [`keep_while`](crate::keep_while) rely on to inspect the pending element
/// before committing to consume it.
///
/// # Contract
///
/// - `has_next()` and `current()` are side-effect-free and idempotent;
///   calling `current()` any number of times with no intervening `next()`
///   observes the same element.
/// - `next()` is the only mutating operation. It returns what `current()`
///   would have returned immediately before the call, then advances by one
///   position.
/// - `current()` and `next()` fail with [`CursorError::OutOfRange`] when no
///   element is available. Callers guard with `has_next()` where absence is
///   not a valid outcome.
///
/// Cursors are single-use: once exhausted they cannot be reset. Derived
/// cursors returned by the lazy combinators take the source by value, so the
/// derived cursor is the sole handle to the source from then on.
pub trait Cursor {
    /// The type of elements this cursor yields
    type Item;

    /// Check whether a subsequent element is available
    fn has_next(&self) -> bool;

    /// Get the element at the current cursor position without advancing
    ///
    /// Returns an error if the cursor is positioned past the end of the
    /// sequence.
    fn current(&self) -> Result<Self::Item, CursorError>;

    /// Return the current element and advance the cursor by one position
    ///
    /// Returns an error if called when the cursor is already exhausted.
    fn next(&mut self) -> Result<Self::Item, CursorError>;
}
