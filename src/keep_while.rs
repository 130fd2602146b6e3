use crate::cursor::Cursor;
use crate::error::CursorError;

/// Cursor that yields elements from another cursor while a predicate holds
///
/// `has_next()` is true iff the source has a next element AND that element
/// satisfies the predicate. At the first element that fails the predicate,
/// the cursor reports exhaustion and `current()`/`next()` fail with
/// [`CursorError::OutOfRange`]. The source is never advanced past the
/// failing element, so the rest of the source stays masked permanently even
/// if later elements would match again.
pub struct KeepWhile<C, P> {
    source: C,
    predicate: P,
}

impl<C, P> KeepWhile<C, P> {
    pub fn new(source: C, predicate: P) -> Self {
        KeepWhile { source, predicate }
    }
}

impl<C, P> Cursor for KeepWhile<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&self) -> bool {
        matches!(self.source.current(), Ok(ref value) if (self.predicate)(value))
    }

    fn current(&self) -> Result<C::Item, CursorError> {
        let value = self.source.current()?;
        if (self.predicate)(&value) {
            Ok(value)
        } else {
            Err(CursorError::OutOfRange)
        }
    }

    fn next(&mut self) -> Result<C::Item, CursorError> {
        self.current()?;
        self.source.next()
    }
}

/// Convenience function to create a KeepWhile cursor
pub fn keep_while<C, P>(source: C, predicate: P) -> KeepWhile<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    KeepWhile::new(source, predicate)
}

/// Extension trait to add .keep_while() method support for cursors
pub trait KeepWhileExt: Cursor + Sized {
    fn keep_while<P>(self, predicate: P) -> KeepWhile<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        KeepWhile::new(self, predicate)
    }
}

/// Implement KeepWhileExt for all cursors
impl<C: Cursor> KeepWhileExt for C {}
