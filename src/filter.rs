use crate::cursor::Cursor;
use crate::drop_while::drop_while;
use crate::error::CursorError;

/// Cursor that yields only the elements of another cursor matching a
/// predicate
///
/// Construction eagerly advances the source to its first matching element
/// (or exhausts it) and never fails, regardless of match count. From then on
/// the source always sits on a match-or-exhausted position: `has_next()` and
/// `current()` delegate directly, and `next()` takes the pending match
/// before skipping ahead to the following one.
pub struct Filter<C, P> {
    source: C,
    predicate: P,
}

impl<C, P> Filter<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    pub fn new(mut source: C, predicate: P) -> Self {
        drop_while(&mut source, &predicate);
        Filter { source, predicate }
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&self) -> bool {
        self.source.has_next()
    }

    fn current(&self) -> Result<C::Item, CursorError> {
        self.source.current()
    }

    fn next(&mut self) -> Result<C::Item, CursorError> {
        let value = self.source.next()?;
        drop_while(&mut self.source, &self.predicate);
        Ok(value)
    }
}

/// Convenience function to create a Filter cursor
pub fn filter<C, P>(source: C, predicate: P) -> Filter<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    Filter::new(source, predicate)
}

/// Extension trait to add .filter() method support for cursors
pub trait FilterExt: Cursor + Sized {
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }
}

/// Implement FilterExt for all cursors
impl<C: Cursor> FilterExt for C {}
