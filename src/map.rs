use crate::cursor::Cursor;
use crate::error::CursorError;

/// Cursor that applies a mapping function to each element of another cursor
///
/// `has_next()` delegates to the source unchanged; `current()` and `next()`
/// apply the mapper to the source's corresponding value. Nothing is
/// buffered: the mapper runs on every `current()` call rather than being
/// cached, so a mapper polled repeatedly via `current()` may run more times
/// than there are elements. Mappers must tolerate repeated invocation.
pub struct Map<C, F> {
    source: C,
    mapper: F,
}

impl<C, F> Map<C, F> {
    pub fn new(source: C, mapper: F) -> Self {
        Map { source, mapper }
    }
}

impl<C, F, U> Cursor for Map<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    fn has_next(&self) -> bool {
        self.source.has_next()
    }

    fn current(&self) -> Result<U, CursorError> {
        self.source.current().map(&self.mapper)
    }

    fn next(&mut self) -> Result<U, CursorError> {
        self.source.next().map(&self.mapper)
    }
}

/// Convenience function to create a Map cursor
pub fn map<C, F, U>(source: C, mapper: F) -> Map<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    Map::new(source, mapper)
}

/// Extension trait to add .map() method support for cursors
pub trait MapExt: Cursor + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all cursors
impl<C: Cursor> MapExt for C {}
