use crate::cursor::Cursor;
use crate::error::CursorError;

/// A cursor over an owned, already-materialized `Vec`
///
/// Position starts at index 0 and advances one element per `next()` call.
/// Elements are handed out by value, so the element type must be `Clone`.
#[derive(Debug)]
pub struct VecCursor<T> {
    items: Vec<T>,
    position: usize,
}

impl<T> VecCursor<T> {
    pub fn new(items: Vec<T>) -> Self {
        VecCursor { items, position: 0 }
    }
}

impl<T> From<Vec<T>> for VecCursor<T> {
    fn from(items: Vec<T>) -> Self {
        VecCursor::new(items)
    }
}

impl<T: Clone> Cursor for VecCursor<T> {
    type Item = T;

    fn has_next(&self) -> bool {
        self.position < self.items.len()
    }

    fn current(&self) -> Result<T, CursorError> {
        self.items
            .get(self.position)
            .cloned()
            .ok_or(CursorError::OutOfRange)
    }

    fn next(&mut self) -> Result<T, CursorError> {
        let value = self.current()?;
        self.position += 1;
        Ok(value)
    }
}
