use crate::cursor::Cursor;
use crate::error::CursorError;

/// Advances the cursor until an element matches the predicate and returns it
///
/// Short-circuits on the first match, leaving the cursor positioned just
/// past the returned element so the caller can keep iterating from there.
/// Returns [`CursorError::NoSuchElement`] if the cursor is exhausted without
/// a match.
pub fn find<C, P>(cursor: &mut C, predicate: P) -> Result<C::Item, CursorError>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    while cursor.has_next() {
        let value = cursor.next()?;
        if predicate(&value) {
            return Ok(value);
        }
    }
    Err(CursorError::NoSuchElement)
}
