use crate::cursor::Cursor;

/// Advances the cursor past every leading element that matches the predicate
///
/// Returns with the cursor positioned on the first non-matching element, or
/// exhausted if every remaining element matched. Never fails: an
/// all-matching input simply leaves the cursor empty.
pub fn drop_while<C, P>(cursor: &mut C, predicate: P)
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    while matches!(cursor.current(), Ok(ref value) if predicate(value)) {
        let _ = cursor.next();
    }
}
