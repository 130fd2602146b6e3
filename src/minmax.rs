use crate::cursor::Cursor;
use crate::error::CursorError;

/// Consumes the cursor and returns its (min, max) elements under a key
/// function
///
/// Both candidates start at the first element, then one scan over the
/// remainder replaces the max candidate on a strictly greater key and the
/// min candidate on a strictly lesser key. Equal keys fire neither branch,
/// so ties keep the earliest-seen element. A one-element cursor returns that
/// element as both halves. Fails with [`CursorError::EmptyMinMax`] on an
/// already-exhausted cursor.
pub fn minmax<C, F, K>(mut cursor: C, key_fn: F) -> Result<(C::Item, C::Item), CursorError>
where
    C: Cursor,
    C::Item: Clone,
    F: Fn(&C::Item) -> K,
    K: PartialOrd,
{
    if !cursor.has_next() {
        return Err(CursorError::EmptyMinMax);
    }

    let first = cursor.next()?;
    let mut min = (key_fn(&first), first.clone());
    let mut max = (key_fn(&first), first);

    while cursor.has_next() {
        let value = cursor.next()?;
        let key = key_fn(&value);
        if key > max.0 {
            max = (key, value);
        } else if key < min.0 {
            min = (key, value);
        }
    }

    Ok((min.1, max.1))
}

/// Consumes the cursor and returns its minimum element under a key function
///
/// Fails with [`CursorError::EmptyMin`] on an already-exhausted cursor;
/// otherwise delegates to [`minmax`] and returns the min half.
pub fn min<C, F, K>(cursor: C, key_fn: F) -> Result<C::Item, CursorError>
where
    C: Cursor,
    C::Item: Clone,
    F: Fn(&C::Item) -> K,
    K: PartialOrd,
{
    if !cursor.has_next() {
        return Err(CursorError::EmptyMin);
    }
    minmax(cursor, key_fn).map(|(min, _)| min)
}

/// Consumes the cursor and returns its maximum element under a key function
///
/// Fails with [`CursorError::EmptyMax`] on an already-exhausted cursor;
/// otherwise delegates to [`minmax`] and returns the max half.
pub fn max<C, F, K>(cursor: C, key_fn: F) -> Result<C::Item, CursorError>
where
    C: Cursor,
    C::Item: Clone,
    F: Fn(&C::Item) -> K,
    K: PartialOrd,
{
    if !cursor.has_next() {
        return Err(CursorError::EmptyMax);
    }
    minmax(cursor, key_fn).map(|(_, max)| max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::VecCursor;

    #[test]
    fn test_returns_min_and_max_values() {
        let cursor = VecCursor::new(vec![1, 2, 3, 4, 5]);
        assert_eq!(minmax(cursor, |x| *x).unwrap(), (1, 5));
    }

    #[test]
    fn test_returns_the_first_of_each_tied_value() {
        let cursor = VecCursor::new(vec!["foo", "foobar", "bar", "foobaz"]);
        let (shortest, longest) = minmax(cursor, |s| s.len()).unwrap();
        assert_eq!(shortest, "foo");
        assert_eq!(longest, "foobar");
    }

    #[test]
    fn test_single_element_is_both_min_and_max() {
        let cursor = VecCursor::new(vec![7]);
        assert_eq!(minmax(cursor, |x| *x).unwrap(), (7, 7));
    }

    #[test]
    fn test_minmax_fails_on_empty_cursor() {
        let cursor = VecCursor::new(Vec::<i32>::new());
        let err = minmax(cursor, |x| *x).unwrap_err();
        assert_eq!(err, CursorError::EmptyMinMax);
        assert_eq!(err.to_string(), "no min or max of empty iterator");
    }

    #[test]
    fn test_min_fails_on_empty_cursor_with_specific_message() {
        let cursor = VecCursor::new(Vec::<i32>::new());
        let err = min(cursor, |x| *x).unwrap_err();
        assert_eq!(err, CursorError::EmptyMin);
        assert_eq!(err.to_string(), "no min of empty iterator");
    }

    #[test]
    fn test_max_fails_on_empty_cursor_with_specific_message() {
        let cursor = VecCursor::new(Vec::<i32>::new());
        let err = max(cursor, |x| *x).unwrap_err();
        assert_eq!(err, CursorError::EmptyMax);
        assert_eq!(err.to_string(), "no max of empty iterator");
    }

    #[test]
    fn test_min_returns_minimum_under_key() {
        let cursor = VecCursor::new(vec![3, 1, 4, 1, 5]);
        assert_eq!(min(cursor, |x| *x).unwrap(), 1);
    }

    #[test]
    fn test_max_returns_maximum_under_key() {
        let cursor = VecCursor::new(vec![3, 1, 4, 1, 5]);
        assert_eq!(max(cursor, |x| *x).unwrap(), 5);
    }
}
