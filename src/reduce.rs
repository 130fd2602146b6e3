use crate::cursor::Cursor;
use crate::error::CursorError;

/// Folds the cursor's elements left-to-right into an accumulator
///
/// Starts from `base` and applies the reducer to every element in order,
/// with no short-circuit. An already-exhausted cursor returns `base`
/// unchanged.
pub fn reduce<C, A, F>(mut cursor: C, base: A, reducer: F) -> Result<A, CursorError>
where
    C: Cursor,
    F: Fn(A, C::Item) -> A,
{
    let mut accumulator = base;
    while cursor.has_next() {
        accumulator = reducer(accumulator, cursor.next()?);
    }
    Ok(accumulator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::VecCursor;

    #[test]
    fn test_sums_elements() {
        let cursor = VecCursor::new(vec![1, 2, 3, 4]);
        assert_eq!(reduce(cursor, 0, |acc, x| acc + x).unwrap(), 10);
    }

    #[test]
    fn test_multiplies_elements() {
        let cursor = VecCursor::new(vec![1, 2, 3]);
        assert_eq!(reduce(cursor, 1, |acc, x| acc * x).unwrap(), 6);
    }

    #[test]
    fn test_exhausted_cursor_returns_base_unchanged() {
        let cursor = VecCursor::new(Vec::<i32>::new());
        assert_eq!(reduce(cursor, 42, |acc, x| acc + x).unwrap(), 42);
    }

    #[test]
    fn test_accumulator_may_have_a_different_type() {
        let cursor = VecCursor::new(vec![1, 2, 3]);
        let joined = reduce(cursor, String::new(), |mut acc, x| {
            acc.push_str(&x.to_string());
            acc
        })
        .unwrap();
        assert_eq!(joined, "123");
    }

    #[test]
    fn test_folds_left_to_right() {
        let cursor = VecCursor::new(vec![1, 2, 3]);
        // (((10 - 1) - 2) - 3) = 4; a right fold would give 10 - (1 - (2 - 3)) = 8.
        assert_eq!(reduce(cursor, 10, |acc, x| acc - x).unwrap(), 4);
    }
}
