use crate::cursor::Cursor;
use crate::error::CursorError;
use std::collections::HashMap;
use std::hash::Hash;

/// Mapping from element value to the number of times it was observed
pub type Histogram<T> = HashMap<T, usize>;

/// Consumes the cursor and counts how often each distinct value occurs
///
/// Elements are compared by value; the sum of all counts equals the number
/// of elements the cursor yielded.
pub fn counter<C>(mut cursor: C) -> Result<Histogram<C::Item>, CursorError>
where
    C: Cursor,
    C::Item: Eq + Hash,
{
    let mut histogram = Histogram::new();
    while cursor.has_next() {
        *histogram.entry(cursor.next()?).or_insert(0) += 1;
    }
    Ok(histogram)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::VecCursor;
    use proptest::prelude::*;

    #[test]
    fn test_returns_frequency_of_elements() {
        let histogram = counter(VecCursor::new(vec![1, 1, 2, 3, 3])).unwrap();
        assert_eq!(histogram[&1], 2);
        assert_eq!(histogram[&2], 1);
        assert_eq!(histogram[&3], 2);
    }

    #[test]
    fn test_counts_non_consecutive_instances() {
        let histogram = counter(VecCursor::new(vec![1, 2, 1, 2, 1])).unwrap();
        assert_eq!(histogram[&1], 3);
        assert_eq!(histogram[&2], 2);
    }

    #[test]
    fn test_empty_cursor_yields_empty_histogram() {
        let histogram = counter(VecCursor::new(Vec::<i32>::new())).unwrap();
        assert!(histogram.is_empty());
    }

    proptest! {
        #[test]
        fn counts_sum_to_input_length(values in prop::collection::vec(0..2048i32, 1..512)) {
            let len = values.len();
            let histogram = counter(VecCursor::new(values)).unwrap();
            prop_assert_eq!(histogram.values().sum::<usize>(), len);
        }
    }
}
