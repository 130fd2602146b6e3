use crate::cursor::Cursor;
use crate::error::CursorError;
use std::collections::HashMap;
use std::hash::Hash;

/// Mapping from a derived key to the elements that produced it, in source
/// order
pub type Grouping<K, T> = HashMap<K, Vec<T>>;

/// Consumes the cursor and groups its elements by a key function
///
/// Each element is appended to the group of its computed key, so every
/// group preserves the relative order in which its elements appeared in the
/// source. Iteration order over the groups themselves is unspecified.
pub fn group_by<C, F, K>(mut cursor: C, key_fn: F) -> Result<Grouping<K, C::Item>, CursorError>
where
    C: Cursor,
    F: Fn(&C::Item) -> K,
    K: Eq + Hash,
{
    let mut groups: Grouping<K, C::Item> = Grouping::new();
    while cursor.has_next() {
        let value = cursor.next()?;
        groups.entry(key_fn(&value)).or_default().push(value);
    }
    Ok(groups)
}
