//! Keyed-sequence primitives shared by the course and lecture handlers.
//!
//! Both operate on `Arc`-shared elements: surviving elements are pointer
//! copies, never deep clones.

use std::sync::Arc;

/// Upsert-with-promotion in a single pass.
///
/// Returns `head` followed by every element of `items` for which
/// `same_key` is false, in their original relative order.
pub(crate) fn upsert_front<T>(
    items: &[Arc<T>],
    head: Arc<T>,
    same_key: impl Fn(&T) -> bool,
) -> Vec<Arc<T>> {
    let mut out = Vec::with_capacity(items.len() + 1);
    out.push(head);
    out.extend(items.iter().filter(|item| !same_key(Arc::as_ref(item))).cloned());
    out
}

/// Order-preserving removal.
///
/// Returns `None` if nothing matches, so callers can keep the original
/// sequence (and its identity) untouched.
pub(crate) fn remove_where<T>(
    items: &[Arc<T>],
    matches: impl Fn(&T) -> bool,
) -> Option<Vec<Arc<T>>> {
    if !items.iter().any(|item| matches(Arc::as_ref(item))) {
        return None;
    }
    Some(
        items
            .iter()
            .filter(|item| !matches(Arc::as_ref(item)))
            .cloned()
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[(char, i32)]) -> Vec<Arc<(char, i32)>> {
        values.iter().copied().map(Arc::new).collect()
    }

    fn keys(items: &[Arc<(char, i32)>]) -> String {
        items.iter().map(|i| i.0).collect()
    }

    #[test]
    fn test_upsert_new_key_prepends() {
        let items = seq(&[('a', 1), ('b', 2)]);
        let out = upsert_front(&items, Arc::new(('c', 3)), |x| x.0 == 'c');
        assert_eq!(keys(&out), "cab");
    }

    #[test]
    fn test_upsert_existing_key_replaces_and_promotes() {
        let items = seq(&[('a', 1), ('b', 2), ('c', 3)]);
        let out = upsert_front(&items, Arc::new(('b', 20)), |x| x.0 == 'b');
        assert_eq!(keys(&out), "bac");
        assert_eq!(out[0].1, 20);
        assert!(Arc::ptr_eq(&out[1], &items[0]));
        assert!(Arc::ptr_eq(&out[2], &items[2]));
    }

    #[test]
    fn test_upsert_drops_every_duplicate() {
        let items = seq(&[('a', 1), ('b', 2), ('a', 3)]);
        let out = upsert_front(&items, Arc::new(('a', 9)), |x| x.0 == 'a');
        assert_eq!(keys(&out), "ab");
    }

    #[test]
    fn test_remove_preserves_order() {
        let items = seq(&[('a', 1), ('b', 2), ('c', 3), ('d', 4)]);
        let out = remove_where(&items, |x| x.0 == 'b').unwrap();
        assert_eq!(keys(&out), "acd");
    }

    #[test]
    fn test_remove_without_match_is_none() {
        let items = seq(&[('a', 1)]);
        assert!(remove_where(&items, |x| x.0 == 'z').is_none());
        assert!(remove_where::<(char, i32)>(&[], |_| true).is_none());
    }
}
