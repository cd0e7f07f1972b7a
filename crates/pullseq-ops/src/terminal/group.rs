use std::hash::Hash;

use pullseq_core::prelude::Cursor;

use crate::metrics::record_terminal;
use crate::partition::Partition;

/// Partition every value by `key`. Requires a finite cursor.
pub fn group_by<C, K, F>(mut cursor: C, mut key: F) -> Partition<K, C::Item>
where
    C: Cursor,
    C::Item: Clone,
    K: Hash + Eq,
    F: FnMut(&C::Item) -> K,
{
    cursor.bound().require_finite("group_by");

    let mut out = Partition::new();
    let mut pulled = 0;
    while cursor.advance() {
        pulled += 1;
        let item = cursor.current();
        out.push(key(item), item.clone());
    }
    record_terminal("group_by", pulled, out.len());
    out
}

/// `group_by` with a fallible key function.
pub fn try_group_by<C, K, F, E>(mut cursor: C, mut key: F) -> Result<Partition<K, C::Item>, E>
where
    C: Cursor,
    C::Item: Clone,
    K: Hash + Eq,
    F: FnMut(&C::Item) -> Result<K, E>,
{
    cursor.bound().require_finite("try_group_by");

    let mut out = Partition::new();
    let mut pulled = 0;
    while cursor.advance() {
        pulled += 1;
        let item = cursor.current();
        out.push(key(item)?, item.clone());
    }
    record_terminal("try_group_by", pulled, out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{count_from, Collection};
    use pullseq_core::prelude::Sequence;

    #[test]
    fn test_group_by_preserves_order() {
        let seq = Collection::from(vec![("a", 1), ("b", 2), ("a", 3)]);
        let groups = group_by(seq.cursor(), |(k, _)| *k);

        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!["a", "b"]);
        let a: Vec<i32> = groups.get("a").unwrap().iter().map(|(_, v)| *v).collect();
        assert_eq!(a, vec![1, 3]);
    }

    #[test]
    fn test_group_by_empty_cursor() {
        let seq: Collection<u8> = Collection::from(Vec::new());
        assert!(group_by(seq.cursor(), |x| *x).is_empty());
    }

    #[test]
    #[should_panic(expected = "group_by would drain an unbounded cursor")]
    fn test_group_by_refuses_unbounded() {
        group_by(count_from(0).cursor(), |x| x % 2);
    }
}
