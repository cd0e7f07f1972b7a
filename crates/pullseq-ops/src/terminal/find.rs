use pullseq_core::prelude::Cursor;

use crate::metrics::record_terminal;

/// Zero-based position of the first value accepted by `pred`.
///
/// Pulls nothing past the match, so an unbounded cursor with an eventual
/// match terminates.
pub fn find_index<C, P>(mut cursor: C, mut pred: P) -> Option<usize>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    let mut position = 0;
    while cursor.advance() {
        if pred(cursor.current()) {
            record_terminal("find_index", position + 1, 1);
            return Some(position);
        }
        position += 1;
    }
    record_terminal("find_index", position, 0);
    None
}

/// `find_index` with a fallible predicate.
pub fn try_find_index<C, P, E>(mut cursor: C, mut pred: P) -> Result<Option<usize>, E>
where
    C: Cursor,
    P: FnMut(&C::Item) -> Result<bool, E>,
{
    let mut position = 0;
    while cursor.advance() {
        if pred(cursor.current())? {
            record_terminal("try_find_index", position + 1, 1);
            return Ok(Some(position));
        }
        position += 1;
    }
    record_terminal("try_find_index", position, 0);
    Ok(None)
}
