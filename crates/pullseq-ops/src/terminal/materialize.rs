use pullseq_core::prelude::Cursor;

use crate::metrics::record_terminal;

/// Collect every value in pull order. Requires a finite cursor.
pub fn materialize<C>(mut cursor: C) -> Vec<C::Item>
where
    C: Cursor,
    C::Item: Clone,
{
    cursor.bound().require_finite("materialize");

    let mut out = Vec::new();
    while cursor.advance() {
        out.push(cursor.current().clone());
    }
    record_terminal("materialize", out.len(), out.len());
    out
}
