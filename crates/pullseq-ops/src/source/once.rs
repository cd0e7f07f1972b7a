//! Single-use sequence around an already issued cursor.

use std::cell::Cell;

use pullseq_core::prelude::{violated, Cursor, Sequence, Violation};

/// Hands out its wrapped cursor on the first `cursor()` request and panics
/// on any later one: a cursor has exactly one consumer.
pub struct Once<C> {
    inner: Cell<Option<C>>,
}

impl<C: Cursor> Once<C> {
    pub fn new(cursor: C) -> Self {
        Self {
            inner: Cell::new(Some(cursor)),
        }
    }
}

impl<C: Cursor> Sequence for Once<C> {
    type Item = C::Item;
    type Cursor = C;

    fn cursor(&self) -> C {
        self.inner
            .take()
            .unwrap_or_else(|| violated(Violation::Reused))
    }
}
