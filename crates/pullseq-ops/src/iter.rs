//! Bridge from a cursor back into `std::iter::Iterator`.

use std::iter::FusedIterator;

use pullseq_core::prelude::Cursor;

/// Yields a clone of each value the cursor produces.
pub struct Values<C> {
    cursor: C,
}

impl<C: Cursor> Values<C> {
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C> Iterator for Values<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.cursor.advance() {
            Some(self.cursor.current().clone())
        } else {
            None
        }
    }
}

impl<C> FusedIterator for Values<C>
where
    C: Cursor,
    C::Item: Clone,
{
}
