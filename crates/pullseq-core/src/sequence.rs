//! `Sequence`: an immutable description that manufactures cursors.

use crate::cursor::Cursor;

/// Factory of independent cursors over the same ordered series.
///
/// Requesting a cursor performs no pulling and never disturbs a cursor
/// handed out earlier. Finite stores restart from the first element on each
/// request; single-use sequences panic on the second request.
pub trait Sequence {
    type Item;
    type Cursor: Cursor<Item = Self::Item>;

    fn cursor(&self) -> Self::Cursor;
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn cursor(&self) -> Self::Cursor {
        (**self).cursor()
    }
}
