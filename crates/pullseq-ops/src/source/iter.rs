//! Adapter from `std::iter::Iterator` into the cursor protocol.

use pullseq_core::prelude::{Bound, Cursor, Phase, Slot};

/// Pulls from an iterator one element per `advance`.
///
/// The iterator is never polled again after it first returns `None`, so
/// non-fused iterators still give an absorbing `Exhausted`.
pub struct FromIter<I: Iterator> {
    iter: I,
    slot: Slot<I::Item>,
    bound: Bound,
}

impl<I: Iterator> FromIter<I> {
    /// Wrap an iterator the caller knows to be finite.
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self::with_bound(iter, Bound::Finite)
    }

    /// Wrap an iterator that may never end (e.g. `0..`, a socket reader).
    pub fn unbounded(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self::with_bound(iter, Bound::Unbounded)
    }

    fn with_bound(iter: impl IntoIterator<IntoIter = I>, bound: Bound) -> Self {
        Self {
            iter: iter.into_iter(),
            slot: Slot::NotStarted,
            bound,
        }
    }
}

impl<I: Iterator> Cursor for FromIter<I> {
    type Item = I::Item;

    fn advance(&mut self) -> bool {
        if self.slot.is_exhausted() {
            return false;
        }
        match self.iter.next() {
            Some(v) => {
                self.slot.hold(v);
                true
            }
            None => {
                self.slot.exhaust();
                false
            }
        }
    }

    fn current(&self) -> &I::Item {
        self.slot.get()
    }

    fn phase(&self) -> Phase {
        self.slot.phase()
    }

    fn bound(&self) -> Bound {
        self.bound
    }
}
