//! Collection source over an immutable, shared backing store.

use std::sync::Arc;

use pullseq_core::prelude::{Bound, Cursor, Phase, Sequence, Slot};

/// Ordered, finite store. Every `cursor()` walks it front to back from the
/// first element; cursors share the store and never mutate it.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    store: Arc<[T]>,
}

impl<T> Collection<T> {
    pub fn new(store: impl Into<Arc<[T]>>) -> Self {
        Self {
            store: store.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.store
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(v: Vec<T>) -> Self {
        Self::new(v)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Sequence for Collection<T> {
    type Item = T;
    type Cursor = CollectionCursor<T>;

    fn cursor(&self) -> CollectionCursor<T> {
        CollectionCursor {
            store: Arc::clone(&self.store),
            pos: Slot::NotStarted,
        }
    }
}

/// Position into a shared store; holds an index, not a copy.
#[derive(Debug)]
pub struct CollectionCursor<T> {
    store: Arc<[T]>,
    pos: Slot<usize>,
}

impl<T> Cursor for CollectionCursor<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        let next = match self.pos {
            Slot::NotStarted => 0,
            Slot::Holding(i) => i + 1,
            Slot::Exhausted => return false,
        };
        if next < self.store.len() {
            self.pos.hold(next);
            true
        } else {
            self.pos.exhaust();
            false
        }
    }

    fn current(&self) -> &T {
        &self.store[*self.pos.get()]
    }

    fn phase(&self) -> Phase {
        self.pos.phase()
    }

    fn bound(&self) -> Bound {
        Bound::Finite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walks_front_to_back_then_stays_exhausted() {
        let seq = Collection::from(vec!["a", "b"]);
        let mut c = seq.cursor();
        assert_eq!(c.phase(), Phase::NotStarted);
        assert!(c.advance());
        assert_eq!(*c.current(), "a");
        assert!(c.advance());
        assert_eq!(*c.current(), "b");
        assert!(!c.advance());
        assert!(!c.advance());
        assert_eq!(c.phase(), Phase::Exhausted);
    }

    #[test]
    fn test_new_cursor_restarts_without_touching_old_one() {
        let seq: Collection<i32> = (1..=3).collect();
        let mut first = seq.cursor();
        first.advance();
        first.advance();

        let mut second = seq.cursor();
        assert!(second.advance());
        assert_eq!(*second.current(), 1);
        assert_eq!(*first.current(), 2);
    }

    #[test]
    fn test_empty_store_exhausts_immediately() {
        let seq: Collection<u8> = Collection::from(Vec::new());
        let mut c = seq.cursor();
        assert!(!c.advance());
        assert_eq!(c.phase(), Phase::Exhausted);
    }
}
