//! Bounding combinator.
//!
//! After `n` successful advances `take` reports exhaustion without asking
//! upstream again, which is what makes an infinite source safe to drain.

use pullseq_core::prelude::{Bound, Cursor, Phase, Sequence};

pub struct Take<C> {
    upstream: C,
    remaining: usize,
    phase: Phase,
}

impl<C: Cursor> Take<C> {
    pub fn new(upstream: C, n: usize) -> Self {
        Self {
            upstream,
            remaining: n,
            phase: Phase::NotStarted,
        }
    }
}

/// Yield at most `n` values from `cursor`.
pub fn take<C: Cursor>(cursor: C, n: usize) -> Take<C> {
    Take::new(cursor, n)
}

impl<C: Cursor> Cursor for Take<C> {
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        if self.phase == Phase::Exhausted {
            return false;
        }
        if self.remaining == 0 || !self.upstream.advance() {
            self.phase = Phase::Exhausted;
            return false;
        }
        self.remaining -= 1;
        self.phase = Phase::Holding;
        true
    }

    fn current(&self) -> &C::Item {
        self.phase.require_holding();
        self.upstream.current()
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn bound(&self) -> Bound {
        Bound::Finite
    }
}

/// Reusable bounded sequence.
pub struct Taken<S> {
    inner: S,
    n: usize,
}

impl<S> Taken<S> {
    pub fn new(inner: S, n: usize) -> Self {
        Self { inner, n }
    }
}

impl<S: Sequence> Sequence for Taken<S> {
    type Item = S::Item;
    type Cursor = Take<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        Take::new(self.inner.cursor(), self.n)
    }
}
