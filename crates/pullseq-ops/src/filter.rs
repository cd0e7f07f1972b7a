//! Selection combinator.
//!
//! The skip loop in `advance` is the only look-ahead in the crate. It is a
//! plain loop over the merged `advance`, so a long run of rejected elements
//! costs iterations, not stack frames, and each element is tested once.

use pullseq_core::prelude::{Bound, Cursor, Phase, Sequence};

pub struct Filter<C, P> {
    upstream: C,
    pred: P,
    phase: Phase,
}

impl<C, P> Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    pub fn new(upstream: C, pred: P) -> Self {
        Self {
            upstream,
            pred,
            phase: Phase::NotStarted,
        }
    }
}

/// Keep only values for which `pred` returns `true`.
pub fn filter<C, P>(cursor: C, pred: P) -> Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    Filter::new(cursor, pred)
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        if self.phase == Phase::Exhausted {
            return false;
        }
        loop {
            if !self.upstream.advance() {
                self.phase = Phase::Exhausted;
                return false;
            }
            if (self.pred)(self.upstream.current()) {
                self.phase = Phase::Holding;
                return true;
            }
        }
    }

    fn current(&self) -> &C::Item {
        self.phase.require_holding();
        self.upstream.current()
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn bound(&self) -> Bound {
        self.upstream.bound()
    }
}

/// Reusable filtered sequence; each cursor gets its own copy of the predicate.
pub struct Filtered<S, P> {
    inner: S,
    pred: P,
}

impl<S, P> Filtered<S, P> {
    pub fn new(inner: S, pred: P) -> Self {
        Self { inner, pred }
    }
}

impl<S, P> Sequence for Filtered<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Cursor = Filter<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        Filter::new(self.inner.cursor(), self.pred.clone())
    }
}
