//! Transform combinator.

use std::marker::PhantomData;

use pullseq_core::prelude::{Bound, Cursor, Phase, Sequence, Slot};

/// Applies `f` to each upstream value, exactly once per successful upstream
/// advance. Nothing runs until the first `advance`.
pub struct Map<C, F, U> {
    upstream: C,
    f: F,
    slot: Slot<U>,
}

impl<C, F, U> Map<C, F, U>
where
    C: Cursor,
    F: FnMut(&C::Item) -> U,
{
    pub fn new(upstream: C, f: F) -> Self {
        Self {
            upstream,
            f,
            slot: Slot::NotStarted,
        }
    }
}

/// Wrap `cursor` so each held value is `f(upstream value)`.
pub fn map<C, F, U>(cursor: C, f: F) -> Map<C, F, U>
where
    C: Cursor,
    F: FnMut(&C::Item) -> U,
{
    Map::new(cursor, f)
}

impl<C, F, U> Cursor for Map<C, F, U>
where
    C: Cursor,
    F: FnMut(&C::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) -> bool {
        if self.slot.is_exhausted() {
            return false;
        }
        if self.upstream.advance() {
            let out = (self.f)(self.upstream.current());
            self.slot.hold(out);
            true
        } else {
            self.slot.exhaust();
            false
        }
    }

    fn current(&self) -> &U {
        self.slot.get()
    }

    fn phase(&self) -> Phase {
        self.slot.phase()
    }

    fn bound(&self) -> Bound {
        self.upstream.bound()
    }
}

/// Reusable mapped sequence; each cursor gets its own copy of `f`.
pub struct Mapped<S, F, U> {
    inner: S,
    f: F,
    _out: PhantomData<fn() -> U>,
}

impl<S, F, U> Mapped<S, F, U>
where
    S: Sequence,
    F: FnMut(&S::Item) -> U + Clone,
{
    pub fn new(inner: S, f: F) -> Self {
        Self {
            inner,
            f,
            _out: PhantomData,
        }
    }
}

impl<S, F, U> Sequence for Mapped<S, F, U>
where
    S: Sequence,
    F: FnMut(&S::Item) -> U + Clone,
{
    type Item = U;
    type Cursor = Map<S::Cursor, F, U>;

    fn cursor(&self) -> Self::Cursor {
        Map::new(self.inner.cursor(), self.f.clone())
    }
}
