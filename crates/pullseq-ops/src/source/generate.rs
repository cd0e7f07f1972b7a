//! Generative source: seed + successor rule.

use pullseq_core::prelude::{Bound, Cursor, Phase, Sequence};

/// Infinite sequence `seed, succ(seed), succ(succ(seed)), ...`.
///
/// The first `advance` yields the seed without calling the successor; every
/// later `advance` calls it exactly once. Only the current value is kept.
#[derive(Debug, Clone)]
pub struct Generate<T, F> {
    seed: T,
    successor: F,
}

impl<T, F> Generate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T + Clone,
{
    pub fn new(seed: T, successor: F) -> Self {
        Self { seed, successor }
    }
}

/// Counting sequence `from, from + 1, ...`.
///
/// Saturates at `i64::MAX`: once reached, every later value repeats it.
pub fn count_from(from: i64) -> Generate<i64, fn(&i64) -> i64> {
    fn succ(x: &i64) -> i64 {
        x.saturating_add(1)
    }
    Generate::new(from, succ as fn(&i64) -> i64)
}

impl<T, F> Sequence for Generate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T + Clone,
{
    type Item = T;
    type Cursor = GenerateCursor<T, F>;

    fn cursor(&self) -> GenerateCursor<T, F> {
        GenerateCursor::new(self.seed.clone(), self.successor.clone())
    }
}

pub struct GenerateCursor<T, F> {
    value: T,
    successor: F,
    phase: Phase,
}

impl<T, F> GenerateCursor<T, F>
where
    F: FnMut(&T) -> T,
{
    pub fn new(seed: T, successor: F) -> Self {
        Self {
            value: seed,
            successor,
            phase: Phase::NotStarted,
        }
    }
}

impl<T, F> Cursor for GenerateCursor<T, F>
where
    F: FnMut(&T) -> T,
{
    type Item = T;

    /// Never exhausts.
    fn advance(&mut self) -> bool {
        if self.phase == Phase::Holding {
            self.value = (self.successor)(&self.value);
        }
        self.phase = Phase::Holding;
        true
    }

    fn current(&self) -> &T {
        self.phase.require_holding();
        &self.value
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn bound(&self) -> Bound {
        Bound::Unbounded
    }
}
