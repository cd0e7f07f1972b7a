//! Bounded top-K by score.
//!
//! Single pass, online: a buffer of at most `k` entries kept in descending
//! score order. Each element is scored once and costs one binary search plus
//! an O(k) insert; the input is never sorted as a whole.
//!
//! Ties are stable. A new element lands after every incumbent whose score is
//! greater than or equal to its own, so the first element seen with a given
//! score stays in front and a later one only displaces strictly lower
//! scores. When the buffer is full, an element whose landing position would
//! be `k` never enters.

use pullseq_core::prelude::{violated, Cursor, Violation};

use crate::metrics::record_terminal;

/// Online accumulator behind `top_k`.
///
/// Scores are `PartialOrd` so plain floats work; with incomparable scores
/// (NaN) the ranking is unspecified.
#[derive(Debug, Clone)]
pub struct TopK<R, T> {
    k: usize,
    buf: Vec<(R, T)>,
}

impl<R: PartialOrd, T> TopK<R, T> {
    /// Panics if `k == 0`.
    #[track_caller]
    pub fn new(k: usize) -> Self {
        if k == 0 {
            violated(Violation::ZeroBound);
        }
        Self { k, buf: Vec::new() }
    }

    /// Where an element with `score` would land, or `None` if it cannot enter.
    pub fn position_for(&self, score: &R) -> Option<usize> {
        let pos = self.buf.partition_point(|(s, _)| !(s < score));
        (pos < self.k).then_some(pos)
    }

    /// Offer a scored element. Returns whether it entered the buffer.
    pub fn offer(&mut self, score: R, item: T) -> bool {
        self.offer_with(score, || item)
    }

    /// Like `offer`, but only builds the element when it is admitted.
    pub fn offer_with(&mut self, score: R, item: impl FnOnce() -> T) -> bool {
        let Some(pos) = self.position_for(&score) else {
            return false;
        };
        self.buf.insert(pos, (score, item()));
        if self.buf.len() > self.k {
            self.buf.pop();
        }
        true
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Lowest retained score, once the buffer is full.
    pub fn threshold(&self) -> Option<&R> {
        if self.buf.len() == self.k {
            self.buf.last().map(|(s, _)| s)
        } else {
            None
        }
    }

    /// Retained elements, highest score first.
    pub fn into_vec(self) -> Vec<T> {
        self.buf.into_iter().map(|(_, t)| t).collect()
    }

    pub fn into_scored(self) -> Vec<(R, T)> {
        self.buf
    }
}

/// The `k` highest-scoring values, in descending score order.
///
/// Panics if `k == 0` or the cursor is unbounded, before pulling anything.
pub fn top_k<C, R, F>(mut cursor: C, mut score: F, k: usize) -> Vec<C::Item>
where
    C: Cursor,
    C::Item: Clone,
    R: PartialOrd,
    F: FnMut(&C::Item) -> R,
{
    let mut top = TopK::new(k);
    cursor.bound().require_finite("top_k");

    let mut pulled = 0;
    while cursor.advance() {
        pulled += 1;
        let item = cursor.current();
        top.offer_with(score(item), || item.clone());
    }
    record_terminal("top_k", pulled, top.len());
    top.into_vec()
}

/// `top_k` with a fallible scoring function.
pub fn try_top_k<C, R, F, E>(mut cursor: C, mut score: F, k: usize) -> Result<Vec<C::Item>, E>
where
    C: Cursor,
    C::Item: Clone,
    R: PartialOrd,
    F: FnMut(&C::Item) -> Result<R, E>,
{
    let mut top = TopK::new(k);
    cursor.bound().require_finite("try_top_k");

    let mut pulled = 0;
    while cursor.advance() {
        pulled += 1;
        let item = cursor.current();
        top.offer_with(score(item)?, || item.clone());
    }
    record_terminal("try_top_k", pulled, top.len());
    Ok(top.into_vec())
}
