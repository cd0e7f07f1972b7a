//! The cursor protocol.
//!
//! A cursor is always in exactly one `Phase`:
//!
//! ```text
//! NotStarted --advance--> Holding | Exhausted
//! Holding    --advance--> Holding | Exhausted
//! Exhausted  --advance--> Exhausted            (absorbing)
//! ```
//!
//! `advance` both moves and reports; there is no separate "has more" or
//! "peek". A wrapping combinator therefore never caches a look-ahead value
//! and sees every upstream element exactly once.

use serde::{Deserialize, Serialize};

use crate::error::{violated, Violation};

/// Externally visible cursor state, without the held value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    NotStarted,
    Holding,
    Exhausted,
}

impl Phase {
    /// Panics unless the cursor is holding a value.
    #[track_caller]
    pub fn require_holding(self) {
        match self {
            Phase::Holding => {}
            Phase::NotStarted => violated(Violation::NotStarted),
            Phase::Exhausted => violated(Violation::Exhausted),
        }
    }
}

/// Whether a cursor is known to terminate.
///
/// Sources declare it; `map`/`filter` inherit it; `take` always makes it
/// `Finite`. Draining terminal operations refuse `Unbounded` cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bound {
    Finite,
    Unbounded,
}

impl Bound {
    /// Panics if draining `op` could never return.
    #[track_caller]
    pub fn require_finite(self, op: &'static str) {
        if self == Bound::Unbounded {
            violated(Violation::Unbounded { op });
        }
    }
}

/// Single-consumer, pull-one-at-a-time handle over a sequence.
///
/// Invariants:
/// - `advance` returns `true` iff the cursor is now `Holding`.
/// - Once `advance` has returned `false`, it returns `false` forever and
///   performs no further upstream work.
/// - `current` is only valid while `Holding`; anything else panics.
pub trait Cursor {
    type Item;

    /// Try to produce the next element.
    fn advance(&mut self) -> bool;

    /// The held element.
    fn current(&self) -> &Self::Item;

    fn phase(&self) -> Phase;

    fn bound(&self) -> Bound;
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn current(&self) -> &Self::Item {
        (**self).current()
    }

    fn phase(&self) -> Phase {
        (**self).phase()
    }

    fn bound(&self) -> Bound {
        (**self).bound()
    }
}

/// Lets a caller drive a cursor through a terminal operation and keep it.
impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn current(&self) -> &Self::Item {
        (**self).current()
    }

    fn phase(&self) -> Phase {
        (**self).phase()
    }

    fn bound(&self) -> Bound {
        (**self).bound()
    }
}
