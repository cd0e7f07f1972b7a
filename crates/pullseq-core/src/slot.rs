//! `Slot<T>`: the three cursor states with the held value inline.
//!
//! Cursors that own their output (sources, `map`) store it here; cursors
//! that forward an upstream value (`filter`, `take`) only track a `Phase`.

use crate::cursor::Phase;
use crate::error::{violated, Violation};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Slot<T> {
    #[default]
    NotStarted,
    Holding(T),
    Exhausted,
}

impl<T> Slot<T> {
    pub fn phase(&self) -> Phase {
        match self {
            Slot::NotStarted => Phase::NotStarted,
            Slot::Holding(_) => Phase::Holding,
            Slot::Exhausted => Phase::Exhausted,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Slot::Exhausted)
    }

    /// Replace whatever was held with `value`.
    pub fn hold(&mut self, value: T) {
        *self = Slot::Holding(value);
    }

    /// Drop the held value and enter the absorbing state.
    pub fn exhaust(&mut self) {
        *self = Slot::Exhausted;
    }

    /// The held value; panics outside `Holding`.
    #[track_caller]
    pub fn get(&self) -> &T {
        match self {
            Slot::Holding(v) => v,
            Slot::NotStarted => violated(Violation::NotStarted),
            Slot::Exhausted => violated(Violation::Exhausted),
        }
    }
}
