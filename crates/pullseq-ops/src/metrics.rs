//! Tracing hooks for terminal operations (feature: `tracing`).
//!
//! One summary event per drained cursor; nothing is emitted per element.

#[cfg(feature = "tracing")]
pub(crate) fn record_terminal(op: &'static str, pulled: usize, produced: usize) {
    tracing::trace!(op, pulled, produced, "terminal operation finished");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn record_terminal(_op: &'static str, _pulled: usize, _produced: usize) { /* no-op */
}
