#![forbid(unsafe_code)]
//! pullseq-core: the pull protocol every lazy sequence speaks.
//!
//! Design intent:
//! - A `Cursor` has exactly one state-changing operation, `advance`. There is
//!   no peek; a value is read only while the cursor is holding one.
//! - A `Sequence` is an immutable factory of independent cursors.
//! - Programmer errors (reading an empty cursor, draining an unbounded one)
//!   panic through `error::violated`. Absence is `Option`/`bool`, never a
//!   sentinel.
//!
//! Combinators, sources and terminal operations live in `pullseq-ops`.

pub mod config;
pub mod cursor;
pub mod error;
pub mod prelude;
pub mod sequence;
pub mod slot;

pub use cursor::{Bound, Cursor, Phase};
pub use error::{violated, Error, Result, Violation};
pub use sequence::Sequence;
pub use slot::Slot;
