#![forbid(unsafe_code)]
//! pullseq-ops: sources, lazy combinators and terminal operations.
//!
//! Design intent:
//! - Every adapter wraps exactly one upstream cursor, owns it, and speaks the
//!   same `Cursor` protocol, so chains need no new vocabulary.
//! - Constructing an adapter does no work; callbacks run only inside
//!   `advance`, once per element.
//! - Terminal operations are plain functions over a cursor; `ext` puts them
//!   behind method syntax for cursors and sequences.

pub mod ext;
pub mod filter;
pub mod iter;
pub mod map;
mod metrics;
pub mod partition;
pub mod source;
pub mod take;
pub mod terminal;

pub use ext::{CursorExt, SequenceExt};
pub use filter::{filter, Filter, Filtered};
pub use iter::Values;
pub use map::{map, Map, Mapped};
pub use partition::Partition;
pub use source::{count_from, Collection, FromIter, Generate, Once};
pub use take::{take, Take, Taken};
pub use terminal::{
    find_index, group_by, materialize, top_k, try_find_index, try_group_by, try_top_k, TopK,
};
