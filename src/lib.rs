#![forbid(unsafe_code)]
//! pullseq: lazy, pull-based sequences and their combinator algebra.
//!
//! Facade over the workspace crates:
//! - `pullseq-core`: the `Cursor`/`Sequence` protocol, errors, config.
//! - `pullseq-ops`: sources, `map`/`filter`/`take`, and the terminal
//!   operations `find_index`, `group_by`, `top_k`, `materialize`.
//!
//! ```
//! use pullseq::prelude::*;
//!
//! let evens = count_from(0).filter(|x: &i64| x % 2 == 0).take(3);
//! assert_eq!(evens.materialize(), vec![0, 2, 4]);
//! ```

pub use pullseq_core::{config, cursor, error, sequence, slot};
pub use pullseq_core::{violated, Bound, Cursor, Error, Phase, Result, Sequence, Slot, Violation};
pub use pullseq_ops::*;

pub mod prelude {
    pub use pullseq_core::prelude::*;
    pub use pullseq_ops::{
        count_from, find_index, group_by, materialize, top_k, try_find_index, try_group_by,
        try_top_k, Collection, CursorExt, FromIter, Generate, Once, Partition, SequenceExt, TopK,
    };
}
