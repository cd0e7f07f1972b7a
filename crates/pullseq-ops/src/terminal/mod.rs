//! Terminal operations: drive a cursor and return a concrete result.
//!
//! `find_index` stops at the first match and is safe on unbounded cursors.
//! `group_by`, `top_k` and `materialize` drain to exhaustion and panic up
//! front on a cursor whose `bound()` is `Unbounded`.
//!
//! The `try_` variants take fallible callbacks and return the first error
//! unchanged, without pulling any further.

pub mod find;
pub mod group;
pub mod materialize;
pub mod topk;

pub use find::{find_index, try_find_index};
pub use group::{group_by, try_group_by};
pub use materialize::materialize;
pub use topk::{top_k, try_top_k, TopK};
