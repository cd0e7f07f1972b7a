//! Source adapters: where pulled values originate.
//!
//! - `Collection`: finite shared store, restartable.
//! - `Generate`: seed + successor, infinite, O(1) memory.
//! - `FromIter`: any `Iterator`, for external collaborators.
//! - `Once`: an already issued cursor, handed out exactly once.

pub mod collection;
pub mod generate;
pub mod iter;
pub mod once;

pub use collection::{Collection, CollectionCursor};
pub use generate::{count_from, Generate, GenerateCursor};
pub use iter::FromIter;
pub use once::Once;
