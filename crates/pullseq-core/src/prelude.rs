//! Convenient re-exports for downstream crates.

pub use crate::config::PipelineConfig;
pub use crate::cursor::{Bound, Cursor, Phase};
pub use crate::error::{violated, Error, Result, Violation};
pub use crate::sequence::Sequence;
pub use crate::slot::Slot;
