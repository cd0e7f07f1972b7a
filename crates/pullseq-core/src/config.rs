//! Front-end configuration that downstream binaries can serialize/deserialize.
//!
//! The pull protocol itself takes no configuration; these knobs feed the
//! defaults a front end applies when it assembles a pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// `k` used by a top-k step that does not name its own bound.
    pub default_top_k: usize,

    /// Safety bound on how many records a pipeline hands to its terminal
    /// step; also the default run length of an unbounded counter.
    pub max_pull: Option<usize>,

    /// `tracing` filter directive (e.g. `"warn"`, `"pullseq_ops=trace"`).
    pub log_filter: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_top_k: 10,
            max_pull: None,
            log_filter: "warn".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `PULLSEQ_TOP_K`: default top-k bound
    /// - `PULLSEQ_MAX_PULL`: safety bound on records pulled
    /// - `PULLSEQ_LOG`: tracing filter directive
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(s) = lookup("PULLSEQ_TOP_K") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.default_top_k = v;
            }
        }

        if let Some(s) = lookup("PULLSEQ_MAX_PULL") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.max_pull = Some(v);
            }
        }

        if let Some(s) = lookup("PULLSEQ_LOG") {
            cfg.log_filter = s;
        }

        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_top_k == 0 {
            return Err(Error::Config("default_top_k must be at least 1".into()));
        }
        if self.max_pull == Some(0) {
            return Err(Error::Config("max_pull must be at least 1 when set".into()));
        }
        Ok(())
    }
}
