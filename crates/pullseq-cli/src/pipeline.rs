//! Minimal YAML → pipeline parser for *linear* record pipelines.
//!
//! Example:
//! ```yaml
//! config: { default_top_k: 3 }
//! steps:
//!   - op: filter
//!     expr: "category == books"
//!   - op: scale
//!     factor: 1.5
//!   - op: take
//!     n: 100
//!   - op: top_k
//!     k: 2
//! ```
//!
//! Any number of `filter`/`scale`/`take` steps, then exactly one terminal
//! step (`top_k`, `group_by`, `find`, `collect`) as the last step.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pullseq_core::prelude::{Cursor, PipelineConfig, Sequence};
use pullseq_ops::{Collection, CursorExt, Partition};

use crate::predicate::Predicate;
use crate::record::{Field, Record};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid pipeline: {0}")]
    Invalid(String),

    #[error("invalid predicate '{expr}': {reason}")]
    Predicate { expr: String, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineDoc {
    #[serde(default)]
    pub config: Option<ConfigOverrides>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum Step {
    Filter {
        expr: String,
    },
    Scale {
        factor: f64,
    },
    Take {
        n: usize,
    },
    TopK {
        #[serde(default)]
        k: Option<usize>,
    },
    GroupBy {
        #[serde(default = "default_group_field")]
        field: String,
    },
    Find {
        expr: String,
    },
    Collect,
}

fn default_group_field() -> String {
    "category".to_string()
}

/// Pipeline-level overrides of `PipelineConfig`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub default_top_k: Option<usize>,
    pub max_pull: Option<usize>,
}

#[derive(Debug, Clone)]
pub enum Stage {
    Filter(Predicate),
    Scale(f64),
    Take(usize),
}

#[derive(Debug, Clone)]
pub enum Terminal {
    TopK(Option<usize>),
    GroupBy(Field),
    Find(Predicate),
    Collect,
}

#[derive(Debug, Clone)]
pub struct ParsedPipeline {
    pub stages: Vec<Stage>,
    pub terminal: Terminal,
    pub config: ConfigOverrides,
}

/// Result of running a pipeline, serialized as `{"<kind>": ...}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Top(Vec<Record>),
    Groups(Partition<String, Record>),
    Found(Option<usize>),
    Rows(Vec<Record>),
}

fn predicate(expr: String) -> Result<Predicate, PipelineError> {
    Predicate::parse(&expr).map_err(|reason| PipelineError::Predicate { expr, reason })
}

pub fn parse_pipeline(yaml_src: &str) -> Result<ParsedPipeline, PipelineError> {
    let doc: PipelineDoc = serde_yaml::from_str(yaml_src)?;
    let mut stages = Vec::new();
    let mut terminal = None;

    for step in doc.steps {
        if terminal.is_some() {
            return Err(PipelineError::Invalid(format!(
                "step {:?} follows the terminal step",
                step
            )));
        }
        match step {
            Step::Filter { expr } => stages.push(Stage::Filter(predicate(expr)?)),
            Step::Scale { factor } => stages.push(Stage::Scale(factor)),
            Step::Take { n } => stages.push(Stage::Take(n)),
            Step::TopK { k } => {
                if k == Some(0) {
                    return Err(PipelineError::Invalid("top_k needs k >= 1".into()));
                }
                terminal = Some(Terminal::TopK(k));
            }
            Step::GroupBy { field } => {
                let field = match Field::parse(&field) {
                    Some(f @ (Field::Name | Field::Category)) => f,
                    _ => {
                        return Err(PipelineError::Invalid(format!(
                            "group_by field must be 'name' or 'category', got '{}'",
                            field
                        )))
                    }
                };
                terminal = Some(Terminal::GroupBy(field));
            }
            Step::Find { expr } => terminal = Some(Terminal::Find(predicate(expr)?)),
            Step::Collect => terminal = Some(Terminal::Collect),
        }
    }

    let terminal = terminal.ok_or_else(|| {
        PipelineError::Invalid("last step must be one of top_k, group_by, find, collect".into())
    })?;
    Ok(ParsedPipeline {
        stages,
        terminal,
        config: doc.config.unwrap_or_default(),
    })
}

/// Apply pipeline-level overrides on top of env/default config.
pub fn apply_overrides(cfg: &mut PipelineConfig, doc: &ConfigOverrides) {
    if let Some(k) = doc.default_top_k {
        cfg.default_top_k = k;
    }
    if let Some(max) = doc.max_pull {
        cfg.max_pull = Some(max);
    }
}

/// Chain the stages over `records` and drive the terminal step.
///
/// `cfg.max_pull`, when set, caps how many staged records reach the terminal.
pub fn execute(
    pipeline: &ParsedPipeline,
    records: &Collection<Record>,
    cfg: &PipelineConfig,
) -> Outcome {
    let mut cursor: Box<dyn Cursor<Item = Record>> = Box::new(records.cursor());
    for stage in pipeline.stages.iter().cloned() {
        cursor = match stage {
            Stage::Filter(p) => Box::new(cursor.filter(move |r: &Record| p.matches(r))),
            Stage::Scale(factor) => Box::new(cursor.map(move |r: &Record| Record {
                score: r.score * factor,
                ..r.clone()
            })),
            Stage::Take(n) => Box::new(cursor.take(n)),
        };
    }
    if let Some(max) = cfg.max_pull {
        cursor = Box::new(cursor.take(max));
    }
    tracing::debug!(stages = pipeline.stages.len(), "pipeline assembled");

    match &pipeline.terminal {
        Terminal::TopK(k) => {
            let k = k.unwrap_or(cfg.default_top_k);
            Outcome::Top(cursor.top_k(|r| r.score, k))
        }
        Terminal::GroupBy(field) => {
            let field = *field;
            Outcome::Groups(cursor.group_by(move |r| {
                field.text(r).unwrap_or_default().to_string()
            }))
        }
        Terminal::Find(p) => Outcome::Found(cursor.find_index(|r| p.matches(r))),
        Terminal::Collect => Outcome::Rows(cursor.materialize()),
    }
}
