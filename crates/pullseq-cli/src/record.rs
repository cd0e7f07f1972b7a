//! The demo record shape and its JSON-lines loader.

use std::fs;
use std::path::Path;

use pullseq_core::prelude::{Error, Result};
use pullseq_ops::Collection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub score: f64,
    pub category: String,
}

/// Record fields addressable from pipeline expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Score,
    Category,
}

impl Field {
    pub fn parse(s: &str) -> Option<Field> {
        match s {
            "name" => Some(Field::Name),
            "score" => Some(Field::Score),
            "category" => Some(Field::Category),
            _ => None,
        }
    }

    /// Text of a string field; `None` for `score`.
    pub fn text<'a>(&self, r: &'a Record) -> Option<&'a str> {
        match self {
            Field::Name => Some(r.name.as_str()),
            Field::Category => Some(r.category.as_str()),
            Field::Score => None,
        }
    }
}

/// Parse one JSON object per non-blank line.
pub fn parse_records(src: &str) -> Result<Vec<Record>> {
    src.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|e| Error::Input(format!("line {}: {}", i + 1, e)))
        })
        .collect()
}

pub fn load_records(path: &Path) -> Result<Collection<Record>> {
    let src = fs::read_to_string(path)
        .map_err(|e| Error::Input(format!("{}: {}", path.display(), e)))?;
    let records = parse_records(&src)?;
    tracing::debug!(records = records.len(), path = %path.display(), "loaded input");
    Ok(Collection::from(records))
}
