//! Simple record predicates of the form `field OP literal`,
//! where OP ∈ {==, !=, <, <=, >, >=}.

use crate::record::{Field, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

#[derive(Debug, Clone, PartialEq)]
enum Literal {
    Num(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    field: Field,
    op: CmpOp,
    literal: Literal,
}

impl Predicate {
    /// Parse a predicate like `"score > 5"` or `"category == books"`.
    pub fn parse(expr: &str) -> Result<Predicate, String> {
        let (col, op, lit) = split_simple_predicate(expr)?;
        let field = Field::parse(&col).ok_or_else(|| format!("unknown field '{}'", col))?;
        let literal = match field {
            Field::Score => Literal::Num(
                lit.parse::<f64>()
                    .map_err(|_| format!("cannot parse '{}' as a number", lit))?,
            ),
            Field::Name | Field::Category => Literal::Text(lit),
        };
        Ok(Predicate { field, op, literal })
    }

    pub fn matches(&self, r: &Record) -> bool {
        match (&self.literal, self.field.text(r)) {
            (Literal::Num(lit), None) => compare_f64(r.score, *lit, self.op),
            (Literal::Text(lit), Some(text)) => compare_str(text, lit, self.op),
            _ => false,
        }
    }
}

/// Split `"col op literal"`; two-char operators are tried first.
fn split_simple_predicate(expr: &str) -> Result<(String, CmpOp, String), String> {
    let ops = [
        ("==", CmpOp::Eq),
        ("!=", CmpOp::Ne),
        ("<=", CmpOp::Le),
        (">=", CmpOp::Ge),
        ("<", CmpOp::Lt),
        (">", CmpOp::Gt),
    ];

    for (token, op) in ops {
        if let Some(pos) = expr.find(token) {
            let col = expr[..pos].trim().to_string();
            let lit = expr[pos + token.len()..].trim().to_string();
            if col.is_empty() {
                return Err(format!("missing field in '{}'", expr));
            }
            return Ok((col, op, lit));
        }
    }

    Err(format!("unparseable predicate: {}", expr))
}

fn compare_f64(v: f64, lit: f64, op: CmpOp) -> bool {
    match op {
        CmpOp::Eq => (v - lit).abs() < f64::EPSILON,
        CmpOp::Ne => (v - lit).abs() >= f64::EPSILON,
        CmpOp::Lt => v < lit,
        CmpOp::Le => v <= lit,
        CmpOp::Gt => v > lit,
        CmpOp::Ge => v >= lit,
    }
}

fn compare_str(v: &str, lit: &str, op: CmpOp) -> bool {
    match op {
        CmpOp::Eq => v == lit,
        CmpOp::Ne => v != lit,
        CmpOp::Lt => v < lit,
        CmpOp::Le => v <= lit,
        CmpOp::Gt => v > lit,
        CmpOp::Ge => v >= lit,
    }
}
