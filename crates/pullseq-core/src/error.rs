use thiserror::Error;

/// Canonical result for recoverable failures.
pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable errors raised around the core: configuration and input
/// decoding. Nothing in the pull protocol itself returns these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    Input(String),

    #[error("serialization error: {0}")]
    Serde(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serde(e.to_string())
    }
}

/// Broken caller contracts. These are bugs, not outcomes, so they are never
/// returned; `violated` turns them into a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("cursor read before the first successful advance")]
    NotStarted,

    #[error("cursor read after exhaustion")]
    Exhausted,

    #[error("{op} would drain an unbounded cursor; bound it with take first")]
    Unbounded { op: &'static str },

    #[error("top_k requires k >= 1")]
    ZeroBound,

    #[error("single-use sequence already handed out its cursor")]
    Reused,
}

/// Fail fast on a broken precondition.
#[cold]
#[track_caller]
pub fn violated(v: Violation) -> ! {
    panic!("precondition violated: {v}")
}
