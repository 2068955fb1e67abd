use thiserror::Error;

/// Errors produced by type parsing and lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("unknown media category: {0}")]
    UnknownCategory(String),

    #[error("unknown media kind: {0}")]
    UnknownKind(String),
}
