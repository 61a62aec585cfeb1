use thiserror::Error;

/// Input and lookup errors raised by the resolver, lookup and stat helpers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DexError {
    /// The attacking type has no record
    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Search query cannot be empty")]
    EmptyQuery,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
