//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("No value supplied for placeholder '{{{0}}}'")]
    MissingPlaceholder(String),

    #[error("Unbalanced brace in template at byte {0}")]
    UnbalancedBrace(usize),
}
