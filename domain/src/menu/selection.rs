//! Index-based selection from a fixed list

use thiserror::Error;

/// Why a typed selection was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{index} is outside 0..{len}")]
    OutOfRange { index: i64, len: usize },
}

impl SelectionError {
    /// Short tag for logs and transcripts
    pub fn kind(&self) -> &'static str {
        match self {
            SelectionError::NotANumber(_) => "not_a_number",
            SelectionError::OutOfRange { .. } => "out_of_range",
        }
    }
}

/// Parse `raw` as an index into a list of `len` entries.
///
/// Whitespace around the number is ignored. An empty line counts as not a
/// number. Negative numbers parse but are out of range.
pub fn select_index(raw: &str, len: usize) -> Result<usize, SelectionError> {
    let trimmed = raw.trim();
    let index: i64 = trimmed
        .parse()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;

    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(SelectionError::OutOfRange { index, len })
}
