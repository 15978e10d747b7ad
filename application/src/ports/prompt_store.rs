//! Prompt store port
//!
//! Named system/user prompt pairs kept outside the binary.

use jokebot_domain::PromptMessages;
use thiserror::Error;

/// Errors that can occur while looking up a prompt
#[derive(Error, Debug)]
pub enum PromptStoreError {
    #[error("Prompt '{name}' not found in {source_name}")]
    NotFound { name: String, source_name: String },

    #[error("Failed to read prompt file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse prompt file {path}: {message}")]
    Parse { path: String, message: String },
}

impl PromptStoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PromptStoreError::NotFound { .. })
    }
}

/// Lookup of prompt messages by name
pub trait PromptStore {
    /// Get the prompt called `name`, failing with `NotFound` if it is absent
    fn get_prompt(&self, name: &str) -> Result<PromptMessages, PromptStoreError>;

    /// Names of every prompt in the store, sorted
    fn prompt_names(&self) -> Vec<String>;
}
