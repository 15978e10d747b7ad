//! YAML-backed prompt store
//!
//! The prompt file is a mapping from prompt name to a `system`/`user` pair:
//!
//! ```yaml
//! joke_teller:
//!   system: You are a friendly comedian.
//!   user: Tell me a {category} joke in {language}.
//! ```

use jokebot_application::{PromptStore, PromptStoreError};
use jokebot_domain::{DomainError, PromptMessages};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prompt store loaded from a YAML file
#[derive(Debug, Clone)]
pub struct YamlPromptStore {
    source_name: String,
    prompts: BTreeMap<String, PromptMessages>,
}

impl YamlPromptStore {
    /// Read and parse the prompt file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PromptStoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PromptStoreError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let store = Self::from_yaml(&content, path.display().to_string())?;
        debug!(
            "Loaded {} prompts from {}",
            store.prompts.len(),
            path.display()
        );
        Ok(store)
    }

    /// Parse prompts from YAML text; `source_name` is used in error messages
    pub fn from_yaml(
        content: &str,
        source_name: impl Into<String>,
    ) -> Result<Self, PromptStoreError> {
        let source_name = source_name.into();
        if content.trim().is_empty() {
            return Ok(Self {
                source_name,
                prompts: BTreeMap::new(),
            });
        }

        let prompts: BTreeMap<String, PromptMessages> =
            serde_yaml::from_str(content).map_err(|e| PromptStoreError::Parse {
                path: source_name.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            source_name,
            prompts,
        })
    }

    /// Default prompt file in the working directory
    pub fn default_path() -> PathBuf {
        PathBuf::from("prompts.yaml")
    }
}

impl PromptStore for YamlPromptStore {
    fn get_prompt(&self, name: &str) -> Result<PromptMessages, PromptStoreError> {
        self.prompts
            .get(name)
            .cloned()
            .ok_or_else(|| PromptStoreError::NotFound {
                name: name.to_string(),
                source_name: self.source_name.clone(),
            })
    }

    fn prompt_names(&self) -> Vec<String> {
        self.prompts.keys().cloned().collect()
    }
}

/// Fill the user message of `messages` with `vars`
pub fn format_prompt(
    messages: &PromptMessages,
    vars: &HashMap<String, String>,
) -> Result<PromptMessages, DomainError> {
    messages.format(vars)
}
