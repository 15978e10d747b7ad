//! Prompt file adapters

mod yaml_store;

pub use yaml_store::{YamlPromptStore, format_prompt};
