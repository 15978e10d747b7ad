//! Infrastructure layer for jokebot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod jokes;
pub mod logging;
pub mod prompts;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLoggingConfig, FileOutputConfig, FilePromptsConfig,
    FileSessionConfig,
};
pub use jokes::BuiltinJokeSource;
pub use logging::JsonlSessionLogger;
pub use prompts::{YamlPromptStore, format_prompt};
