//! Configuration file loading for jokebot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `JOKEBOT_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./jokebot.toml` or `./.jokebot.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/jokebot/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLoggingConfig, FileOutputConfig, FilePromptsConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;
