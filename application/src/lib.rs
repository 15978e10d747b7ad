//! Application layer for jokebot
//!
//! This crate contains the session controller, port definitions, and
//! session configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{SessionConfig, UnknownChoicePolicy};
pub use ports::{
    joke_source::{GenerationError, JokeSource},
    line_input::LineInput,
    prompt_store::{PromptStore, PromptStoreError},
    session_logger::{NoSessionLogger, SessionEvent, SessionLogger},
    session_view::{SelectionTarget, SessionView},
};
pub use use_cases::session_controller::{SessionController, SessionSummary};
