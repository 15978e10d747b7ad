//! Domain layer for jokebot
//!
//! This crate contains the session state, menu routing, and joke value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A session is one run of the joke loop, from the first menu to the exit
//! screen. Its [`SessionState`] holds the joke history, the active
//! [`Category`] and [`Language`], and whether the session is finished.
//!
//! ## Screens
//!
//! The loop moves between a fixed set of [`Screen`]s. The menu reads a
//! [`MenuChoice`] token and routes to one action screen; every action
//! screen returns to the menu, except `Exit`.

pub mod config;
pub mod core;
pub mod joke;
pub mod menu;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode};
pub use core::error::DomainError;
pub use joke::{category::Category, entities::Joke, language::Language};
pub use menu::{
    choice::MenuChoice,
    screen::Screen,
    selection::{SelectionError, select_index},
};
pub use prompt::messages::{PromptMessages, fill_placeholders};
pub use session::{history::JokeHistory, state::SessionState};
