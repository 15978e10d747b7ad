//! Presentation layer for jokebot
//!
//! This crate contains CLI definitions, console formatting, the console
//! session view, and line-based input.

pub mod cli;
pub mod input;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use input::line_reader::LineReader;
pub use output::console::ConsoleFormatter;
pub use output::view::ConsoleView;
