//! Console output
//!
//! [`console::ConsoleFormatter`] builds the text; [`view::ConsoleView`]
//! prints it in response to session events.

pub mod console;
pub mod view;
