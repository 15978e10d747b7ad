//! Jokes and the filters used to pick them.
//!
//! - [`category::Category`]: fixed set of joke categories
//! - [`language::Language`]: fixed set of supported language codes
//! - [`entities::Joke`]: a joke tagged with the category it was fetched under

pub mod category;
pub mod entities;
pub mod language;
