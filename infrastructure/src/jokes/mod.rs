//! Joke source adapters
//!
//! - [`BuiltinJokeSource`]: random pick from the joke catalog compiled into the binary

mod builtin;
mod catalog;

pub use builtin::BuiltinJokeSource;
