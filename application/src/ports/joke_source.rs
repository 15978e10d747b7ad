//! Joke source port
//!
//! Defines the interface for whatever produces joke text.

use jokebot_domain::{Category, Language};
use thiserror::Error;

/// Errors a joke source can report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("No {category} jokes are available in {}", .language.name())]
    Unsupported {
        category: Category,
        language: Language,
    },
}

/// Produces the text of a joke for a category and language.
///
/// Implementations decide which combinations they support and report the
/// rest as [`GenerationError::Unsupported`].
pub trait JokeSource {
    fn fetch_text(&self, category: Category, language: Language) -> Result<String, GenerationError>;
}

impl<F> JokeSource for F
where
    F: Fn(Category, Language) -> Result<String, GenerationError>,
{
    fn fetch_text(&self, category: Category, language: Language) -> Result<String, GenerationError> {
        self(category, language)
    }
}
