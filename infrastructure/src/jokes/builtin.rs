//! Joke source backed by the built-in catalog

use super::catalog;
use jokebot_application::{GenerationError, JokeSource};
use jokebot_domain::{Category, Language};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// [`JokeSource`] that picks a random joke from the embedded catalog.
///
/// Supported combinations: every language has `neutral` and `all`;
/// only English and Spanish have `chuck`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinJokeSource;

impl BuiltinJokeSource {
    pub fn new() -> Self {
        Self
    }

    fn pick<R: Rng + ?Sized>(
        rng: &mut R,
        category: Category,
        language: Language,
    ) -> Result<&'static str, GenerationError> {
        let pool: Vec<&'static str> = catalog::for_language(language)
            .lists(category)
            .into_iter()
            .flatten()
            .copied()
            .collect();
        pool.choose(rng)
            .copied()
            .ok_or(GenerationError::Unsupported { category, language })
    }
}

impl JokeSource for BuiltinJokeSource {
    fn fetch_text(&self, category: Category, language: Language) -> Result<String, GenerationError> {
        let text = Self::pick(&mut rand::thread_rng(), category, language)?;
        debug!("Picked {} joke in {}", category, language.code());
        Ok(text.to_string())
    }
}
