//! Session state aggregate

use super::history::JokeHistory;
use crate::joke::{category::Category, entities::Joke, language::Language};
use crate::menu::choice::MenuChoice;

/// Everything one run of the joke session knows about itself.
///
/// Owned by the session controller for the whole run. `category` and
/// `language` can only hold members of their fixed sets because they are
/// enums; `done` only ever goes from `false` to `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    history: JokeHistory,
    category: Category,
    language: Language,
    pending_choice: Option<MenuChoice>,
    done: bool,
}

impl SessionState {
    /// Fresh state with the default category and language
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state starting from the given filters
    pub fn with_filters(category: Category, language: Language) -> Self {
        Self {
            category,
            language,
            ..Self::default()
        }
    }

    pub fn history(&self) -> &JokeHistory {
        &self.history
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Choice read on the most recent menu screen, if it was recognized
    pub fn pending_choice(&self) -> Option<MenuChoice> {
        self.pending_choice
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn record_joke(&mut self, joke: Joke) {
        self.history.push(joke);
    }

    /// Clear the history, returning the number of jokes dropped
    pub fn reset_history(&mut self) -> usize {
        self.history.clear()
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_pending_choice(&mut self, choice: Option<MenuChoice>) {
        self.pending_choice = choice;
    }

    /// Mark the session as finished. Calling it again has no further effect.
    pub fn finish(&mut self) {
        self.done = true;
    }
}
