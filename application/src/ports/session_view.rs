//! Session view port
//!
//! Defines how the session controller reports what happened to the user.

use crate::ports::joke_source::GenerationError;
use jokebot_domain::{Category, Joke, Language, SelectionError, SessionState};

/// Which sub-menu a rejected selection was typed into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTarget {
    Category,
    Language,
}

impl SelectionTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionTarget::Category => "category",
            SelectionTarget::Language => "language",
        }
    }
}

/// Callbacks for everything the user should see during a session
///
/// Implementations live in the presentation layer. The controller never
/// writes to the terminal itself.
pub trait SessionView {
    /// Main menu with the current filters and history size
    fn on_menu(&self, state: &SessionState);

    fn on_joke(&self, joke: &Joke);

    /// The source could not produce a joke for the current filters
    fn on_generation_failed(&self, error: &GenerationError);

    fn on_category_list(&self, categories: &[Category], current: Category);

    fn on_language_list(&self, languages: &[Language], current: Language);

    fn on_category_changed(&self, category: Category);

    fn on_language_changed(&self, language: Language);

    /// A sub-menu selection was rejected and the previous value kept
    fn on_selection_rejected(&self, target: SelectionTarget, error: &SelectionError);

    fn on_history_reset(&self, cleared: usize);

    /// Unrecognized menu token when the session re-prompts instead of exiting
    fn on_unknown_choice(&self, token: &str);

    fn on_goodbye(&self);
}
