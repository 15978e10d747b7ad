//! Console implementation of the session view

use crate::output::console::ConsoleFormatter;
use jokebot_application::{GenerationError, SelectionTarget, SessionView};
use jokebot_domain::{Category, Joke, Language, SelectionError, SessionState};

/// Prints every session event to stdout
#[derive(Debug, Default)]
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }
}

impl SessionView for ConsoleView {
    fn on_menu(&self, state: &SessionState) {
        print!("{}", ConsoleFormatter::menu(state));
    }

    fn on_joke(&self, joke: &Joke) {
        print!("{}", ConsoleFormatter::joke(joke));
    }

    fn on_generation_failed(&self, error: &GenerationError) {
        print!("{}", ConsoleFormatter::generation_failed(error));
    }

    fn on_category_list(&self, categories: &[Category], current: Category) {
        print!("{}", ConsoleFormatter::category_list(categories, current));
    }

    fn on_language_list(&self, languages: &[Language], current: Language) {
        print!("{}", ConsoleFormatter::language_list(languages, current));
    }

    fn on_category_changed(&self, category: Category) {
        print!("{}", ConsoleFormatter::category_changed(category));
    }

    fn on_language_changed(&self, language: Language) {
        print!("{}", ConsoleFormatter::language_changed(language));
    }

    fn on_selection_rejected(&self, target: SelectionTarget, error: &SelectionError) {
        print!("{}", ConsoleFormatter::selection_rejected(target, error));
    }

    fn on_history_reset(&self, cleared: usize) {
        print!("{}", ConsoleFormatter::history_reset(cleared));
    }

    fn on_unknown_choice(&self, token: &str) {
        print!("{}", ConsoleFormatter::unknown_choice(token));
    }

    fn on_goodbye(&self) {
        print!("{}", ConsoleFormatter::goodbye());
    }
}
