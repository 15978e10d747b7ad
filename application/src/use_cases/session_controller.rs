//! Session controller use case
//!
//! Drives one joke session: show the menu, read a choice, run the action for
//! that choice, come back to the menu, until the exit screen is reached.

use crate::config::{SessionConfig, UnknownChoicePolicy};
use crate::ports::joke_source::JokeSource;
use crate::ports::line_input::LineInput;
use crate::ports::session_logger::{NoSessionLogger, SessionEvent, SessionLogger};
use crate::ports::session_view::{SelectionTarget, SessionView};
use jokebot_domain::{
    Category, Joke, Language, MenuChoice, Screen, SelectionError, SessionState, select_index,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

const MENU_LABEL: &str = "User Input: ";
const CATEGORY_LABEL: &str = "Select category: ";
const LANGUAGE_LABEL: &str = "Select language: ";

/// What a finished session amounted to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Jokes still in the history when the session ended
    pub jokes_enjoyed: usize,
    pub category: Category,
    pub language: Language,
}

/// State machine over [`Screen`]s that owns the [`SessionState`]
pub struct SessionController<'a, S: JokeSource, I: LineInput> {
    source: Arc<S>,
    input: I,
    view: &'a dyn SessionView,
    logger: Arc<dyn SessionLogger>,
    unknown_choice: UnknownChoicePolicy,
    state: SessionState,
}

impl<'a, S: JokeSource, I: LineInput> SessionController<'a, S, I> {
    pub fn new(source: Arc<S>, input: I, view: &'a dyn SessionView, config: SessionConfig) -> Self {
        Self {
            source,
            input,
            view,
            logger: Arc::new(NoSessionLogger),
            unknown_choice: config.unknown_choice,
            state: SessionState::with_filters(config.category, config.language),
        }
    }

    /// Record session events to a structured logger
    pub fn with_logger(mut self, logger: Arc<dyn SessionLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Run screens from the menu until the exit screen has been handled
    pub fn run(&mut self) -> SessionSummary {
        info!(
            "Starting joke session (category: {}, language: {})",
            self.state.category(),
            self.state.language()
        );
        self.logger.log(SessionEvent::new(
            "session_started",
            json!({
                "category": self.state.category(),
                "language": self.state.language(),
            }),
        ));

        let mut screen = Screen::Menu;
        while let Some(next) = self.step(screen) {
            debug!("Transition {} -> {}", screen, next);
            screen = next;
        }

        let summary = self.summary();
        self.logger.log(SessionEvent::new(
            "session_ended",
            serde_json::to_value(&summary).unwrap_or_default(),
        ));
        info!("Session ended with {} jokes", summary.jokes_enjoyed);
        summary
    }

    /// Handle one screen and return the screen that follows it.
    ///
    /// Returns `None` after the exit screen. End of input on any read
    /// leads to the exit screen.
    pub fn step(&mut self, screen: Screen) -> Option<Screen> {
        match screen {
            Screen::Menu => {
                let token = self.show_menu();
                Some(self.route(token.as_deref()))
            }
            Screen::Fetch => {
                self.fetch_joke();
                screen.next()
            }
            Screen::SetCategory => {
                self.view
                    .on_category_list(&Category::ALL, self.state.category());
                match self.read(CATEGORY_LABEL) {
                    Some(raw) => {
                        self.set_category(&raw);
                        screen.next()
                    }
                    None => Some(Screen::Exit),
                }
            }
            Screen::SetLanguage => {
                self.view
                    .on_language_list(&Language::ALL, self.state.language());
                match self.read(LANGUAGE_LABEL) {
                    Some(raw) => {
                        self.set_language(&raw);
                        screen.next()
                    }
                    None => Some(Screen::Exit),
                }
            }
            Screen::Reset => {
                self.reset_history();
                screen.next()
            }
            Screen::Exit => {
                self.exit();
                None
            }
        }
    }

    /// Render the menu and read one trimmed, lower-cased token.
    ///
    /// Returns `None` when the input is closed. The token is not validated
    /// here; [`SessionController::route`] decides what it means.
    pub fn show_menu(&mut self) -> Option<String> {
        self.view.on_menu(&self.state);
        let token = self.read(MENU_LABEL)?.trim().to_lowercase();
        self.state.set_pending_choice(MenuChoice::parse(&token));
        Some(token)
    }

    /// Map a menu token to the next screen.
    ///
    /// `None` (closed input) always exits. Unrecognized tokens exit too,
    /// unless the session is configured to re-prompt.
    pub fn route(&self, token: Option<&str>) -> Screen {
        let Some(token) = token else {
            debug!("Input closed on the menu, exiting");
            return Screen::Exit;
        };

        if MenuChoice::parse(token).is_none() {
            if self.unknown_choice == UnknownChoicePolicy::Reprompt {
                self.view.on_unknown_choice(token);
                return Screen::Menu;
            }
            debug!("Unrecognized menu token {:?}, exiting", token);
        }
        Screen::route(token)
    }

    /// Ask the source for a joke under the current filters and record it.
    ///
    /// A generation failure is shown to the user and leaves the history
    /// untouched.
    pub fn fetch_joke(&mut self) {
        let category = self.state.category();
        let language = self.state.language();

        match self.source.fetch_text(category, language) {
            Ok(text) => {
                let joke = Joke::new(text, category);
                self.view.on_joke(&joke);
                self.logger.log(SessionEvent::new(
                    "joke_fetched",
                    json!({
                        "category": category,
                        "language": language,
                        "text": joke.text(),
                    }),
                ));
                self.state.record_joke(joke);
            }
            Err(e) => {
                warn!("Joke generation failed: {}", e);
                self.view.on_generation_failed(&e);
                self.logger.log(SessionEvent::new(
                    "generation_failed",
                    json!({
                        "category": category,
                        "language": language,
                        "error": e.to_string(),
                    }),
                ));
            }
        }
    }

    /// Select a category by its index in [`Category::ALL`].
    ///
    /// Invalid input keeps the current category and warns.
    pub fn set_category(&mut self, raw: &str) {
        let len = Category::ALL.len();
        let selected = select_index(raw, len)
            .and_then(|index| Category::from_index(index).ok_or(out_of_range(index, len)));
        match selected {
            Ok(category) => {
                self.state.set_category(category);
                self.view.on_category_changed(category);
                self.logger.log(SessionEvent::new(
                    "category_changed",
                    json!({ "category": category }),
                ));
            }
            Err(e) => {
                debug!("Rejected category selection: {}", e);
                self.view
                    .on_selection_rejected(SelectionTarget::Category, &e);
                self.log_rejection(SelectionTarget::Category, e.kind(), raw);
            }
        }
    }

    /// Select a language by its index in [`Language::ALL`].
    ///
    /// Invalid input keeps the current language and warns.
    pub fn set_language(&mut self, raw: &str) {
        let len = Language::ALL.len();
        let selected = select_index(raw, len)
            .and_then(|index| Language::from_index(index).ok_or(out_of_range(index, len)));
        match selected {
            Ok(language) => {
                self.state.set_language(language);
                self.view.on_language_changed(language);
                self.logger.log(SessionEvent::new(
                    "language_changed",
                    json!({ "language": language }),
                ));
            }
            Err(e) => {
                debug!("Rejected language selection: {}", e);
                self.view
                    .on_selection_rejected(SelectionTarget::Language, &e);
                self.log_rejection(SelectionTarget::Language, e.kind(), raw);
            }
        }
    }

    /// Empty the history, returning how many jokes were dropped
    pub fn reset_history(&mut self) -> usize {
        let cleared = self.state.reset_history();
        self.view.on_history_reset(cleared);
        self.logger.log(SessionEvent::new(
            "history_reset",
            json!({ "cleared": cleared }),
        ));
        cleared
    }

    /// Finish the session. No input is read afterwards.
    pub fn exit(&mut self) {
        self.state.finish();
        self.view.on_goodbye();
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            jokes_enjoyed: self.state.history().len(),
            category: self.state.category(),
            language: self.state.language(),
        }
    }

    fn read(&mut self, label: &str) -> Option<String> {
        match self.input.read_line(label) {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to read input: {}", e);
                None
            }
        }
    }

    fn log_rejection(&self, target: SelectionTarget, kind: &str, raw: &str) {
        self.logger.log(SessionEvent::new(
            "selection_rejected",
            json!({
                "target": target.as_str(),
                "reason": kind,
                "input": raw.trim(),
            }),
        ));
    }
}

fn out_of_range(index: usize, len: usize) -> SelectionError {
    SelectionError::OutOfRange {
        index: i64::try_from(index).unwrap_or(i64::MAX),
        len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::joke_source::GenerationError;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::io;
    use std::sync::Mutex;

    // ==================== Test doubles ====================

    /// Feeds a fixed script of lines, then reports closed input
    struct ScriptedInput {
        lines: VecDeque<String>,
        labels: Vec<String>,
    }

    impl ScriptedInput {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|s| s.to_string()).collect(),
                labels: Vec::new(),
            }
        }
    }

    impl LineInput for ScriptedInput {
        fn read_line(&mut self, label: &str) -> io::Result<Option<String>> {
            self.labels.push(label.to_string());
            Ok(self.lines.pop_front())
        }
    }

    struct BrokenInput;

    impl LineInput for BrokenInput {
        fn read_line(&mut self, _label: &str) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Shown {
        Menu { history: usize },
        Joke(String, Category),
        GenerationFailed,
        CategoryList,
        LanguageList,
        CategoryChanged(Category),
        LanguageChanged(Language),
        Rejected(SelectionTarget, &'static str),
        Reset(usize),
        UnknownChoice(String),
        Goodbye,
    }

    #[derive(Default)]
    struct RecordingView {
        shown: RefCell<Vec<Shown>>,
    }

    impl RecordingView {
        fn shown(&self) -> Vec<Shown> {
            self.shown.borrow().clone()
        }

        fn push(&self, item: Shown) {
            self.shown.borrow_mut().push(item);
        }
    }

    impl SessionView for RecordingView {
        fn on_menu(&self, state: &SessionState) {
            self.push(Shown::Menu {
                history: state.history().len(),
            });
        }
        fn on_joke(&self, joke: &Joke) {
            self.push(Shown::Joke(joke.text().to_string(), joke.category()));
        }
        fn on_generation_failed(&self, _error: &GenerationError) {
            self.push(Shown::GenerationFailed);
        }
        fn on_category_list(&self, _categories: &[Category], _current: Category) {
            self.push(Shown::CategoryList);
        }
        fn on_language_list(&self, _languages: &[Language], _current: Language) {
            self.push(Shown::LanguageList);
        }
        fn on_category_changed(&self, category: Category) {
            self.push(Shown::CategoryChanged(category));
        }
        fn on_language_changed(&self, language: Language) {
            self.push(Shown::LanguageChanged(language));
        }
        fn on_selection_rejected(&self, target: SelectionTarget, error: &SelectionError) {
            self.push(Shown::Rejected(target, error.kind()));
        }
        fn on_history_reset(&self, cleared: usize) {
            self.push(Shown::Reset(cleared));
        }
        fn on_unknown_choice(&self, token: &str) {
            self.push(Shown::UnknownChoice(token.to_string()));
        }
        fn on_goodbye(&self) {
            self.push(Shown::Goodbye);
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(&'static str, serde_json::Value)>>,
    }

    impl SessionLogger for RecordingLogger {
        fn log(&self, event: SessionEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    type StubSource = fn(Category, Language) -> Result<String, GenerationError>;

    fn fixed_j(_category: Category, _language: Language) -> Result<String, GenerationError> {
        Ok("J".to_string())
    }

    fn english_only(category: Category, language: Language) -> Result<String, GenerationError> {
        if language == Language::En {
            Ok(format!("{category} joke"))
        } else {
            Err(GenerationError::Unsupported { category, language })
        }
    }

    fn controller<'a>(
        source: StubSource,
        lines: &[&str],
        view: &'a RecordingView,
    ) -> SessionController<'a, StubSource, ScriptedInput> {
        SessionController::new(
            Arc::new(source),
            ScriptedInput::new(lines),
            view,
            SessionConfig::default(),
        )
    }

    // ==================== End-to-end scenarios ====================

    #[test]
    fn test_fetch_fetch_reset_quit() {
        let view = RecordingView::default();
        let mut ctl = controller(fixed_j, &["n", "n", "r", "q"], &view);

        let mut screen = Screen::Menu;
        let mut history_before_reset = None;
        while let Some(next) = ctl.step(screen) {
            if next == Screen::Reset {
                history_before_reset = Some(ctl.state().history().len());
            }
            screen = next;
        }

        assert_eq!(history_before_reset, Some(2));
        assert!(ctl.state().history().is_empty());
        assert!(ctl.state().is_done());
        assert!(view.shown().contains(&Shown::Reset(2)));
    }

    #[test]
    fn test_change_category_then_fetch() {
        let view = RecordingView::default();
        let mut ctl = controller(fixed_j, &["c", "1", "n", "q"], &view);

        let summary = ctl.run();

        assert_eq!(ctl.state().category(), Category::Chuck);
        assert_eq!(summary.jokes_enjoyed, 1);
        let joke = ctl.state().history().last().unwrap();
        assert_eq!(joke.category(), Category::Chuck);
        assert_eq!(joke.text(), "J");
        assert!(ctl.state().is_done());
    }

    #[test]
    fn test_n_fetches_grow_history_by_n() {
        let view = RecordingView::default();
        let mut ctl = controller(fixed_j, &["n", "n", "n", "n", "n", "q"], &view);

        let summary = ctl.run();

        assert_eq!(summary.jokes_enjoyed, 5);
        assert!(ctl.state().history().iter().all(|j| j.text() == "J"));
    }

    #[test]
    fn test_unknown_token_exits_without_visiting_actions() {
        let view = RecordingView::default();
        let mut ctl = controller(fixed_j, &["z", "n"], &view);

        assert_eq!(ctl.step(Screen::Menu), Some(Screen::Exit));
        assert_eq!(ctl.step(Screen::Exit), None);

        assert!(ctl.state().is_done());
        assert!(ctl.state().history().is_empty());
        assert_eq!(
            view.shown(),
            vec![Shown::Menu { history: 0 }, Shown::Goodbye]
        );
        assert_eq!(ctl.input.lines.len(), 1, "the second line is never read");
    }

    #[test]
    fn test_exit_policy_routes_like_screen_route() {
        let view = RecordingView::default();
        let ctl = controller(fixed_j, &[], &view);

        for token in ["n", "c", "l", "r", "q", "z", "", "0", "quit"] {
            assert_eq!(ctl.route(Some(token)), Screen::route(token), "token {:?}", token);
        }
        assert!(view.shown().is_empty());
    }

    #[test]
    fn test_every_short_script_ending_in_exit_token_terminates() {
        const TOKENS: [&str; 10] = ["n", "c", "l", "r", "q", "z", "", "0", "1", "9"];
        const EXIT_TOKENS: [&str; 3] = ["q", "z", ""];

        let mut prefixes: Vec<Vec<&str>> = vec![vec![]];
        let mut frontier = prefixes.clone();
        for _ in 0..3 {
            frontier = frontier
                .iter()
                .flat_map(|prefix| {
                    TOKENS.iter().map(move |token| {
                        let mut next = prefix.clone();
                        next.push(*token);
                        next
                    })
                })
                .collect();
            prefixes.extend(frontier.iter().cloned());
        }

        for prefix in &prefixes {
            for exit_token in EXIT_TOKENS {
                let mut script = prefix.clone();
                script.push(exit_token);

                let view = RecordingView::default();
                let mut ctl = controller(fixed_j, &script, &view);
                ctl.run();

                assert!(ctl.state().is_done(), "script {:?}", script);
                // At most one extra read, which sees closed input
                assert!(ctl.input.labels.len() <= script.len() + 1, "script {:?}", script);
                let shown = view.shown();
                assert_eq!(shown.last(), Some(&Shown::Goodbye), "script {:?}", script);
                assert_eq!(
                    shown.iter().filter(|s| **s == Shown::Goodbye).count(),
                    1,
                    "script {:?}",
                    script
                );
            }
        }
    }

    #[test]
    fn test_empty_menu_line_exits() {
        let view = RecordingView::default();
        let mut ctl = controller(fixed_j, &["", "n"], &view);
        ctl.run();
        assert!(ctl.state().is_done());
        assert!(ctl.state().history().is_empty());
    }

    #[test]
    fn test_menu_token_is_case_folded() {
        let view = RecordingView::default();
        let mut ctl = controller(fixed_j, &["  N  ", "Q"], &view);
        let summary = ctl.run();
        assert_eq!(summary.jokes_enjoyed, 1);
        assert_eq!(ctl.state().pending_choice(), Some(MenuChoice::Quit));
    }

    #[test]
    fn test_reprompt_policy_stays_on_menu() {
        let view = RecordingView::default();
        let mut ctl = SessionController::new(
            Arc::new(fixed_j as StubSource),
            ScriptedInput::new(&["z", "n", "q"]),
            &view,
            SessionConfig::default().with_unknown_choice(UnknownChoicePolicy::Reprompt),
        );

        assert_eq!(ctl.step(Screen::Menu), Some(Screen::Menu));
        assert_eq!(ctl.state().pending_choice(), None);
        let summary = ctl.run();

        assert_eq!(summary.jokes_enjoyed, 1);
        assert!(view.shown().contains(&Shown::UnknownChoice("z".to_string())));
    }

    // ==================== Closed input ====================

    #[test]
    fn test_closed_input_on_menu_exits() {
        let view = RecordingView::default();
        let mut ctl = controller(fixed_j, &["n"], &view);
        let summary = ctl.run();
        assert!(ctl.state().is_done());
        assert_eq!(summary.jokes_enjoyed, 1);
        assert_eq!(view.shown().last(), Some(&Shown::Goodbye));
    }

    #[test]
    fn test_closed_input_on_sub_menu_exits() {
        let view = RecordingView::default();
        let mut ctl = controller(fixed_j, &["c"], &view);

        assert_eq!(ctl.step(Screen::Menu), Some(Screen::SetCategory));
        assert_eq!(ctl.step(Screen::SetCategory), Some(Screen::Exit));
        assert_eq!(ctl.state().category(), Category::Neutral);
    }

    #[test]
    fn test_read_error_is_treated_as_closed_input() {
        let view = RecordingView::default();
        let mut ctl = SessionController::new(
            Arc::new(fixed_j as StubSource),
            BrokenInput,
            &view,
            SessionConfig::default(),
        );
        let summary = ctl.run();
        assert!(ctl.state().is_done());
        assert_eq!(summary.jokes_enjoyed, 0);
    }

    // ==================== Category and language screens ====================

    #[test]
    fn test_set_category_valid_indices() {
        let view = RecordingView::default();
        let mut ctl = controller(fixed_j, &[], &view);

        for (raw, expected) in [("0", "neutral"), ("1", "chuck"), ("2", "all")] {
            ctl.set_category(raw);
            assert_eq!(ctl.state().category().as_str(), expected);
        }
    }

    #[test]
    fn test_set_category_invalid_keeps_value() {
        let view = RecordingView::default();
        let mut ctl = controller(fixed_j, &[], &view);
        ctl.set_category("1");

        for raw in ["5", "abc", "", "-1"] {
            ctl.set_category(raw);
            assert_eq!(ctl.state().category(), Category::Chuck);
        }

        let rejected: Vec<_> = view
            .shown()
            .into_iter()
            .filter(|s| matches!(s, Shown::Rejected(SelectionTarget::Category, _)))
            .collect();
        assert_eq!(
            rejected,
            vec![
                Shown::Rejected(SelectionTarget::Category, "out_of_range"),
                Shown::Rejected(SelectionTarget::Category, "not_a_number"),
                Shown::Rejected(SelectionTarget::Category, "not_a_number"),
                Shown::Rejected(SelectionTarget::Category, "out_of_range"),
            ]
        );
    }

    #[test]
    fn test_set_language() {
        let view = RecordingView::default();
        let mut ctl = controller(fixed_j, &[], &view);

        ctl.set_language("4");
        assert_eq!(ctl.state().language(), Language::Eu);

        ctl.set_language("6");
        ctl.set_language("de");
        assert_eq!(ctl.state().language(), Language::Eu);
        assert!(view.shown().contains(&Shown::LanguageChanged(Language::Eu)));
    }

    #[test]
    fn test_language_screen_via_menu() {
        let view = RecordingView::default();
        let mut ctl = controller(fixed_j, &["l", "2", "q"], &view);
        let summary = ctl.run();
        assert_eq!(summary.language, Language::Es);
        assert!(view.shown().contains(&Shown::LanguageList));
    }

    // ==================== Generation failures ====================

    #[test]
    fn test_generation_failure_keeps_history_and_returns_to_menu() {
        let view = RecordingView::default();
        let mut ctl = controller(english_only, &["n", "l", "1", "n", "q"], &view);

        let summary = ctl.run();

        assert_eq!(summary.jokes_enjoyed, 1);
        assert_eq!(summary.language, Language::De);
        assert!(view.shown().contains(&Shown::GenerationFailed));
        assert!(ctl.state().is_done());
    }

    // ==================== Reset ====================

    #[test]
    fn test_reset_twice_is_idempotent() {
        let view = RecordingView::default();
        let mut ctl = controller(fixed_j, &[], &view);
        ctl.fetch_joke();
        ctl.fetch_joke();

        assert_eq!(ctl.reset_history(), 2);
        let after_once = ctl.state().clone();
        assert_eq!(ctl.reset_history(), 0);
        assert_eq!(ctl.state(), &after_once);
        assert!(ctl.state().history().is_empty());
    }

    // ==================== Session log ====================

    #[test]
    fn test_events_are_logged_in_order() {
        let view = RecordingView::default();
        let logger = Arc::new(RecordingLogger::default());
        let mut ctl = controller(fixed_j, &["n", "c", "x", "r", "q"], &view)
            .with_logger(logger.clone());

        ctl.run();

        let events = logger.events.lock().unwrap();
        let types: Vec<_> = events.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            types,
            vec![
                "session_started",
                "joke_fetched",
                "selection_rejected",
                "history_reset",
                "session_ended",
            ]
        );
        assert_eq!(events[1].1["text"], "J");
        assert_eq!(events[2].1["target"], "category");
        assert_eq!(events[3].1["cleared"], 1);
        assert_eq!(events[4].1["jokes_enjoyed"], 0);
    }

    #[test]
    fn test_labels_match_screens() {
        let view = RecordingView::default();
        let mut ctl = controller(fixed_j, &["c", "0", "l", "0", "q"], &view);
        ctl.run();
        assert_eq!(
            ctl.input.labels,
            vec![
                MENU_LABEL,
                CATEGORY_LABEL,
                MENU_LABEL,
                LANGUAGE_LABEL,
                MENU_LABEL
            ]
        );
    }
}
