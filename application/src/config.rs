//! Application-level configuration.
//!
//! Controls how the session controller starts and how it treats menu input
//! it does not recognize.

use jokebot_domain::{Category, Language};

/// What the main menu does with a token it does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownChoicePolicy {
    /// End the session, as if `q` had been typed.
    #[default]
    Exit,
    /// Warn and show the menu again.
    Reprompt,
}

impl UnknownChoicePolicy {
    /// `Reprompt` when `strict` is set, `Exit` otherwise
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Reprompt } else { Self::Exit }
    }
}

/// Session controller configuration.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub category: Category,
    pub language: Language,
    pub unknown_choice: UnknownChoicePolicy,
}

impl SessionConfig {
    pub fn new(category: Category, language: Language) -> Self {
        Self {
            category,
            language,
            unknown_choice: UnknownChoicePolicy::default(),
        }
    }

    pub fn with_unknown_choice(mut self, policy: UnknownChoicePolicy) -> Self {
        self.unknown_choice = policy;
        self
    }
}
