//! Joke entity

use super::category::Category;
use serde::{Deserialize, Serialize};

/// A single joke as returned by a joke source (Entity)
///
/// Immutable once created; the session history owns it after it is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    text: String,
    category: Category,
}

impl Joke {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Category that was active when the joke was fetched
    pub fn category(&self) -> Category {
        self.category
    }
}

impl std::fmt::Display for Joke {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
