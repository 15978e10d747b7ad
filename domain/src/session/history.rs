//! Joke history

use crate::joke::entities::Joke;
use serde::{Deserialize, Serialize};

/// Ordered, append-only list of the jokes told in a session.
///
/// The only way to remove entries is [`JokeHistory::clear`], which drops all
/// of them at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokeHistory {
    jokes: Vec<Joke>,
}

impl JokeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a joke after every joke already recorded
    pub fn push(&mut self, joke: Joke) {
        self.jokes.push(joke);
    }

    /// Drop every joke, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let cleared = self.jokes.len();
        self.jokes.clear();
        cleared
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    pub fn last(&self) -> Option<&Joke> {
        self.jokes.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Joke> {
        self.jokes.iter()
    }
}
