//! Category value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Joke category a user can pick from the category screen (Value Object)
///
/// The order of [`Category::ALL`] is the order shown to the user, so the
/// index typed on the category screen maps straight into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Neutral,
    Chuck,
    All,
}

impl Category {
    /// Every category, in menu order
    pub const ALL: [Category; 3] = [Category::Neutral, Category::Chuck, Category::All];

    /// Get the string identifier for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Neutral => "neutral",
            Category::Chuck => "chuck",
            Category::All => "all",
        }
    }

    /// Human-readable name shown in the category list
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Neutral => "Neutral",
            Category::Chuck => "Chuck Norris",
            Category::All => "All",
        }
    }

    /// Look up a category by its position in [`Category::ALL`]
    pub fn from_index(index: usize) -> Option<Category> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "neutral" => Ok(Category::Neutral),
            "chuck" => Ok(Category::Chuck),
            "all" => Ok(Category::All),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
