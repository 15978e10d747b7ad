//! Session configuration from TOML (`[session]` section)

use jokebot_application::{SessionConfig, UnknownChoicePolicy};
use jokebot_domain::{Category, ConfigIssue, ConfigIssueCode, Language};
use serde::{Deserialize, Serialize};

/// Raw session configuration from TOML
///
/// # Example
///
/// ```toml
/// [session]
/// category = "chuck"      # neutral | chuck | all
/// language = "es"         # en | de | es | gl | eu | it
/// strict_menu = true      # re-prompt on unknown menu input instead of quitting
/// transcript = "~/jokes.jsonl"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Category the session starts with
    pub category: String,
    /// Language the session starts with
    pub language: String,
    /// Re-prompt on unrecognized menu input instead of exiting
    pub strict_menu: bool,
    /// Path of a JSONL transcript of session events
    pub transcript: Option<String>,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            category: Category::default().as_str().to_string(),
            language: Language::default().code().to_string(),
            strict_menu: false,
            transcript: None,
        }
    }
}

impl FileSessionConfig {
    /// Parse the category, falling back to the default with a warning
    pub fn parse_category(&self) -> (Category, Vec<ConfigIssue>) {
        match self.category.parse::<Category>() {
            Ok(category) => (category, vec![]),
            Err(_) => (
                Category::default(),
                vec![invalid_value(
                    "session.category",
                    &self.category,
                    Category::ALL.iter().map(|c| c.as_str()),
                )],
            ),
        }
    }

    /// Parse the language, falling back to the default with a warning
    pub fn parse_language(&self) -> (Language, Vec<ConfigIssue>) {
        match self.language.parse::<Language>() {
            Ok(language) => (language, vec![]),
            Err(_) => (
                Language::default(),
                vec![invalid_value(
                    "session.language",
                    &self.language,
                    Language::ALL.iter().map(|l| l.code()),
                )],
            ),
        }
    }

    /// Build the controller configuration.
    ///
    /// Unparseable values fall back to their defaults; the matching issues
    /// are reported by [`super::FileConfig::validate`].
    pub fn to_session_config(&self) -> SessionConfig {
        let (category, _) = self.parse_category();
        let (language, _) = self.parse_language();

        SessionConfig::new(category, language)
            .with_unknown_choice(UnknownChoicePolicy::from_strict(self.strict_menu))
    }
}

fn invalid_value<'a>(
    field: &str,
    value: &str,
    valid: impl Iterator<Item = &'a str>,
) -> ConfigIssue {
    let valid_values: Vec<String> = valid.map(str::to_string).collect();
    ConfigIssue {
        message: format!(
            "{}: unknown value '{}', expected one of [{}]; using the default",
            field,
            value,
            valid_values.join(", ")
        ),
        code: ConfigIssueCode::InvalidEnumValue {
            field: field.to_string(),
            value: value.to_string(),
            valid_values,
        },
    }
}
