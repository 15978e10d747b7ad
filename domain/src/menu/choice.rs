//! Menu choice value object

use serde::{Deserialize, Serialize};

/// Action a user can pick on the main menu (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuChoice {
    /// `n`: fetch the next joke
    NextJoke,
    /// `c`: change the category
    ChangeCategory,
    /// `l`: change the language
    ChangeLanguage,
    /// `r`: clear the joke history
    ResetHistory,
    /// `q`: leave the session
    Quit,
}

impl MenuChoice {
    /// Every choice, in the order the menu lists them
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::NextJoke,
        MenuChoice::ChangeCategory,
        MenuChoice::ChangeLanguage,
        MenuChoice::ResetHistory,
        MenuChoice::Quit,
    ];

    /// Single-character token the user types for this choice
    pub fn token(&self) -> char {
        match self {
            MenuChoice::NextJoke => 'n',
            MenuChoice::ChangeCategory => 'c',
            MenuChoice::ChangeLanguage => 'l',
            MenuChoice::ResetHistory => 'r',
            MenuChoice::Quit => 'q',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::NextJoke => "Next Joke",
            MenuChoice::ChangeCategory => "Change Category",
            MenuChoice::ChangeLanguage => "Change Language",
            MenuChoice::ResetHistory => "Reset History",
            MenuChoice::Quit => "Quit",
        }
    }

    /// Recognize a menu token.
    ///
    /// Surrounding whitespace is ignored and the comparison is
    /// case-insensitive. Anything that is not exactly one of the five
    /// tokens (including an empty line) yields `None`.
    pub fn parse(token: &str) -> Option<MenuChoice> {
        match token.trim().to_lowercase().as_str() {
            "n" => Some(MenuChoice::NextJoke),
            "c" => Some(MenuChoice::ChangeCategory),
            "l" => Some(MenuChoice::ChangeLanguage),
            "r" => Some(MenuChoice::ResetHistory),
            "q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

impl std::fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_roundtrip() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::parse(&choice.token().to_string()), Some(choice));
        }
    }

    #[test]
    fn test_parse_folds_case_and_whitespace() {
        assert_eq!(MenuChoice::parse("  N \n"), Some(MenuChoice::NextJoke));
        assert_eq!(MenuChoice::parse("Q"), Some(MenuChoice::Quit));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(MenuChoice::parse("z"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("next"), None);
        assert_eq!(MenuChoice::parse("nn"), None);
    }
}
