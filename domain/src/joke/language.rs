//! Language value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Language a joke is told in (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    De,
    Es,
    Gl,
    Eu,
    It,
}

impl Language {
    /// Every supported language, in menu order
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::De,
        Language::Es,
        Language::Gl,
        Language::Eu,
        Language::It,
    ];

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Es => "es",
            Language::Gl => "gl",
            Language::Eu => "eu",
            Language::It => "it",
        }
    }

    /// English name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "German",
            Language::Es => "Spanish",
            Language::Gl => "Galician",
            Language::Eu => "Basque",
            Language::It => "Italian",
        }
    }

    pub fn from_index(index: usize) -> Option<Language> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.code() == code)
            .ok_or(DomainError::UnknownLanguage(code))
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let codes: Vec<_> = Language::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["en", "de", "es", "gl", "eu", "it"]);
    }

    #[test]
    fn test_from_index_bounds() {
        assert_eq!(Language::from_index(0), Some(Language::En));
        assert_eq!(Language::from_index(5), Some(Language::It));
        assert_eq!(Language::from_index(6), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("EU".parse::<Language>().unwrap(), Language::Eu);
        assert_eq!(
            "fr".parse::<Language>().unwrap_err(),
            DomainError::UnknownLanguage("fr".to_string())
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(Language::Gl.name(), "Galician");
        assert_eq!(Language::default(), Language::En);
    }
}
