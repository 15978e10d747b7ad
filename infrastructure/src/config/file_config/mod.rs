//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Enumerated values are kept as strings here and parsed on use, so that a
//! bad value becomes a [`ConfigIssue`] instead of a load failure.

mod logging;
mod output;
mod prompts;
mod session;

pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use prompts::FilePromptsConfig;
pub use session::FileSessionConfig;

use jokebot_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Session defaults and menu behavior
    pub session: FileSessionConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Prompt file settings
    pub prompts: FilePromptsConfig,
    /// Diagnostic log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.session.parse_category().1);
        issues.extend(self.session.parse_language().1);
        issues.extend(self.prompts.check_file());
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jokebot_domain::{Category, Language};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[session]
category = "chuck"
language = "es"
strict_menu = true
transcript = "/tmp/jokes.jsonl"

[output]
color = false

[prompts]
file = "prompts.yaml"

[logging]
file = "/tmp/jokebot.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.parse_category().0, Category::Chuck);
        assert_eq!(config.session.parse_language().0, Language::Es);
        assert!(config.session.strict_menu);
        assert_eq!(
            config.session.transcript,
            Some("/tmp/jokes.jsonl".to_string())
        );
        assert!(!config.output.color);
        assert_eq!(config.prompts.file, Some("prompts.yaml".to_string()));
        assert_eq!(config.logging.file, Some("/tmp/jokebot.log".to_string()));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[session]
language = "it"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.parse_language().0, Language::It);
        // Defaults should apply
        assert_eq!(config.session.parse_category().0, Category::Neutral);
        assert!(!config.session.strict_menu);
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_bad_values() {
        let toml_str = r#"
[session]
category = "knock-knock"
language = "fr"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues[0].message.contains("session.category"));
        assert!(issues[1].message.contains("session.language"));
    }
}
