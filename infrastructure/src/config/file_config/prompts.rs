//! Prompt file configuration from TOML (`[prompts]` section)

use jokebot_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Raw prompt file configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptsConfig {
    /// YAML file holding named system/user prompt pairs
    pub file: Option<String>,
}

impl FilePromptsConfig {
    /// Report a configured prompt file that does not exist
    pub fn check_file(&self) -> Vec<ConfigIssue> {
        match &self.file {
            Some(path) if !Path::new(path).exists() => vec![ConfigIssue {
                code: ConfigIssueCode::MissingFile {
                    field: "prompts.file".to_string(),
                    path: path.clone(),
                },
                message: format!("prompts.file: {} does not exist", path),
            }],
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_reported() {
        let config = FilePromptsConfig {
            file: Some("/definitely/not/here/prompts.yaml".to_string()),
        };
        let issues = config.check_file();
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::MissingFile { field, .. } if field == "prompts.file"
        ));
    }

    #[test]
    fn test_unset_file_is_fine() {
        assert!(FilePromptsConfig::default().check_file().is_empty());
    }
}
