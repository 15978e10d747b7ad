//! Prompt message pairs loaded from a prompt file

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A system/user message pair looked up by name (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessages {
    pub system: String,
    pub user: String,
}

impl PromptMessages {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }

    /// Fill the `{name}` placeholders of the user message.
    ///
    /// The system message is returned untouched. `{{` and `}}` stand for
    /// literal braces.
    pub fn format(&self, vars: &HashMap<String, String>) -> Result<PromptMessages, DomainError> {
        Ok(PromptMessages {
            system: self.system.clone(),
            user: fill_placeholders(&self.user, vars)?,
        })
    }
}

/// Substitute `{name}` placeholders in `template` from `vars`
pub fn fill_placeholders(
    template: &str,
    vars: &HashMap<String, String>,
) -> Result<String, DomainError> {
    let mut output = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' if chars.peek().map(|&(_, next)| next) == Some('{') => {
                chars.next();
                output.push('{');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, '{')) | None => return Err(DomainError::UnbalancedBrace(pos)),
                        Some((_, ch)) => name.push(ch),
                    }
                }
                let value = vars
                    .get(name.trim())
                    .ok_or_else(|| DomainError::MissingPlaceholder(name.trim().to_string()))?;
                output.push_str(value);
            }
            '}' if chars.peek().map(|&(_, next)| next) == Some('}') => {
                chars.next();
                output.push('}');
            }
            '}' => return Err(DomainError::UnbalancedBrace(pos)),
            other => output.push(other),
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_format_fills_user_only() {
        let messages = PromptMessages::new("You tell {style} jokes.", "Tell a joke about {topic}.");
        let formatted = messages.format(&vars(&[("topic", "compilers")])).unwrap();
        assert_eq!(formatted.system, "You tell {style} jokes.");
        assert_eq!(formatted.user, "Tell a joke about compilers.");
    }

    #[test]
    fn test_escaped_braces() {
        let out = fill_placeholders("{{literal}} and {x}", &vars(&[("x", "y")])).unwrap();
        assert_eq!(out, "{literal} and y");
    }

    #[test]
    fn test_missing_placeholder() {
        let err = fill_placeholders("Hello {who}", &HashMap::new()).unwrap_err();
        assert_eq!(err, DomainError::MissingPlaceholder("who".to_string()));
    }

    #[test]
    fn test_unbalanced_braces() {
        assert_eq!(
            fill_placeholders("oops {open", &HashMap::new()).unwrap_err(),
            DomainError::UnbalancedBrace(5)
        );
        assert_eq!(
            fill_placeholders("close} here", &HashMap::new()).unwrap_err(),
            DomainError::UnbalancedBrace(5)
        );
    }

    #[test]
    fn test_no_placeholders_is_verbatim() {
        let text = "Plain text, nothing to fill.";
        assert_eq!(fill_placeholders(text, &HashMap::new()).unwrap(), text);
    }
}
