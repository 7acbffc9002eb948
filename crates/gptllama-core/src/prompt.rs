//! Rendering chat messages into a llama.cpp prompt.

use serde::{Deserialize, Serialize};

/// Role assumed for messages that do not name one.
pub const DEFAULT_ROLE: &str = "assistant";

/// A single chat message as sent by OpenAI-compatible clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub content: String,
}

impl PromptMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            content: content.into(),
        }
    }

    /// The message role, falling back to [`DEFAULT_ROLE`].
    pub fn role(&self) -> &str {
        self.role.as_deref().unwrap_or(DEFAULT_ROLE)
    }
}

/// The priming conversation placed ahead of every chat.
pub fn default_messages() -> Vec<PromptMessage> {
    vec![
        PromptMessage::new("system", "You are a helpful assistant."),
        PromptMessage::new("user", "How are you?"),
        PromptMessage::new("assistant", "Hi, how may I help you today?"),
    ]
}

/// Render messages as `role:<ws>content`, one message per line.
///
/// With `new_line` the role and content are separated by a backslash line
/// continuation (`\` followed by a newline), which llama.cpp's interactive
/// mode reads as one turn. Otherwise they are separated by a single space.
///
/// ```rust
/// use gptllama_core::{PromptMessage, messages_to_prompt};
///
/// let messages = vec![PromptMessage::new("user", "Hello")];
/// assert_eq!(messages_to_prompt(&messages, false), "user: Hello");
/// assert_eq!(messages_to_prompt(&messages, true), "user:\\\nHello");
/// ```
pub fn messages_to_prompt(messages: &[PromptMessage], new_line: bool) -> String {
    let whitespace = if new_line { "\\\n" } else { " " };
    messages
        .iter()
        .map(|m| format!("{}:{whitespace}{}", m.role(), m.content))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_conversation() {
        let prompt = messages_to_prompt(&default_messages(), false);
        assert_eq!(
            prompt,
            "system: You are a helpful assistant.\nuser: How are you?\nassistant: Hi, how may I help you today?"
        );
    }

    #[test]
    fn test_missing_role_renders_as_assistant() {
        let message: PromptMessage = serde_json::from_str(r#"{"content": "ok"}"#).unwrap();
        assert_eq!(messages_to_prompt(&[message], false), "assistant: ok");
    }

    #[test]
    fn test_empty_messages() {
        assert_eq!(messages_to_prompt(&[], true), "");
    }
}
