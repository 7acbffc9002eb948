//! OpenAI-style response envelopes wrapped around llama.cpp output.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `object` value of every chat completion envelope.
pub const CHAT_COMPLETION_OBJECT: &str = "chat.completion.chunk";

/// Map a GPT version shorthand onto the model name clients expect.
///
/// ```rust
/// use gptllama_core::gpt_model_name;
///
/// assert_eq!(gpt_model_name("3.5"), Some("gpt-3.5-turbo"));
/// assert_eq!(gpt_model_name("4"), Some("gpt-4"));
/// assert_eq!(gpt_model_name("5"), None);
/// ```
pub fn gpt_model_name(version: &str) -> Option<&'static str> {
    match version {
        "3.5" => Some("gpt-3.5-turbo"),
        "4" => Some("gpt-4"),
        _ => None,
    }
}

/// Message or delta body of a choice. Serializes as `{}` when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A single completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkChoice {
    /// Present on streamed chunks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<ChoiceContent>,
    /// Present on complete responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<ChoiceContent>,
    pub finish_reason: Option<String>,
    pub index: u32,
}

/// Token accounting for a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

/// Chat completion envelope used for both streamed and complete responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionChunk {
    pub choices: Vec<ChunkChoice>,
    /// Milliseconds since the Unix epoch.
    pub created: i64,
    pub id: String,
    pub object: String,
    pub usage: Usage,
}

impl ChatCompletionChunk {
    /// Wrap generated text in a chat completion envelope.
    ///
    /// Streamed output goes under `delta`, complete output under `message`.
    /// Empty output produces an empty body object.
    pub fn from_output(
        data: &str,
        prompt_tokens: u64,
        completion_tokens: u64,
        stream: bool,
        finish_reason: Option<&str>,
    ) -> Self {
        let body = if data.is_empty() {
            ChoiceContent::default()
        } else {
            ChoiceContent {
                content: Some(data.to_string()),
                role: Some("assistant".to_string()),
            }
        };
        let (delta, message) = if stream {
            (Some(body), None)
        } else {
            (None, Some(body))
        };

        Self {
            choices: vec![ChunkChoice {
                delta,
                message,
                finish_reason: finish_reason.map(str::to_string),
                index: 0,
            }],
            created: chrono::Utc::now().timestamp_millis(),
            id: Uuid::new_v4().simple().to_string(),
            object: CHAT_COMPLETION_OBJECT.to_string(),
            usage: Usage {
                prompt_tokens,
                completion_tokens,
                total_tokens: prompt_tokens + completion_tokens,
            },
        }
    }
}

/// One embedding entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingData {
    pub object: String,
    pub embedding: Vec<f32>,
    pub index: u32,
}

/// Embedding envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    pub object: String,
    pub data: Vec<EmbeddingData>,
    #[serde(rename = "embeddingSize")]
    pub embedding_size: usize,
}

impl EmbeddingResponse {
    pub fn from_output(embedding: Vec<f32>) -> Self {
        let embedding_size = embedding.len();
        Self {
            object: "list".to_string(),
            data: vec![EmbeddingData {
                object: "embedding".to_string(),
                embedding,
                index: 0,
            }],
            embedding_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_complete_response_uses_message() {
        let chunk = ChatCompletionChunk::from_output("Hello", 10, 2, false, Some("stop"));
        let value = serde_json::to_value(&chunk).unwrap();

        assert_eq!(
            value["choices"][0]["message"],
            json!({"content": "Hello", "role": "assistant"})
        );
        assert!(value["choices"][0].get("delta").is_none());
        assert_eq!(value["choices"][0]["finish_reason"], "stop");
        assert_eq!(value["object"], CHAT_COMPLETION_OBJECT);
        assert_eq!(value["usage"]["total_tokens"], 12);
    }

    #[test]
    fn test_stream_chunk_uses_delta() {
        let chunk = ChatCompletionChunk::from_output("Hi", 1, 1, true, None);
        let value = serde_json::to_value(&chunk).unwrap();

        assert_eq!(value["choices"][0]["delta"]["content"], "Hi");
        assert!(value["choices"][0].get("message").is_none());
        assert!(value["choices"][0]["finish_reason"].is_null());
    }

    #[test]
    fn test_empty_output_has_empty_body() {
        let chunk = ChatCompletionChunk::from_output("", 3, 0, true, Some("stop"));
        let value = serde_json::to_value(&chunk).unwrap();
        assert_eq!(value["choices"][0]["delta"], json!({}));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = ChatCompletionChunk::from_output("x", 0, 0, false, None);
        let b = ChatCompletionChunk::from_output("x", 0, 0, false, None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_embedding_envelope() {
        let response = EmbeddingResponse::from_output(vec![0.5, -0.25, 1.0]);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["object"], "list");
        assert_eq!(value["embeddingSize"], 3);
        assert_eq!(value["data"][0]["object"], "embedding");
        assert_eq!(value["data"][0]["index"], 0);
        assert_eq!(value["data"][0]["embedding"], json!([0.5, -0.25, 1.0]));
    }
}
