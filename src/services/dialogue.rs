use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

use crate::config::DialogueSettings;

/// Errors that can occur when generating dialogue
#[derive(Debug, Error)]
pub enum DialogueError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Model returned empty content")]
    EmptyResponse,

    #[error("Dialogue service is not configured")]
    NotConfigured,
}

/// One text-generation call
#[derive(Debug, Clone)]
pub struct DialogueRequest {
    pub prompt: String,
    pub temperature: f32,
}

impl DialogueRequest {
    pub fn new(prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            temperature,
        }
    }
}

/// Sampling temperatures for the two kinds of generated text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperatures {
    /// Interview questions, avatar chat and quest interactions
    pub reply: f32,
    /// Agent conversation turns
    pub turn: f32,
}

impl Default for Temperatures {
    fn default() -> Self {
        Self { reply: 0.8, turn: 0.7 }
    }
}

impl From<&DialogueSettings> for Temperatures {
    fn from(settings: &DialogueSettings) -> Self {
        Self {
            reply: settings.temperature,
            turn: settings.turn_temperature,
        }
    }
}

/// Source of generated dialogue
///
/// Callers treat every error as "use the deterministic fallback", so an
/// implementation never has to retry.
#[async_trait]
pub trait DialogueGenerator: Send + Sync {
    /// Name reported by the health endpoint
    fn model_name(&self) -> &str;

    /// Generate text for a prompt, trimmed and non-empty
    async fn complete(&self, request: DialogueRequest) -> Result<String, DialogueError>;
}

/// Client for a Responses-style text generation API
///
/// POSTs `{model, input, temperature}` to `{endpoint}/responses` with bearer
/// auth and reads back the first output text.
pub struct ResponsesClient {
    endpoint: String,
    api_key: String,
    model: String,
    client: Client,
}

impl ResponsesClient {
    pub fn new(
        endpoint: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, DialogueError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint,
            api_key,
            model,
            client,
        })
    }

    /// Build from settings, or `None` when no API key is configured
    pub fn from_settings(settings: &DialogueSettings) -> Result<Option<Self>, DialogueError> {
        match settings.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Self::new(
                settings.endpoint.clone(),
                key.to_string(),
                settings.model.clone(),
                Duration::from_secs(settings.timeout_secs),
            )
            .map(Some),
            _ => Ok(None),
        }
    }
}

#[async_trait]
impl DialogueGenerator for ResponsesClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: DialogueRequest) -> Result<String, DialogueError> {
        let url = format!("{}/responses", self.endpoint.trim_end_matches('/'));

        tracing::debug!(model = %self.model, "Requesting dialogue from {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.model,
                "input": request.prompt,
                "temperature": request.temperature,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DialogueError::ApiError(format!(
                "Dialogue generation failed: {}",
                response.status()
            )));
        }

        let payload: Value = response.json().await?;
        extract_output_text(&payload).ok_or(DialogueError::EmptyResponse)
    }
}

/// Stand-in used when no dialogue service is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineDialogue;

#[async_trait]
impl DialogueGenerator for OfflineDialogue {
    fn model_name(&self) -> &str {
        "offline"
    }

    async fn complete(&self, _request: DialogueRequest) -> Result<String, DialogueError> {
        Err(DialogueError::NotConfigured)
    }
}

/// Pull the generated text out of a Responses payload
///
/// Prefers the top-level `output_text`, then the first `output[].content[]`
/// part of type `output_text`. Blank text counts as missing.
pub fn extract_output_text(payload: &Value) -> Option<String> {
    let top_level = payload
        .get("output_text")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(text) = top_level {
        return Some(text.to_string());
    }

    payload
        .get("output")?
        .as_array()?
        .iter()
        .filter_map(|item| item.get("content").and_then(Value::as_array))
        .flatten()
        .find(|part| {
            part.get("type").and_then(Value::as_str) == Some("output_text")
                && part.get("text").map_or(false, Value::is_string)
        })
        .and_then(|part| part.get("text").and_then(Value::as_str))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(endpoint: String) -> ResponsesClient {
        ResponsesClient::new(
            endpoint,
            "test-key".to_string(),
            "test-model".to_string(),
            Duration::from_secs(5),
        )
        .expect("client")
    }

    #[test]
    fn test_extract_top_level_text() {
        let payload = json!({ "output_text": "  What do you value?  " });
        assert_eq!(extract_output_text(&payload), Some("What do you value?".to_string()));
    }

    #[test]
    fn test_extract_nested_text() {
        let payload = json!({
            "output_text": "   ",
            "output": [
                { "content": [{ "type": "reasoning", "text": "skip me" }] },
                { "content": [{ "type": "output_text", "text": "hello" }] }
            ]
        });
        assert_eq!(extract_output_text(&payload), Some("hello".to_string()));
    }

    #[test]
    fn test_extract_missing_text() {
        assert_eq!(extract_output_text(&json!({})), None);
        assert_eq!(extract_output_text(&json!({ "output": [] })), None);
        let blank = json!({ "output": [{ "content": [{ "type": "output_text", "text": " " }] }] });
        assert_eq!(extract_output_text(&blank), None);
    }

    #[test]
    fn test_from_settings_without_key() {
        let settings = DialogueSettings {
            api_key: Some("   ".to_string()),
            ..DialogueSettings::default()
        };
        assert!(ResponsesClient::from_settings(&settings).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_offline_dialogue_is_not_configured() {
        let result = OfflineDialogue
            .complete(DialogueRequest::new("hello", 0.8))
            .await;
        assert!(matches!(result, Err(DialogueError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_complete_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/responses")
            .match_header("authorization", "Bearer test-key")
            .match_body(mockito::Matcher::PartialJson(json!({
                "model": "test-model",
                "input": "Ask me something"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"output_text":"What makes you feel safe?"}"#)
            .create_async()
            .await;

        let text = client(server.url())
            .complete(DialogueRequest::new("Ask me something", 0.8))
            .await
            .unwrap();

        assert_eq!(text, "What makes you feel safe?");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/responses")
            .with_status(500)
            .create_async()
            .await;

        let result = client(server.url())
            .complete(DialogueRequest::new("hi", 0.7))
            .await;
        assert!(matches!(result, Err(DialogueError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_complete_empty_output() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/responses")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"output":[]}"#)
            .create_async()
            .await;

        let result = client(server.url())
            .complete(DialogueRequest::new("hi", 0.7))
            .await;
        assert!(matches!(result, Err(DialogueError::EmptyResponse)));
    }
}
