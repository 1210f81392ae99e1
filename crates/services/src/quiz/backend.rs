use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::QuizConfig;
use crate::error::QuizError;

/// Text-generation endpoint used to write quiz questions.
#[async_trait]
pub trait QuizBackend: Send + Sync {
    /// Send one prompt and return the model's reply text.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` when the request fails or the reply is empty.
    async fn complete(&self, prompt: &str) -> Result<String, QuizError>;
}

/// OpenAI-compatible `chat/completions` client.
#[derive(Clone)]
pub struct ChatCompletionsBackend {
    client: Client,
    config: QuizConfig,
}

impl ChatCompletionsBackend {
    /// Builds the HTTP client. No request timeout is set; the transport default applies.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Http` if the HTTP client cannot be initialised.
    pub fn new(config: QuizConfig) -> Result<Self, QuizError> {
        let client = Client::builder()
            .user_agent(concat!("study/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl QuizBackend for ChatCompletionsBackend {
    async fn complete(&self, prompt: &str) -> Result<String, QuizError> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let payload = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: 0.2,
        };

        tracing::info!(model = %self.config.model, prompt_chars = prompt.len(), "requesting quiz questions");
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "quiz request rejected");
            return Err(QuizError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(QuizError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_as_chat_completion() {
        let payload = ChatRequest {
            model: "gemini-2.5-flash".into(),
            messages: vec![ChatMessage {
                role: "user",
                content: "hi".into(),
            }],
            temperature: 0.2,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["model"], "gemini-2.5-flash");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hi");
    }

    #[test]
    fn response_without_content_deserializes() {
        let body: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant"}}]}"#).unwrap();
        assert!(body.choices[0].message.content.is_none());
    }
}
