//! OpenAI-compatible chat session
//!
//! The endpoint is stateless, so the session keeps the message history
//! locally and resends it on every call.

use super::types::{ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;
use dialectic_application::{GatewayError, LlmSession};
use dialectic_domain::Model;
use reqwest::StatusCode;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Connection settings shared by every session of one gateway
#[derive(Debug)]
pub(crate) struct Endpoint {
    pub client: reqwest::Client,
    pub url: String,
    pub api_key: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
}

pub struct OpenAiCompatSession {
    endpoint: Arc<Endpoint>,
    model: Model,
    messages: Mutex<Vec<ChatMessage>>,
}

impl OpenAiCompatSession {
    pub(crate) fn new(endpoint: Arc<Endpoint>, model: Model, system_prompt: &str) -> Self {
        let mut messages = Vec::new();
        if !system_prompt.is_empty() {
            messages.push(ChatMessage::system(system_prompt));
        }
        Self {
            endpoint,
            model,
            messages: Mutex::new(messages),
        }
    }

    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, GatewayError> {
        let request = ChatRequest {
            model: self.model.as_str(),
            messages,
            max_tokens: self.endpoint.max_tokens,
            temperature: self.endpoint.temperature,
        };

        debug!(model = %self.model, messages = messages.len(), "chat completion request");

        let response = self
            .endpoint
            .client
            .post(&self.endpoint.url)
            .bearer_auth(&self.endpoint.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status(status, &body));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("Malformed response: {}", e)))?;

        body.into_text()
            .ok_or_else(|| GatewayError::RequestFailed("Response contained no choices".to_string()))
    }
}

#[async_trait]
impl LlmSession for OpenAiCompatSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let mut messages = self.messages.lock().await;
        messages.push(ChatMessage::user(content));

        match self.complete(&messages).await {
            Ok(reply) => {
                messages.push(ChatMessage::assistant(reply.clone()));
                Ok(reply)
            }
            Err(e) => {
                // Keep the history replayable after a failed turn
                messages.pop();
                Err(e)
            }
        }
    }
}

/// Map a non-2xx status to a gateway error.
pub(crate) fn map_status(status: StatusCode, body: &str) -> GatewayError {
    let detail = if body.trim().is_empty() {
        status.to_string()
    } else {
        format!("{}: {}", status, body.trim())
    };
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::Unauthenticated(detail),
        StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited(detail),
        _ => GatewayError::RequestFailed(detail),
    }
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses() {
        assert!(matches!(
            map_status(StatusCode::UNAUTHORIZED, "bad key"),
            GatewayError::Unauthenticated(msg) if msg.contains("bad key")
        ));
        assert!(matches!(
            map_status(StatusCode::FORBIDDEN, ""),
            GatewayError::Unauthenticated(_)
        ));
    }

    #[test]
    fn test_rate_limit_status() {
        assert!(matches!(
            map_status(StatusCode::TOO_MANY_REQUESTS, "slow down"),
            GatewayError::RateLimited(_)
        ));
    }

    #[test]
    fn test_other_statuses_are_request_failures() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            assert!(matches!(
                map_status(status, "{}"),
                GatewayError::RequestFailed(_)
            ));
        }
    }

    #[tokio::test]
    async fn test_system_prompt_seeds_history() {
        let endpoint = Arc::new(Endpoint {
            client: reqwest::Client::new(),
            url: "http://127.0.0.1:9/chat/completions".to_string(),
            api_key: "test".to_string(),
            max_tokens: 16,
            temperature: None,
        });

        let session = OpenAiCompatSession::new(Arc::clone(&endpoint), Model::Grok3, "Be terse.");
        assert_eq!(session.model(), &Model::Grok3);
        assert_eq!(session.messages.lock().await.len(), 1);

        let bare = OpenAiCompatSession::new(endpoint, Model::Grok3, "");
        assert!(bare.messages.lock().await.is_empty());
    }
}
