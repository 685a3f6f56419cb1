//! Gateway for OpenAI-compatible chat completion APIs (xAI by default)

use super::session::{Endpoint, OpenAiCompatSession};
use crate::config::FileProviderConfig;
use crate::providers::error::ProviderConfigError;
use async_trait::async_trait;
use dialectic_application::{GatewayError, LlmGateway, LlmSession};
use dialectic_domain::Model;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// [`LlmGateway`] that posts to `{base_url}/chat/completions` with bearer auth
pub struct OpenAiCompatGateway {
    endpoint: Arc<Endpoint>,
}

impl OpenAiCompatGateway {
    /// Build the gateway from the `[provider]` section.
    ///
    /// Fails before any network traffic when no API key can be resolved.
    pub fn from_config(config: &FileProviderConfig) -> Result<Self, ProviderConfigError> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| ProviderConfigError::MissingApiKey {
                env_var: config.api_key_env.clone(),
            })?;

        let url = completions_url(&config.base_url)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ProviderConfigError::HttpClient(e.to_string()))?;

        info!("Using chat completions endpoint {}", url);

        Ok(Self {
            endpoint: Arc::new(Endpoint {
                client,
                url,
                api_key,
                max_tokens: config.max_tokens,
                temperature: config.temperature,
            }),
        })
    }

    pub fn url(&self) -> &str {
        &self.endpoint.url
    }
}

#[async_trait]
impl LlmGateway for OpenAiCompatGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OpenAiCompatSession::new(
            Arc::clone(&self.endpoint),
            model.clone(),
            system_prompt,
        )))
    }
}

fn completions_url(base_url: &str) -> Result<String, ProviderConfigError> {
    let base = base_url.trim().trim_end_matches('/');
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(ProviderConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: "expected an http:// or https:// URL".to_string(),
        });
    }
    Ok(format!("{}/chat/completions", base))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key() -> FileProviderConfig {
        FileProviderConfig {
            api_key_env: "DIALECTIC_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_endpoint_is_xai() {
        let gateway = OpenAiCompatGateway::from_config(&config_with_key()).unwrap();
        assert_eq!(gateway.url(), "https://api.x.ai/v1/chat/completions");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = FileProviderConfig {
            base_url: "http://localhost:11434/v1/".to_string(),
            ..config_with_key()
        };
        let gateway = OpenAiCompatGateway::from_config(&config).unwrap();
        assert_eq!(gateway.url(), "http://localhost:11434/v1/chat/completions");
    }

    #[test]
    fn test_missing_api_key() {
        let config = FileProviderConfig {
            api_key: None,
            ..config_with_key()
        };
        let err = OpenAiCompatGateway::from_config(&config).err().unwrap();
        assert_eq!(
            err,
            ProviderConfigError::MissingApiKey {
                env_var: "DIALECTIC_TEST_KEY_THAT_IS_NEVER_SET".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = FileProviderConfig {
            base_url: "api.x.ai".to_string(),
            ..config_with_key()
        };
        assert!(matches!(
            OpenAiCompatGateway::from_config(&config),
            Err(ProviderConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_create_session_keeps_model() {
        let gateway = OpenAiCompatGateway::from_config(&config_with_key()).unwrap();
        let session = gateway.create_session(&Model::Grok4).await.unwrap();
        assert_eq!(session.model(), &Model::Grok4);
    }
}
