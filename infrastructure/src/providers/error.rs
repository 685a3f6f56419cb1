//! Errors raised while building a provider from configuration

use thiserror::Error;

/// Configuration problems detected before any request is sent
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderConfigError {
    #[error("No API key found: set the {env_var} environment variable or [provider] api_key")]
    MissingApiKey { env_var: String },

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}
