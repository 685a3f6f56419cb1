//! Generation backend configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_KEY_ENV: &str = "XAI_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.x.ai/v1";

/// OpenAI-compatible chat completions endpoint (xAI by default).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable holding the API key (default: "XAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key; the environment variable is preferred.
    pub api_key: Option<String>,
    /// Base URL; `/chat/completions` is appended.
    pub base_url: String,
    /// Max tokens per response.
    pub max_tokens: u32,
    /// Sampling temperature, backend default when unset.
    pub temperature: Option<f32>,
    /// Per-request timeout.
    pub timeout_seconds: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: 4096,
            temperature: None,
            timeout_seconds: 120,
        }
    }
}

impl FileProviderConfig {
    /// The API key from `api_key_env`, falling back to `api_key`.
    ///
    /// Blank values count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .or_else(|| self.api_key.clone())
            .filter(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_target_xai() {
        let config = FileProviderConfig::default();
        assert_eq!(config.api_key_env, "XAI_API_KEY");
        assert_eq!(config.base_url, "https://api.x.ai/v1");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_resolve_api_key_falls_back_to_inline_key() {
        let config = FileProviderConfig {
            api_key_env: "DIALECTIC_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            api_key: Some("sk-inline".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), Some("sk-inline".to_string()));
    }

    #[test]
    fn test_blank_inline_key_is_missing() {
        let config = FileProviderConfig {
            api_key_env: "DIALECTIC_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }
}
