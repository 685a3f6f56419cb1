//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Text-generation models an agent can be backed by (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Grok3Mini,
    Grok3,
    Grok4,
    // Any other id understood by the configured backend
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Grok3Mini => "grok-3-mini",
            Model::Grok3 => "grok-3",
            Model::Grok4 => "grok-4",
            Model::Custom(s) => s,
        }
    }

    /// Check if this is one of the xAI Grok models
    pub fn is_grok(&self) -> bool {
        match self {
            Model::Grok3Mini | Model::Grok3 | Model::Grok4 => true,
            Model::Custom(s) => s.starts_with("grok-"),
        }
    }
}

impl Default for Model {
    /// Returns the default model (grok-3-mini)
    fn default() -> Self {
        Model::Grok3Mini
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // Accept litellm-style provider prefixes ("xai/grok-3-mini")
        let id = s.strip_prefix("xai/").unwrap_or(s);
        Ok(match id {
            "grok-3-mini" => Model::Grok3Mini,
            "grok-3" => Model::Grok3,
            "grok-4" => Model::Grok4,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}
