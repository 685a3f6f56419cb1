//! Per-role model configuration from TOML (`[models]` section)

use dialectic_domain::{AgentRole, ConfigIssue, ConfigIssueCode, Model, ModelConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-role model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// default = "grok-3-mini"
///
/// [models.roles]
/// critic = "grok-3"
/// synthesis = "grok-4"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model used by every role without an override
    pub default: String,
    /// Role name -> model id
    pub roles: BTreeMap<String, String>,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            default: Model::default().to_string(),
            roles: BTreeMap::new(),
        }
    }
}

impl FileModelsConfig {
    fn parse_model(field: &str, value: &str) -> (Option<Model>, Vec<ConfigIssue>) {
        if value.trim().is_empty() {
            let issue = ConfigIssue::error(
                ConfigIssueCode::EmptyModelName {
                    field: field.to_string(),
                },
                format!("{}: model name cannot be empty", field),
            );
            return (None, vec![issue]);
        }
        // Model::from_str is infallible; unknown ids become Custom(...)
        (Some(value.trim().parse().unwrap_or_default()), Vec::new())
    }

    /// Build the domain model selection, collecting issues along the way.
    ///
    /// Entries with an empty model or an unknown role are skipped; an empty
    /// default falls back to [`Model::default`].
    pub fn to_model_config(&self) -> (ModelConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let (default, default_issues) = Self::parse_model("models.default", &self.default);
        issues.extend(default_issues);
        let mut config = ModelConfig::new(default.unwrap_or_default());

        for (name, model) in &self.roles {
            let role: AgentRole = match name.parse() {
                Ok(role) => role,
                Err(_) => {
                    issues.push(ConfigIssue::error(
                        ConfigIssueCode::UnknownRole { role: name.clone() },
                        format!(
                            "models.roles.{}: unknown role (expected one of: {})",
                            name,
                            AgentRole::ALL
                                .iter()
                                .map(|r| r.as_str())
                                .collect::<Vec<_>>()
                                .join(", ")
                        ),
                    ));
                    continue;
                }
            };
            let (parsed, role_issues) =
                Self::parse_model(&format!("models.roles.{}", name), model);
            issues.extend(role_issues);
            if let Some(model) = parsed {
                config = config.with_role(role, model);
            }
        }

        (config, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_overrides() {
        let config: FileModelsConfig = toml::from_str(
            r#"
default = "grok-3"

[roles]
critic = "grok-4"
pro = "my-local-model"
"#,
        )
        .unwrap();

        let (models, issues) = config.to_model_config();
        assert!(issues.is_empty());
        assert_eq!(models.model_for(AgentRole::Thesis), &Model::Grok3);
        assert_eq!(models.model_for(AgentRole::Critic), &Model::Grok4);
        assert_eq!(
            models.model_for(AgentRole::ProDebate),
            &Model::Custom("my-local-model".to_string())
        );
    }

    #[test]
    fn test_unknown_role_and_empty_model() {
        let mut config = FileModelsConfig::default();
        config.roles.insert("judge".to_string(), "grok-3".to_string());
        config.roles.insert("critic".to_string(), "  ".to_string());

        let (models, issues) = config.to_model_config();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.is_error()));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::UnknownRole { role } if role == "judge"
        )));
        assert_eq!(models.model_for(AgentRole::Critic), &Model::Grok3Mini);
    }

    #[test]
    fn test_empty_default_falls_back() {
        let config = FileModelsConfig {
            default: String::new(),
            roles: BTreeMap::new(),
        };
        let (models, issues) = config.to_model_config();
        assert_eq!(issues.len(), 1);
        assert_eq!(models.model_for(AgentRole::Thesis), &Model::default());
    }
}
