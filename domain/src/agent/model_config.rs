//! Role-based model configuration.
//!
//! [`ModelConfig`] picks the model each agent role talks to. This is a static
//! value object; once created, models don't change at runtime.

use crate::agent::role::AgentRole;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Role-based model configuration.
///
/// Every role uses `default` unless `roles` names an override for it,
/// e.g. a stronger model for the critic only.
///
/// # Example
///
/// ```
/// use dialectic_domain::{AgentRole, Model, ModelConfig};
///
/// let config = ModelConfig::default().with_role(AgentRole::Critic, Model::Grok3);
///
/// assert_eq!(config.model_for(AgentRole::Critic), &Model::Grok3);
/// assert_eq!(config.model_for(AgentRole::Thesis), &Model::Grok3Mini);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model used by every role without an override.
    pub default: Model,
    /// Per-role overrides.
    #[serde(default)]
    pub roles: BTreeMap<AgentRole, Model>,
}

impl ModelConfig {
    pub fn new(default: Model) -> Self {
        Self {
            default,
            roles: BTreeMap::new(),
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_default(mut self, model: Model) -> Self {
        self.default = model;
        self
    }

    pub fn with_role(mut self, role: AgentRole, model: Model) -> Self {
        self.roles.insert(role, model);
        self
    }

    pub fn model_for(&self, role: AgentRole) -> &Model {
        self.roles.get(&role).unwrap_or(&self.default)
    }
}
