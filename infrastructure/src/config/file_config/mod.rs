//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain/application
//! types by the `to_*` helpers.

mod models;
mod output;
mod provider;
mod repl;
mod respond;

pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use provider::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, FileProviderConfig};
pub use repl::FileReplConfig;
pub use respond::{FileCompileConfig, FileRespondConfig};

use dialectic_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw `[logging]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of agent outputs and critiques
    pub conversation_log: Option<String>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Per-role model selection
    pub models: FileModelsConfig,
    /// Generation backend
    pub provider: FileProviderConfig,
    /// Workflow budgets and thresholds
    pub respond: FileRespondConfig,
    /// Demo compilation
    pub compile: FileCompileConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript logging
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.models.to_model_config().1);

        for (field, value) in [
            ("respond.acceptance_threshold", self.respond.acceptance_threshold),
            ("respond.debate_threshold", self.respond.debate_threshold),
            ("compile.metric_threshold", self.compile.metric_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::ThresholdOutOfRange {
                        field: field.to_string(),
                        value,
                    },
                    format!("{}: {} is outside [0.0, 1.0]", field, value),
                ));
            }
        }

        if self.respond.domains.is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyDomains,
                "respond.domains is empty, falling back to science, philosophy, humor",
            ));
        }

        // Zero budgets are legal but almost always a mistake
        for (field, value) in [
            ("respond.max_iterations", self.respond.max_iterations),
            ("respond.max_rounds", self.respond.max_rounds),
        ] {
            if value == 0 {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::ZeroBudget {
                        field: field.to_string(),
                    },
                    format!("{} is 0, the loop will not run", field),
                ));
            }
        }

        if self.provider.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidTimeout,
                "provider.timeout_seconds cannot be 0",
            ));
        }

        issues
    }
}
