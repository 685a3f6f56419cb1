//! Workflow and compilation settings from TOML (`[respond]`, `[compile]`)

use dialectic_application::CompileParams;
use dialectic_domain::{RespondOptions, default_domains};
use serde::{Deserialize, Serialize};

/// Raw `[respond]` section; mirrors [`RespondOptions`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRespondConfig {
    pub max_iterations: usize,
    pub max_rounds: usize,
    pub domains: Vec<String>,
    pub acceptance_threshold: f64,
    pub debate_threshold: f64,
    pub parallel_experts: bool,
}

impl Default for FileRespondConfig {
    fn default() -> Self {
        let options = RespondOptions::default();
        Self {
            max_iterations: options.max_iterations,
            max_rounds: options.max_rounds,
            domains: default_domains(),
            acceptance_threshold: options.acceptance_threshold,
            debate_threshold: options.debate_threshold,
            parallel_experts: options.parallel_experts,
        }
    }
}

impl FileRespondConfig {
    pub fn to_respond_options(&self) -> RespondOptions {
        RespondOptions::default()
            .with_max_iterations(self.max_iterations)
            .with_max_rounds(self.max_rounds)
            .with_domains(self.domains.iter().cloned())
            .with_acceptance_threshold(self.acceptance_threshold)
            .with_debate_threshold(self.debate_threshold)
            .with_parallel_experts(self.parallel_experts)
    }
}

/// Raw `[compile]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCompileConfig {
    pub enabled: bool,
    pub max_demos: usize,
    pub metric_threshold: f64,
}

impl Default for FileCompileConfig {
    fn default() -> Self {
        let params = CompileParams::default();
        Self {
            enabled: params.enabled,
            max_demos: params.max_demos,
            metric_threshold: params.metric_threshold,
        }
    }
}

impl FileCompileConfig {
    pub fn to_compile_params(&self) -> CompileParams {
        let params = if self.enabled {
            CompileParams::default()
        } else {
            CompileParams::disabled()
        };
        params
            .with_max_demos(self.max_demos)
            .with_metric_threshold(self.metric_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respond_defaults_match_domain() {
        let options = FileRespondConfig::default().to_respond_options();
        assert_eq!(options.max_iterations, 2);
        assert_eq!(options.max_rounds, 3);
        assert_eq!(options.resolved_domains(), default_domains());
        assert_eq!(options.acceptance_threshold, 0.8);
        assert_eq!(options.debate_threshold, 0.9);
    }

    #[test]
    fn test_compile_disabled() {
        let config = FileCompileConfig {
            enabled: false,
            ..Default::default()
        };
        let params = config.to_compile_params();
        assert!(!params.enabled);
        assert_eq!(params.max_demos, 4);
    }
}
