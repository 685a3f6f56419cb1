//! Compilation parameters: how demos are chosen for each agent.

use serde::{Deserialize, Serialize};

/// Demo selection control.
///
/// | Field | Effect |
/// |-------|--------|
/// | `enabled` | `false` builds every agent with zero demos |
/// | `max_demos` | Upper bound on demos per agent |
/// | `metric_threshold` | Examples scoring below this are skipped |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileParams {
    pub enabled: bool,
    pub max_demos: usize,
    pub metric_threshold: f64,
}

impl Default for CompileParams {
    fn default() -> Self {
        Self {
            enabled: true,
            max_demos: 4,
            metric_threshold: 0.1,
        }
    }
}

impl CompileParams {
    // ==================== Builder Methods ====================

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_max_demos(mut self, max: usize) -> Self {
        self.max_demos = max;
        self
    }

    pub fn with_metric_threshold(mut self, threshold: f64) -> Self {
        self.metric_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = CompileParams::default();
        assert!(params.enabled);
        assert_eq!(params.max_demos, 4);
        assert_eq!(params.metric_threshold, 0.1);
    }

    #[test]
    fn test_disabled_keeps_other_defaults() {
        let params = CompileParams::disabled().with_max_demos(2);
        assert!(!params.enabled);
        assert_eq!(params.max_demos, 2);
    }
}
