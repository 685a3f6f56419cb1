//! Per-call workflow options.
//!
//! [`RespondOptions`] carries the knobs of all three modes; each mode reads
//! only the fields it needs and ignores the rest.

use serde::{Deserialize, Serialize};

/// Default refinement budget for binary and experts modes.
pub const DEFAULT_MAX_ITERATIONS: usize = 2;
/// Default number of con/pro rounds in debate mode.
pub const DEFAULT_MAX_ROUNDS: usize = 3;
/// Critique score at which binary and experts modes accept the synthesis.
pub const DEFAULT_ACCEPTANCE_THRESHOLD: f64 = 0.8;
/// Critique score at which debate mode stops exchanging rounds.
pub const DEFAULT_DEBATE_THRESHOLD: f64 = 0.9;

/// Domains consulted in experts mode when none are supplied.
pub fn default_domains() -> Vec<String> {
    vec![
        "science".to_string(),
        "philosophy".to_string(),
        "humor".to_string(),
    ]
}

/// Options for a single `respond` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RespondOptions {
    /// Maximum critique/refine iterations (binary, experts)
    pub max_iterations: usize,
    /// Maximum con/pro rounds (debate)
    pub max_rounds: usize,
    /// Requested expert domains; empty means [`default_domains`]
    pub domains: Vec<String>,
    /// Acceptance threshold for binary and experts critiques
    pub acceptance_threshold: f64,
    /// Early-stop threshold for debate critiques
    pub debate_threshold: f64,
    /// Generate expert opinions concurrently within one iteration
    pub parallel_experts: bool,
}

impl Default for RespondOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_rounds: DEFAULT_MAX_ROUNDS,
            domains: Vec::new(),
            acceptance_threshold: DEFAULT_ACCEPTANCE_THRESHOLD,
            debate_threshold: DEFAULT_DEBATE_THRESHOLD,
            parallel_experts: false,
        }
    }
}

impl RespondOptions {
    // ==================== Builder Methods ====================

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_max_rounds(mut self, max: usize) -> Self {
        self.max_rounds = max;
        self
    }

    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains = domains.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_acceptance_threshold(mut self, threshold: f64) -> Self {
        self.acceptance_threshold = threshold;
        self
    }

    pub fn with_debate_threshold(mut self, threshold: f64) -> Self {
        self.debate_threshold = threshold;
        self
    }

    pub fn with_parallel_experts(mut self, parallel: bool) -> Self {
        self.parallel_experts = parallel;
        self
    }

    /// Domains to consult, in request order with duplicates removed.
    ///
    /// Falls back to [`default_domains`] when none were requested.
    pub fn resolved_domains(&self) -> Vec<String> {
        let requested = if self.domains.is_empty() {
            default_domains()
        } else {
            self.domains.clone()
        };

        let mut unique: Vec<String> = Vec::with_capacity(requested.len());
        for domain in requested {
            if !unique.contains(&domain) {
                unique.push(domain);
            }
        }
        unique
    }
}
