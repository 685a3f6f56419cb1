//! Compile Agents use case
//!
//! Offline stage that turns labeled examples into configured agents. The
//! responder never knows whether its agents were compiled; it only sees the
//! [`Agent`](crate::ports::agent::Agent) and [`Critic`](crate::ports::agent::Critic) traits.

use crate::agents::{LlmAgent, LlmCritic};
use crate::config::CompileParams;
use crate::ports::agent::DialecticAgents;
use crate::ports::llm_gateway::LlmGateway;
use dialectic_domain::{AgentRole, Demo, Example, ModelConfig, philosophical_metric};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Input for the CompileAgents use case
#[derive(Debug, Clone)]
pub struct CompileAgentsInput {
    pub models: ModelConfig,
    pub params: CompileParams,
    pub examples: Vec<Example>,
}

impl CompileAgentsInput {
    pub fn new(models: ModelConfig, examples: Vec<Example>) -> Self {
        Self {
            models,
            params: CompileParams::default(),
            examples,
        }
    }

    pub fn with_params(mut self, params: CompileParams) -> Self {
        self.params = params;
        self
    }
}

/// The compiled agent set plus how many demos each role received
pub struct CompiledAgents {
    pub agents: DialecticAgents,
    pub demo_counts: BTreeMap<AgentRole, usize>,
}

/// Use case for building the responder's agents from examples
pub struct CompileAgentsUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl CompileAgentsUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    pub fn execute(&self, input: CompileAgentsInput) -> CompiledAgents {
        let mut demo_counts = BTreeMap::new();
        let mut demos_for = |role: AgentRole| {
            let demos = if input.params.enabled {
                select_demos(role, &input.examples, &input.params)
            } else {
                Vec::new()
            };
            debug!("Compiled {} agent with {} demos", role, demos.len());
            demo_counts.insert(role, demos.len());
            demos
        };

        let agent = |role: AgentRole, demos: Vec<Demo>| {
            Arc::new(
                LlmAgent::new(role, Arc::clone(&self.gateway), input.models.model_for(role).clone())
                    .with_demos(demos),
            )
        };

        let thesis = agent(AgentRole::Thesis, demos_for(AgentRole::Thesis));
        let antithesis = agent(AgentRole::Antithesis, demos_for(AgentRole::Antithesis));
        let synthesis = agent(AgentRole::Synthesis, demos_for(AgentRole::Synthesis));
        let pro_debate = agent(AgentRole::ProDebate, demos_for(AgentRole::ProDebate));
        let con_debate = agent(AgentRole::ConDebate, demos_for(AgentRole::ConDebate));
        let expert = agent(AgentRole::Expert, demos_for(AgentRole::Expert));
        let critic = Arc::new(
            LlmCritic::new(
                Arc::clone(&self.gateway),
                input.models.model_for(AgentRole::Critic).clone(),
            )
            .with_demos(demos_for(AgentRole::Critic)),
        );

        info!(
            "Compiled agents ({} demos total)",
            demo_counts.values().sum::<usize>()
        );

        CompiledAgents {
            agents: DialecticAgents {
                thesis,
                antithesis,
                synthesis,
                critic,
                pro_debate,
                con_debate,
                expert,
            },
            demo_counts,
        }
    }
}

/// Demos for `role`: matching examples whose labeled text passes the metric,
/// in example order, capped at `max_demos`.
pub fn select_demos(role: AgentRole, examples: &[Example], params: &CompileParams) -> Vec<Demo> {
    examples
        .iter()
        .filter(|ex| ex.applies_to(role))
        .filter(|ex| {
            ex.labeled_text(role)
                .is_some_and(|text| philosophical_metric(text) >= params.metric_threshold)
        })
        .take(params.max_demos)
        .map(|ex| ex.demo_for(role))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::{GatewayError, LlmSession};
    use async_trait::async_trait;
    use crate::ports::agent::Agent;
    use dialectic_domain::{Model, training_examples};

    struct NullGateway;

    #[async_trait]
    impl LlmGateway for NullGateway {
        async fn create_session_with_system_prompt(
            &self,
            _model: &Model,
            _system_prompt: &str,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            Err(GatewayError::Other("not used".to_string()))
        }
    }

    #[test]
    fn test_select_demos_per_role() {
        let examples = training_examples();
        let params = CompileParams::default();

        let thesis = select_demos(AgentRole::Thesis, &examples, &params);
        assert_eq!(thesis.len(), 3);
        assert!(thesis.iter().all(|d| d.outputs.contains("thesis")));
        assert!(thesis.iter().all(|d| !d.inputs.contains("antithesis")));

        assert_eq!(select_demos(AgentRole::Expert, &examples, &params).len(), 2);
        assert_eq!(select_demos(AgentRole::ConDebate, &examples, &params).len(), 1);
    }

    #[test]
    fn test_critic_demos_are_inputs_only() {
        let demos = select_demos(AgentRole::Critic, &training_examples(), &CompileParams::default());
        assert_eq!(demos.len(), 3);
        assert!(demos.iter().all(|d| d.outputs.is_empty()));
        assert!(demos.iter().all(|d| d.inputs.contains("synthesis")));
    }

    #[test]
    fn test_select_demos_respects_cap_and_threshold() {
        let examples = training_examples();

        let capped = CompileParams::default().with_max_demos(1);
        assert_eq!(select_demos(AgentRole::Synthesis, &examples, &capped).len(), 1);

        // Only the justice synthesis mentions balance and is long enough
        let strict = CompileParams::default().with_metric_threshold(0.2);
        let demos = select_demos(AgentRole::Synthesis, &examples, &strict);
        assert_eq!(demos.len(), 1);
        assert_eq!(demos[0].inputs.get("query"), Some("What is justice?"));
    }

    #[test]
    fn test_execute_counts_demos() {
        let use_case = CompileAgentsUseCase::new(Arc::new(NullGateway));
        let compiled = use_case.execute(CompileAgentsInput::new(
            ModelConfig::default(),
            training_examples(),
        ));

        assert_eq!(compiled.demo_counts.len(), AgentRole::ALL.len());
        assert_eq!(compiled.demo_counts[&AgentRole::Thesis], 3);
        assert_eq!(compiled.demo_counts[&AgentRole::ProDebate], 1);
        assert_eq!(compiled.agents.thesis.role(), AgentRole::Thesis);
    }

    #[test]
    fn test_disabled_compilation_has_no_demos() {
        let use_case = CompileAgentsUseCase::new(Arc::new(NullGateway));
        let compiled = use_case.execute(
            CompileAgentsInput::new(ModelConfig::default(), training_examples())
                .with_params(CompileParams::disabled()),
        );

        assert!(compiled.demo_counts.values().all(|n| *n == 0));
    }
}
