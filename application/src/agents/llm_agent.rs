//! LLM-backed agents
//!
//! Each invocation opens a fresh session whose system prompt is the role's
//! signature, sends the demos plus current inputs, and parses the reply's
//! field sections. No conversation state survives between calls.

use crate::ports::agent::{Agent, Critic, GenerationError};
use crate::ports::llm_gateway::LlmGateway;
use async_trait::async_trait;
use dialectic_domain::prompt::{COMPLETED_MARKER, section_marker};
use dialectic_domain::{
    AgentInputs, AgentRole, Critique, Demo, Model, PromptTemplate, parse_critic_reply,
    parse_output_fields,
};
use std::sync::Arc;
use tracing::debug;

/// An agent whose output comes from one LLM round trip
pub struct LlmAgent {
    role: AgentRole,
    gateway: Arc<dyn LlmGateway>,
    model: Model,
    demos: Vec<Demo>,
}

impl LlmAgent {
    pub fn new(role: AgentRole, gateway: Arc<dyn LlmGateway>, model: Model) -> Self {
        Self {
            role,
            gateway,
            model,
            demos: Vec::new(),
        }
    }

    pub fn with_demos(mut self, demos: Vec<Demo>) -> Self {
        self.demos = demos;
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn demos(&self) -> &[Demo] {
        &self.demos
    }

    /// Render the prompt, send it, and return the raw reply
    async fn generate(&self, inputs: &AgentInputs) -> Result<String, GenerationError> {
        let signature = self.role.signature();
        if let Some(field) = signature.input_names().find(|name| !inputs.contains(name)) {
            return Err(GenerationError::MissingInput {
                role: self.role,
                field,
            });
        }

        let system = PromptTemplate::system_prompt(signature);
        let prompt = PromptTemplate::user_prompt(signature, &self.demos, inputs);

        debug!(
            "{} agent -> {} ({} demos, {} chars)",
            self.role,
            self.model,
            self.demos.len(),
            prompt.len()
        );

        let gateway_err = |source| GenerationError::Gateway {
            role: self.role,
            source,
        };
        let session = self
            .gateway
            .create_session_with_system_prompt(&self.model, &system)
            .await
            .map_err(gateway_err)?;
        session.send(&prompt).await.map_err(gateway_err)
    }
}

#[async_trait]
impl Agent for LlmAgent {
    fn role(&self) -> AgentRole {
        self.role
    }

    async fn invoke(&self, inputs: &AgentInputs) -> Result<String, GenerationError> {
        let reply = self.generate(inputs).await?;
        let field = self.role.primary_output();

        let output = match parse_output_fields(&reply, &[field]).get(field) {
            Some(text) => text.to_string(),
            // No section headers: take the reply as the field itself
            None => reply
                .replace(&section_marker(COMPLETED_MARKER), "")
                .trim()
                .to_string(),
        };

        if output.is_empty() {
            return Err(GenerationError::EmptyOutput { role: self.role });
        }
        Ok(output)
    }
}

/// The critic: an [`LlmAgent`] whose reply is split into critique and score
pub struct LlmCritic {
    inner: LlmAgent,
}

impl LlmCritic {
    pub fn new(gateway: Arc<dyn LlmGateway>, model: Model) -> Self {
        Self {
            inner: LlmAgent::new(AgentRole::Critic, gateway, model),
        }
    }

    pub fn with_demos(mut self, demos: Vec<Demo>) -> Self {
        self.inner = self.inner.with_demos(demos);
        self
    }

    pub fn demos(&self) -> &[Demo] {
        self.inner.demos()
    }
}

#[async_trait]
impl Critic for LlmCritic {
    async fn critique(&self, inputs: &AgentInputs) -> Result<Critique, GenerationError> {
        let reply = self.inner.generate(inputs).await?;
        if reply.trim().is_empty() {
            return Err(GenerationError::EmptyOutput {
                role: AgentRole::Critic,
            });
        }
        let (text, raw_score) = parse_critic_reply(&reply);
        Ok(Critique::new(text, raw_score))
    }
}
