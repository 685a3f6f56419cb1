//! Agent ports
//!
//! The orchestrator sees agents only through these traits. How an agent
//! produces its text (an LLM call with compiled demos, a canned reply in a
//! test) is invisible to the workflow.

use crate::ports::llm_gateway::GatewayError;
use async_trait::async_trait;
use dialectic_domain::{AgentInputs, AgentRole, Critique};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while an agent produces its output
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("{role} agent is missing input field '{field}'")]
    MissingInput { role: AgentRole, field: &'static str },

    #[error("{role} agent failed: {source}")]
    Gateway {
        role: AgentRole,
        source: GatewayError,
    },

    #[error("{role} agent returned empty output")]
    EmptyOutput { role: AgentRole },
}

impl GenerationError {
    pub fn role(&self) -> AgentRole {
        match self {
            GenerationError::MissingInput { role, .. }
            | GenerationError::Gateway { role, .. }
            | GenerationError::EmptyOutput { role } => *role,
        }
    }
}

/// One semantic transformation: named text inputs to a text output.
#[async_trait]
pub trait Agent: Send + Sync {
    fn role(&self) -> AgentRole;

    /// Produce the role's primary output for `inputs`
    async fn invoke(&self, inputs: &AgentInputs) -> Result<String, GenerationError>;
}

/// An agent that judges a synthesis and scores it.
#[async_trait]
pub trait Critic: Send + Sync {
    /// Critique `inputs`; the score is always normalized into `[0.0, 1.0]`
    async fn critique(&self, inputs: &AgentInputs) -> Result<Critique, GenerationError>;
}

/// One agent per role, as held by the responder.
#[derive(Clone)]
pub struct DialecticAgents {
    pub thesis: Arc<dyn Agent>,
    pub antithesis: Arc<dyn Agent>,
    pub synthesis: Arc<dyn Agent>,
    pub critic: Arc<dyn Critic>,
    pub pro_debate: Arc<dyn Agent>,
    pub con_debate: Arc<dyn Agent>,
    pub expert: Arc<dyn Agent>,
}
