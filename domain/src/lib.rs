//! Domain layer for dialectic
//!
//! This crate contains the core value objects, result records, and pure
//! logic. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Workflows
//!
//! A query is answered by one of three fixed workflows:
//!
//! - **Binary**: thesis, antithesis, synthesis, refined until a critique accepts it
//! - **Debate**: alternating con/pro rounds closed by a synthesis of the transcript
//! - **Experts**: one opinion per domain merged into a synthesis, refined on critique
//!
//! ## Agents
//!
//! Every step is performed by an agent role with a fixed [`AgentSignature`]:
//! named text inputs in, named text outputs out. The critic additionally
//! yields a score that [`parse_score`] normalizes into `[0.0, 1.0]`.

pub mod agent;
pub mod config;
pub mod core;
pub mod evaluation;
pub mod prompt;
pub mod workflow;

// Re-export commonly used types
pub use agent::{
    AgentInputs, AgentOutputs, AgentRole, AgentSignature, Demo, Example, FieldSpec, FieldValues,
    ModelConfig, signature::fields,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, model::Model, query::Query, string::preview};
pub use evaluation::{philosophical_metric, score_response, training_examples};
pub use prompt::{PromptTemplate, parse_critic_reply, parse_output_fields};
pub use workflow::{
    critique::{Critique, FALLBACK_SCORE, RawScore, parse_score},
    mode::Mode,
    options::{RespondOptions, default_domains},
    value_objects::{
        DebateEntry, DebateLabel, DebateResult, DialecticResult, ExpertResult, ResponseRecord,
        combine_opinions,
    },
};
