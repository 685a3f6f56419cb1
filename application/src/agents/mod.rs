//! Agent implementations backed by the LLM gateway.

pub mod llm_agent;

pub use llm_agent::{LlmAgent, LlmCritic};
