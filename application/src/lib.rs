//! Application layer for dialectic
//!
//! This crate contains use cases, port definitions, the LLM-backed agent
//! implementations, and application configuration. It depends only on the
//! domain layer.

pub mod agents;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use agents::{LlmAgent, LlmCritic};
pub use config::CompileParams;
pub use ports::{
    agent::{Agent, Critic, DialecticAgents, GenerationError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::compile_agents::{
    CompileAgentsInput, CompileAgentsUseCase, CompiledAgents, select_demos,
};
pub use use_cases::respond::{RespondError, RespondUseCase};
pub use use_cases::run_batch::{
    BatchEntry, BatchError, BatchItem, BatchOutcome, BatchReport, RunBatchUseCase,
};
