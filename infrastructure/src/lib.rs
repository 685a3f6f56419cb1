//! Infrastructure layer for dialectic
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: configuration file loading, the OpenAI-compatible
//! generation backend, and the JSONL transcript logger.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileCompileConfig, FileConfig, FileLoggingConfig, FileModelsConfig,
    FileOutputConfig, FileProviderConfig, FileReplConfig, FileRespondConfig,
};
pub use logging::JsonlConversationLogger;
pub use providers::{OpenAiCompatGateway, OpenAiCompatSession, ProviderConfigError};
