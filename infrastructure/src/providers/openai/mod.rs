//! OpenAI-compatible chat completions provider.

mod gateway;
mod session;
mod types;

pub use gateway::OpenAiCompatGateway;
pub use session::OpenAiCompatSession;
