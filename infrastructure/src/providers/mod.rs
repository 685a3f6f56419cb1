//! Text-generation providers implementing the
//! [`LlmGateway`](dialectic_application::LlmGateway) port.

pub mod error;
pub mod openai;

pub use error::ProviderConfigError;
pub use openai::{OpenAiCompatGateway, OpenAiCompatSession};
