//! Agent domain module
//!
//! Roles, their input/output signatures, the field values exchanged with
//! agents, labeled examples, and per-role model selection.

pub mod example;
pub mod field_values;
pub mod model_config;
pub mod role;
pub mod signature;

pub use example::{Demo, Example};
pub use field_values::{AgentInputs, AgentOutputs, FieldValues};
pub use model_config::ModelConfig;
pub use role::AgentRole;
pub use signature::{AgentSignature, FieldSpec};
