//! Use cases (application services)

pub mod compile_agents;
pub mod respond;
pub mod run_batch;
