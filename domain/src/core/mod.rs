//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - text-generation models backing the agents
//! - [`query::Query`] - a validated query posed to the responder
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod model;
pub mod query;
pub mod string;
