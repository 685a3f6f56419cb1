//! Reasoning workflow domain
//!
//! Value objects shared by the three workflows the responder runs.
//!
//! ```text
//! binary   Thesis -> Antithesis -> Synthesis -> Critique -> {Accept | Refine}
//! debate   Thesis -> (Con r -> Critique -> Pro r)* -> Synthesis
//! experts  Opinion(domain)* -> Synthesis -> Critique -> {Accept | Re-opine}
//! ```

pub mod critique;
pub mod mode;
pub mod options;
pub mod value_objects;
