//! Labeled examples and the demos compiled from them.

use crate::agent::field_values::FieldValues;
use crate::agent::role::AgentRole;
use crate::agent::signature::fields;
use serde::{Deserialize, Serialize};

/// A labeled example: every field it carries, inputs and outputs alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub fields: FieldValues,
}

impl Example {
    pub fn new(fields: FieldValues) -> Self {
        Self { fields }
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    /// Whether this example belongs to `role`'s training set.
    ///
    /// Examples are layered (a synthesis example also carries a thesis and an
    /// antithesis), so each role takes the examples whose deepest output is its own.
    pub fn applies_to(&self, role: AgentRole) -> bool {
        match role {
            AgentRole::Thesis => self.has(fields::THESIS) && !self.has(fields::ANTITHESIS),
            AgentRole::Antithesis => self.has(fields::ANTITHESIS) && !self.has(fields::SYNTHESIS),
            AgentRole::Synthesis | AgentRole::Critic => self.has(fields::SYNTHESIS),
            AgentRole::ProDebate => self.has(fields::PRO_ARGUMENT),
            AgentRole::ConDebate => self.has(fields::CON_ARGUMENT),
            AgentRole::Expert => self.has(fields::OPINION),
        }
    }

    /// Text the quality metric judges when selecting this example for `role`.
    ///
    /// The role's primary output when labeled, otherwise the synthesis (the
    /// critic's examples carry no critique of their own).
    pub fn labeled_text(&self, role: AgentRole) -> Option<&str> {
        self.fields
            .get(role.primary_output())
            .or_else(|| self.fields.get(fields::SYNTHESIS))
    }

    /// Project this example onto `role`'s signature.
    pub fn demo_for(&self, role: AgentRole) -> Demo {
        let signature = role.signature();
        Demo {
            inputs: self.fields.select(signature.input_names()),
            outputs: self.fields.select(signature.output_names()),
        }
    }
}

/// A few-shot demonstration attached to an agent's prompt.
///
/// `outputs` may be empty when the example only supplies inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demo {
    pub inputs: FieldValues,
    pub outputs: FieldValues,
}
