//! Agent signatures: the named text fields each role reads and writes.
//!
//! The orchestrator only ever talks to an agent through these field names, so
//! prompt wording and few-shot demos can change without touching control flow.

use crate::agent::role::AgentRole;

/// Canonical field names shared by signatures, inputs, and examples.
pub mod fields {
    pub const QUERY: &str = "query";
    pub const THESIS: &str = "thesis";
    pub const ANTITHESIS: &str = "antithesis";
    pub const SYNTHESIS: &str = "synthesis";
    pub const CRITIQUE: &str = "critique";
    pub const SCORE: &str = "score";
    pub const CURRENT_POSITION: &str = "current_position";
    pub const OPPOSING_ARGUMENTS: &str = "opposing_arguments";
    pub const SUPPORTING_ARGUMENTS: &str = "supporting_arguments";
    pub const PRO_ARGUMENT: &str = "pro_argument";
    pub const CON_ARGUMENT: &str = "con_argument";
    pub const EXPERTISE_DOMAIN: &str = "expertise_domain";
    pub const CONTEXT: &str = "context";
    pub const OPINION: &str = "opinion";
}

use fields::*;

/// A single named field in a signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: Option<&'static str>,
}

impl FieldSpec {
    const fn text(name: &'static str) -> Self {
        Self {
            name,
            description: None,
        }
    }

    const fn described(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description: Some(description),
        }
    }
}

/// Declared inputs and outputs of one agent role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSignature {
    pub role: AgentRole,
    /// Task instruction given to the model
    pub instruction: &'static str,
    pub inputs: &'static [FieldSpec],
    pub outputs: &'static [FieldSpec],
}

static THESIS_SIGNATURE: AgentSignature = AgentSignature {
    role: AgentRole::Thesis,
    instruction: "Generate an initial thesis in response to the query, grounded in logical reasoning and truth-seeking.",
    inputs: &[FieldSpec::text(QUERY)],
    outputs: &[FieldSpec::text(THESIS)],
};

static ANTITHESIS_SIGNATURE: AgentSignature = AgentSignature {
    role: AgentRole::Antithesis,
    instruction: "Generate a counterpoint to the given thesis, offering an alternative perspective grounded in logical reasoning and truth-seeking.",
    inputs: &[FieldSpec::text(QUERY), FieldSpec::text(THESIS)],
    outputs: &[FieldSpec::text(ANTITHESIS)],
};

static SYNTHESIS_SIGNATURE: AgentSignature = AgentSignature {
    role: AgentRole::Synthesis,
    instruction: "Synthesize the thesis and antithesis into a final, balanced response grounded in logical reasoning and truth-seeking.",
    inputs: &[
        FieldSpec::text(QUERY),
        FieldSpec::text(THESIS),
        FieldSpec::text(ANTITHESIS),
    ],
    outputs: &[FieldSpec::text(SYNTHESIS)],
};

static CRITIC_SIGNATURE: AgentSignature = AgentSignature {
    role: AgentRole::Critic,
    instruction: "Critique the synthesis for factual accuracy, logical consistency, and balance. Apply falsifiability: look for the claim most likely to be wrong. Provide feedback and a score; output the score as a decimal between 0.0 and 1.0.",
    inputs: &[
        FieldSpec::text(QUERY),
        FieldSpec::text(THESIS),
        FieldSpec::text(ANTITHESIS),
        FieldSpec::text(SYNTHESIS),
    ],
    outputs: &[
        FieldSpec::text(CRITIQUE),
        FieldSpec::described(SCORE, "Decimal float between 0.0 and 1.0"),
    ],
};

static PRO_DEBATE_SIGNATURE: AgentSignature = AgentSignature {
    role: AgentRole::ProDebate,
    instruction: "Generate supporting arguments for the current position in a debate, answering the opposing arguments while staying logical and truthful.",
    inputs: &[
        FieldSpec::text(QUERY),
        FieldSpec::text(CURRENT_POSITION),
        FieldSpec::text(OPPOSING_ARGUMENTS),
    ],
    outputs: &[FieldSpec::text(PRO_ARGUMENT)],
};

static CON_DEBATE_SIGNATURE: AgentSignature = AgentSignature {
    role: AgentRole::ConDebate,
    instruction: "Generate counterarguments against the current position in a debate, offering alternative perspectives grounded in logical reasoning and truth-seeking.",
    inputs: &[
        FieldSpec::text(QUERY),
        FieldSpec::text(CURRENT_POSITION),
        FieldSpec::text(SUPPORTING_ARGUMENTS),
    ],
    outputs: &[FieldSpec::text(CON_ARGUMENT)],
};

static EXPERT_SIGNATURE: AgentSignature = AgentSignature {
    role: AgentRole::Expert,
    instruction: "Provide specialized insight from the given expertise domain, grounded in logical reasoning and truth-seeking. Use the context, if any, as feedback on a previous answer.",
    inputs: &[
        FieldSpec::text(QUERY),
        FieldSpec::text(EXPERTISE_DOMAIN),
        FieldSpec::text(CONTEXT),
    ],
    outputs: &[FieldSpec::text(OPINION)],
};

impl AgentSignature {
    pub fn for_role(role: AgentRole) -> &'static AgentSignature {
        match role {
            AgentRole::Thesis => &THESIS_SIGNATURE,
            AgentRole::Antithesis => &ANTITHESIS_SIGNATURE,
            AgentRole::Synthesis => &SYNTHESIS_SIGNATURE,
            AgentRole::Critic => &CRITIC_SIGNATURE,
            AgentRole::ProDebate => &PRO_DEBATE_SIGNATURE,
            AgentRole::ConDebate => &CON_DEBATE_SIGNATURE,
            AgentRole::Expert => &EXPERT_SIGNATURE,
        }
    }

    pub fn input_names(&self) -> impl Iterator<Item = &'static str> {
        self.inputs.iter().map(|f| f.name)
    }

    pub fn output_names(&self) -> impl Iterator<Item = &'static str> {
        self.outputs.iter().map(|f| f.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_a_signature_for_itself() {
        for role in AgentRole::ALL {
            assert_eq!(AgentSignature::for_role(role).role, role);
        }
    }

    #[test]
    fn test_critic_fields() {
        let sig = AgentSignature::for_role(AgentRole::Critic);
        assert_eq!(
            sig.input_names().collect::<Vec<_>>(),
            vec![QUERY, THESIS, ANTITHESIS, SYNTHESIS]
        );
        assert_eq!(sig.output_names().collect::<Vec<_>>(), vec![CRITIQUE, SCORE]);
        assert!(sig.outputs[1].description.is_some());
    }

    #[test]
    fn test_every_signature_reads_the_query() {
        for role in AgentRole::ALL {
            assert_eq!(role.signature().inputs[0].name, QUERY);
        }
    }
}
