//! Built-in labeled examples used to compile agent demos.

use crate::agent::example::Example;
use crate::agent::field_values::FieldValues;
use crate::agent::signature::fields::*;

const MEANING_Q: &str = "What is the meaning of life?";
const MEANING_T: &str = "The meaning of life, according to existentialists like Sartre, is created by individual choices and actions.";
const MEANING_A: &str = "However, nihilists like Nietzsche argue that life has no inherent meaning, challenging us to create our own values.";
const MEANING_S: &str = "Reconciling these, meaning emerges from personal creation amid apparent absurdity, blending existential choice with Nietzschean value creation.";

const SKY_Q: &str = "Why is the sky blue?";
const SKY_T: &str = "The sky appears blue due to Rayleigh scattering of sunlight in the atmosphere.";
const SKY_A: &str = "On a deeper level, the perception of color is subjective, as explored in philosophy of mind.";
const SKY_S: &str = "The blue sky results from physical scattering, yet its perception invites philosophical inquiry into qualia and reality.";

const JUSTICE_Q: &str = "What is justice?";
const JUSTICE_T: &str = "Justice, as per Plato, is the harmonious balance of the soul and society.";
const JUSTICE_A: &str = "Contrastingly, Rawls proposes justice as fairness, emphasizing equality and the veil of ignorance.";
const JUSTICE_S: &str = "Justice integrates Platonic harmony with Rawlsian fairness, promoting balanced societies through equitable principles.";

/// The training set: three thesis, antithesis, and synthesis examples each,
/// one pro and one con debate example, and two expert examples.
pub fn training_examples() -> Vec<Example> {
    let triples = [
        (MEANING_Q, MEANING_T, MEANING_A, MEANING_S),
        (SKY_Q, SKY_T, SKY_A, SKY_S),
        (JUSTICE_Q, JUSTICE_T, JUSTICE_A, JUSTICE_S),
    ];

    let mut examples = Vec::new();
    for (q, t, _, _) in triples {
        examples.push(FieldValues::new().with(QUERY, q).with(THESIS, t));
    }
    for (q, t, a, _) in triples {
        examples.push(
            FieldValues::new()
                .with(QUERY, q)
                .with(THESIS, t)
                .with(ANTITHESIS, a),
        );
    }
    for (q, t, a, s) in triples {
        examples.push(
            FieldValues::new()
                .with(QUERY, q)
                .with(THESIS, t)
                .with(ANTITHESIS, a)
                .with(SYNTHESIS, s),
        );
    }

    examples.push(
        FieldValues::new()
            .with(QUERY, "Is AI beneficial?")
            .with(CURRENT_POSITION, "AI is beneficial for productivity.")
            .with(OPPOSING_ARGUMENTS, "But it can cause job loss.")
            .with(
                PRO_ARGUMENT,
                "While job loss is a concern, AI creates new opportunities and enhances efficiency, leading to net societal gains.",
            ),
    );
    examples.push(
        FieldValues::new()
            .with(QUERY, "Is AI beneficial?")
            .with(CURRENT_POSITION, "AI creates new opportunities.")
            .with(SUPPORTING_ARGUMENTS, "It boosts productivity.")
            .with(
                CON_ARGUMENT,
                "However, ethical issues like bias and privacy concerns persist, requiring careful regulation.",
            ),
    );

    examples.push(
        FieldValues::new()
            .with(QUERY, "What is gravity?")
            .with(EXPERTISE_DOMAIN, "science")
            .with(CONTEXT, "")
            .with(
                OPINION,
                "Gravity is the fundamental force described by Newton's law of universal gravitation and Einstein's general relativity.",
            ),
    );
    examples.push(
        FieldValues::new()
            .with(QUERY, "What is gravity?")
            .with(EXPERTISE_DOMAIN, "philosophy")
            .with(CONTEXT, "")
            .with(
                OPINION,
                "In philosophy, gravity metaphorically represents determinism and the inexorable laws governing existence.",
            ),
    );

    examples.into_iter().map(Example::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::role::AgentRole;

    #[test]
    fn test_training_set_size() {
        assert_eq!(training_examples().len(), 13);
    }

    #[test]
    fn test_examples_per_role() {
        let examples = training_examples();
        let count = |role| examples.iter().filter(|e| e.applies_to(role)).count();
        assert_eq!(count(AgentRole::Thesis), 3);
        assert_eq!(count(AgentRole::Antithesis), 3);
        assert_eq!(count(AgentRole::Synthesis), 3);
        assert_eq!(count(AgentRole::Critic), 3);
        assert_eq!(count(AgentRole::ProDebate), 1);
        assert_eq!(count(AgentRole::ConDebate), 1);
        assert_eq!(count(AgentRole::Expert), 2);
    }
}
