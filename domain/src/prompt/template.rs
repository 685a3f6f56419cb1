//! Prompt templates for agent invocations

use crate::agent::example::Demo;
use crate::agent::field_values::FieldValues;
use crate::agent::signature::AgentSignature;

/// Field name closing every structured reply
pub const COMPLETED_MARKER: &str = "completed";

/// `[[ ## name ## ]]`, the header of one field section
pub fn section_marker(name: &str) -> String {
    format!("[[ ## {} ## ]]", name)
}

/// Templates for generating agent prompts from a signature
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt: the role instruction plus the reply format
    pub fn system_prompt(signature: &AgentSignature) -> String {
        let inputs = signature
            .inputs
            .iter()
            .enumerate()
            .map(|(i, f)| format!("{}. `{}`", i + 1, f.name))
            .collect::<Vec<_>>()
            .join("\n");

        let outputs = signature
            .outputs
            .iter()
            .enumerate()
            .map(|(i, f)| match f.description {
                Some(desc) => format!("{}. `{}`: {}", i + 1, f.name, desc),
                None => format!("{}. `{}`", i + 1, f.name),
            })
            .collect::<Vec<_>>()
            .join("\n");

        let skeleton = signature
            .outputs
            .iter()
            .map(|f| format!("{}\n{{{}}}", section_marker(f.name), f.name))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            r#"{instruction}

Your input fields are:
{inputs}

Your output fields are:
{outputs}

Reply with each output field in its own section, in this order, then close with the completed marker:

{skeleton}

{completed}"#,
            instruction = signature.instruction,
            completed = section_marker(COMPLETED_MARKER),
        )
    }

    /// User prompt: demonstrations first, then the current inputs
    pub fn user_prompt(signature: &AgentSignature, demos: &[Demo], inputs: &FieldValues) -> String {
        let mut prompt = String::new();

        for (i, demo) in demos.iter().enumerate() {
            prompt.push_str(&format!("--- Example {} ---\n\n", i + 1));
            push_sections(&mut prompt, &demo.inputs);
            push_sections(&mut prompt, &demo.outputs);
        }

        if !demos.is_empty() {
            prompt.push_str("--- Your turn ---\n\n");
        }

        let current = inputs.select(signature.input_names());
        push_sections(&mut prompt, &current);

        let first_output = signature
            .outputs
            .first()
            .map(|f| section_marker(f.name))
            .unwrap_or_default();
        prompt.push_str(&format!(
            "Respond with the output fields, starting with {} and ending with {}.",
            first_output,
            section_marker(COMPLETED_MARKER)
        ));

        prompt
    }
}

fn push_sections(prompt: &mut String, values: &FieldValues) {
    for (name, value) in values.iter() {
        prompt.push_str(&section_marker(name));
        prompt.push('\n');
        prompt.push_str(value);
        prompt.push_str("\n\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::role::AgentRole;

    #[test]
    fn test_system_prompt_lists_fields_and_skeleton() {
        let prompt = PromptTemplate::system_prompt(AgentRole::Critic.signature());
        assert!(prompt.starts_with("Critique the synthesis"));
        assert!(prompt.contains("4. `synthesis`"));
        assert!(prompt.contains("2. `score`: Decimal float between 0.0 and 1.0"));
        assert!(prompt.contains("[[ ## critique ## ]]\n{critique}"));
        assert!(prompt.ends_with("[[ ## completed ## ]]"));
    }

    #[test]
    fn test_user_prompt_without_demos() {
        let inputs = FieldValues::new()
            .with("thesis", "Rayleigh scattering.")
            .with("query", "Why is the sky blue?")
            .with("unrelated", "dropped");
        let prompt = PromptTemplate::user_prompt(AgentRole::Antithesis.signature(), &[], &inputs);

        assert!(!prompt.contains("Example"));
        assert!(!prompt.contains("unrelated"));
        // Signature order, not insertion order
        let q = prompt.find("[[ ## query ## ]]").unwrap();
        let t = prompt.find("[[ ## thesis ## ]]").unwrap();
        assert!(q < t);
        assert!(prompt.ends_with("starting with [[ ## antithesis ## ]] and ending with [[ ## completed ## ]]."));
    }

    #[test]
    fn test_user_prompt_with_demo() {
        let demo = Demo {
            inputs: FieldValues::new().with("query", "What is justice?"),
            outputs: FieldValues::new().with("thesis", "Harmony of the soul."),
        };
        let inputs = FieldValues::new().with("query", "What is courage?");
        let prompt = PromptTemplate::user_prompt(AgentRole::Thesis.signature(), &[demo], &inputs);

        assert!(prompt.starts_with("--- Example 1 ---"));
        assert!(prompt.contains("[[ ## thesis ## ]]\nHarmony of the soul."));
        let turn = prompt.find("--- Your turn ---").unwrap();
        assert!(prompt[turn..].contains("What is courage?"));
    }
}
