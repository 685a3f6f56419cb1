//! Prompt domain
//!
//! Rendering agent signatures into prompts and parsing the structured
//! replies back into named fields.

pub mod parsing;
mod template;

pub use parsing::{parse_critic_reply, parse_output_fields};
pub use template::{COMPLETED_MARKER, PromptTemplate, section_marker};
