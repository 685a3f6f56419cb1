//! Reply parsing for structured agent output.
//!
//! Replies are expected to use `[[ ## field ## ]]` section headers, but
//! generators drift; every function here degrades to something usable
//! instead of failing.
//!
//! | Function | Use Case |
//! |----------|----------|
//! | [`parse_output_fields`] | Any agent reply with section headers |
//! | [`parse_critic_reply`] | Critic reply: sections, JSON, or a `Score:` line |

use crate::agent::field_values::FieldValues;
use crate::workflow::critique::RawScore;

/// Extract the requested sections from a reply.
///
/// A section runs from its header to the next header of any name. Unknown
/// and duplicate sections are ignored (first occurrence wins); missing
/// sections are simply absent from the result.
///
/// # Examples
///
/// ```
/// use dialectic_domain::prompt::parsing::parse_output_fields;
///
/// let reply = "[[ ## thesis ## ]]\nBecause of scattering.\n\n[[ ## completed ## ]]";
/// let fields = parse_output_fields(reply, &["thesis"]);
/// assert_eq!(fields.get("thesis"), Some("Because of scattering."));
/// ```
pub fn parse_output_fields(reply: &str, names: &[&str]) -> FieldValues {
    let sections = find_sections(reply);
    let mut values = FieldValues::new();

    for (i, (name, content_start, _)) in sections.iter().enumerate() {
        if !names.contains(name) || values.contains(name) {
            continue;
        }
        let end = sections
            .get(i + 1)
            .map(|(_, _, header_start)| *header_start)
            .unwrap_or(reply.len());
        values.set(*name, reply[*content_start..end].trim());
    }

    values
}

/// `(name, content_start, header_start)` for every well-formed header
fn find_sections(reply: &str) -> Vec<(&str, usize, usize)> {
    let mut sections = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = reply[cursor..].find("[[ ##") {
        let header_start = cursor + offset;
        let name_start = header_start + "[[ ##".len();
        let Some(close) = reply[name_start..].find("## ]]") else {
            break;
        };
        let name = reply[name_start..name_start + close].trim();
        let content_start = name_start + close + "## ]]".len();
        sections.push((name, content_start, header_start));
        cursor = content_start;
    }

    sections
}

/// Split a critic reply into critique text and an unnormalized score.
///
/// Tried in order:
/// 1. `critique` / `score` sections
/// 2. A JSON object with `critique` and `score` keys
/// 3. A line starting with `Score:` (the rest of the reply is the critique)
///
/// When no score is found the raw score is empty text, which normalizes to
/// the fallback score.
pub fn parse_critic_reply(reply: &str) -> (String, RawScore) {
    let sections = parse_output_fields(reply, &["critique", "score"]);
    if let Some(score) = sections.get("score") {
        let critique = sections.get("critique").unwrap_or_default().to_string();
        return (critique, RawScore::Text(score.to_string()));
    }

    if let Some(start) = reply.find('{')
        && let Some(end) = reply[start..].rfind('}')
        && let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&reply[start..start + end + 1])
        && let Some(score) = parsed.get("score")
    {
        let critique = parsed
            .get("critique")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let raw = match score {
            serde_json::Value::Number(n) => n.as_f64().map(RawScore::Number),
            serde_json::Value::String(s) => Some(RawScore::Text(s.clone())),
            _ => None,
        };
        return (critique, raw.unwrap_or_else(|| RawScore::Text(score.to_string())));
    }

    let mut score = None;
    let mut critique_lines = Vec::new();
    for line in reply.lines() {
        let trimmed = line.trim();
        if score.is_none()
            && let Some(prefix) = trimmed.get(..6)
            && prefix.eq_ignore_ascii_case("score:")
        {
            score = Some(trimmed[6..].trim().to_string());
            continue;
        }
        critique_lines.push(line);
    }

    let critique = sections
        .get("critique")
        .map(str::to_string)
        .unwrap_or_else(|| critique_lines.join("\n").trim().to_string());

    (critique, RawScore::Text(score.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::critique::parse_score;

    #[test]
    fn test_parse_output_fields_multiple_sections() {
        let reply = "preamble\n[[ ## critique ## ]]\nToo vague.\n\n[[ ## score ## ]]\n0.4\n\n[[ ## completed ## ]]\n";
        let fields = parse_output_fields(reply, &["critique", "score"]);
        assert_eq!(fields.get("critique"), Some("Too vague."));
        assert_eq!(fields.get("score"), Some("0.4"));
        assert!(!fields.contains("completed"));
    }

    #[test]
    fn test_parse_output_fields_first_occurrence_wins() {
        let reply = "[[ ## opinion ## ]]\nfirst\n[[ ## opinion ## ]]\nsecond";
        let fields = parse_output_fields(reply, &["opinion"]);
        assert_eq!(fields.get("opinion"), Some("first"));
    }

    #[test]
    fn test_parse_output_fields_without_markers() {
        let fields = parse_output_fields("just prose", &["thesis"]);
        assert!(fields.is_empty());
    }

    #[test]
    fn test_parse_output_fields_unclosed_header() {
        let fields = parse_output_fields("[[ ## thesis\nno close", &["thesis"]);
        assert!(fields.is_empty());
    }

    #[test]
    fn test_critic_sections() {
        let (critique, raw) =
            parse_critic_reply("[[ ## critique ## ]]\nSolid.\n[[ ## score ## ]]\n3/4\n[[ ## completed ## ]]");
        assert_eq!(critique, "Solid.");
        assert_eq!(parse_score(raw), 0.75);
    }

    #[test]
    fn test_critic_json() {
        let (critique, raw) =
            parse_critic_reply(r#"Here: {"critique": "Balanced.", "score": 0.9}"#);
        assert_eq!(critique, "Balanced.");
        assert_eq!(raw, RawScore::Number(0.9));
    }

    #[test]
    fn test_critic_score_line() {
        let (critique, raw) = parse_critic_reply("Misses the ethics angle.\nSCORE: 0.6");
        assert_eq!(critique, "Misses the ethics angle.");
        assert_eq!(parse_score(raw), 0.6);
    }

    #[test]
    fn test_critic_without_score_falls_back() {
        let (critique, raw) = parse_critic_reply("No idea how to rate this.");
        assert_eq!(critique, "No idea how to rate this.");
        assert_eq!(parse_score(raw), 0.5);
    }
}
