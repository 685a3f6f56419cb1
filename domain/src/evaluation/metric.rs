//! Heuristic answer-quality metric.
//!
//! Scores text on six equally weighted factors and never returns less than
//! [`METRIC_FLOOR`]:
//!
//! | Factor | Scores 1.0 when |
//! |--------|-----------------|
//! | logical | mentions logical / reason / evidence / argument |
//! | truthful | mentions truth / fact / evidence / accurate |
//! | balanced | longer than 50 chars and mentions balance / combine / reconcile / both / perspectives |
//! | debate resolution | debate transcript has more than 2 entries and the text mentions resolved / conclusion / final |
//! | expert diversity | more than one expert opinion, all distinct |
//! | coherence | `min(1, chars / 200)` |

use crate::workflow::value_objects::ResponseRecord;
use std::collections::HashSet;

/// Lowest score the metric returns.
pub const METRIC_FLOOR: f64 = 0.1;

const LOGICAL_WORDS: &[&str] = &["logical", "reason", "evidence", "argument"];
const TRUTHFUL_WORDS: &[&str] = &["truth", "fact", "evidence", "accurate"];
const BALANCED_WORDS: &[&str] = &["balance", "combine", "reconcile", "both", "perspectives"];
const RESOLUTION_WORDS: &[&str] = &["resolved", "conclusion", "final"];

/// What the metric looks at besides the text itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricContext<'a> {
    /// Debate transcript length, when scoring a debate
    pub debate_entries: Option<usize>,
    /// Expert opinions, when scoring an expert consultation
    pub expert_opinions: Option<&'a [&'a str]>,
}

/// Score free text with no mode-specific context.
pub fn philosophical_metric(text: &str) -> f64 {
    score_with_context(text, MetricContext::default())
}

/// Score a response by its final synthesis plus mode-specific factors.
pub fn score_response(record: &ResponseRecord) -> f64 {
    match record {
        ResponseRecord::Binary(r) => philosophical_metric(&r.synthesis),
        ResponseRecord::Debate(r) => score_with_context(
            &r.synthesis,
            MetricContext {
                debate_entries: Some(r.debate_history.len()),
                ..Default::default()
            },
        ),
        ResponseRecord::Experts(r) => {
            let opinions: Vec<&str> = r.expert_opinions.values().map(String::as_str).collect();
            score_with_context(
                &r.synthesis,
                MetricContext {
                    expert_opinions: Some(opinions.as_slice()),
                    ..Default::default()
                },
            )
        }
    }
}

pub fn score_with_context(text: &str, context: MetricContext<'_>) -> f64 {
    let lower = text.to_lowercase();
    let len = text.chars().count();
    let mentions = |words: &[&str]| words.iter().any(|w| lower.contains(w));
    let flag = |b: bool| if b { 1.0 } else { 0.0 };

    let logical = flag(mentions(LOGICAL_WORDS));
    let truthful = flag(mentions(TRUTHFUL_WORDS));
    let balanced = flag(len > 50 && mentions(BALANCED_WORDS));
    let debate_resolution = flag(
        context.debate_entries.is_some_and(|n| n > 2) && mentions(RESOLUTION_WORDS),
    );
    let expert_diversity = flag(context.expert_opinions.is_some_and(|ops| {
        ops.len() > 1 && ops.iter().collect::<HashSet<_>>().len() == ops.len()
    }));
    let coherence = (len as f64 / 200.0).min(1.0);

    let factors = [
        logical,
        truthful,
        balanced,
        debate_resolution,
        expert_diversity,
        coherence,
    ];
    let raw = factors.iter().sum::<f64>() / factors.len() as f64;
    raw.max(METRIC_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::value_objects::{DebateEntry, DebateLabel, DebateResult, ExpertResult};
    use std::collections::HashMap;

    #[test]
    fn test_empty_text_hits_floor() {
        assert_eq!(philosophical_metric(""), METRIC_FLOOR);
    }

    #[test]
    fn test_text_factors() {
        // logical + truthful + balanced, 100 chars of coherence
        let text = format!("{:<100}", "Logical evidence from both perspectives");
        let score = philosophical_metric(&text);
        let expected = (1.0 + 1.0 + 1.0 + 0.0 + 0.0 + 0.5) / 6.0;
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_debate_resolution_needs_three_entries() {
        let synthesis = format!("{:<200}", "The final conclusion");
        let entry = |label, text: &str| DebateEntry::new(label, text);
        let short = ResponseRecord::Debate(DebateResult {
            debate_history: vec![entry(DebateLabel::Thesis, "t"), entry(DebateLabel::Con(1), "c")],
            synthesis: synthesis.clone(),
        });
        let long = ResponseRecord::Debate(DebateResult {
            debate_history: vec![
                entry(DebateLabel::Thesis, "t"),
                entry(DebateLabel::Con(1), "c"),
                entry(DebateLabel::Pro(1), "p"),
            ],
            synthesis,
        });
        assert!((score_response(&long) - score_response(&short) - 1.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_expert_diversity_requires_distinct_opinions() {
        let make = |a: &str, b: &str| {
            let mut ops = HashMap::new();
            ops.insert("science".to_string(), a.to_string());
            ops.insert("humor".to_string(), b.to_string());
            ResponseRecord::Experts(ExpertResult {
                domains: vec!["science".to_string(), "humor".to_string()],
                expert_opinions: ops,
                synthesis: "x".repeat(200),
            })
        };
        let diverse = score_response(&make("one", "two"));
        let same = score_response(&make("same", "same"));
        assert!((diverse - 2.0 / 6.0).abs() < 1e-9);
        assert!((same - 1.0 / 6.0).abs() < 1e-9);
    }
}
