//! Workflow value objects - immutable result records per mode.
//!
//! - [`DialecticResult`] - binary mode: final triple plus critique history
//! - [`DebateResult`] - debate mode: labeled transcript plus closing synthesis
//! - [`ExpertResult`] - experts mode: one opinion per domain plus synthesis
//! - [`ResponseRecord`] - tagged union returned by mode dispatch

use super::critique::Critique;
use super::mode::Mode;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Result of the binary dialectic workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialecticResult {
    pub thesis: String,
    /// Last antithesis produced (after any refinement)
    pub antithesis: String,
    /// Last synthesis produced (after any refinement)
    pub synthesis: String,
    /// Critiques in the order they were produced
    pub critiques: Vec<Critique>,
}

impl DialecticResult {
    /// The critique that ended the loop, if any critique ran
    pub fn final_critique(&self) -> Option<&Critique> {
        self.critiques.last()
    }

    /// Whether the final synthesis was accepted at `threshold`
    pub fn accepted(&self, threshold: f64) -> bool {
        self.final_critique().is_some_and(|c| c.meets(threshold))
    }
}

/// Label of a debate transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebateLabel {
    Thesis,
    /// Con argument of the given round (1-based)
    Con(usize),
    /// Pro rebuttal of the given round (1-based)
    Pro(usize),
}

impl DebateLabel {
    /// Round number, or `None` for the opening thesis
    pub fn round(&self) -> Option<usize> {
        match self {
            DebateLabel::Thesis => None,
            DebateLabel::Con(r) | DebateLabel::Pro(r) => Some(*r),
        }
    }
}

impl fmt::Display for DebateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebateLabel::Thesis => write!(f, "Thesis"),
            DebateLabel::Con(r) => write!(f, "Con {}", r),
            DebateLabel::Pro(r) => write!(f, "Pro {}", r),
        }
    }
}

impl std::str::FromStr for DebateLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Thesis" {
            return Ok(DebateLabel::Thesis);
        }
        let parse_round = |r: &str| {
            r.trim()
                .parse::<usize>()
                .map_err(|_| format!("Invalid debate label: {}", s))
        };
        if let Some(r) = s.strip_prefix("Con ") {
            Ok(DebateLabel::Con(parse_round(r)?))
        } else if let Some(r) = s.strip_prefix("Pro ") {
            Ok(DebateLabel::Pro(parse_round(r)?))
        } else {
            Err(format!("Invalid debate label: {}", s))
        }
    }
}

impl Serialize for DebateLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DebateLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One labeled position in the debate transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateEntry {
    pub label: DebateLabel,
    pub text: String,
}

impl DebateEntry {
    pub fn new(label: DebateLabel, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }

    /// Newline-joined `"{label}: {text}"` lines, as fed back to the agents
    pub fn join(entries: &[DebateEntry]) -> String {
        entries
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for DebateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.text)
    }
}

/// Result of the debate workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateResult {
    /// Append-only transcript: thesis first, then con/pro per round
    pub debate_history: Vec<DebateEntry>,
    pub synthesis: String,
}

impl DebateResult {
    /// The transcript as display lines ("Thesis: ...", "Con 1: ...")
    pub fn history_lines(&self) -> Vec<String> {
        self.debate_history.iter().map(|e| e.to_string()).collect()
    }

    /// Number of rounds in which a con argument was produced
    pub fn rounds(&self) -> usize {
        self.debate_history
            .iter()
            .filter(|e| matches!(e.label, DebateLabel::Con(_)))
            .count()
    }
}

/// Result of the expert consultation workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertResult {
    /// Consulted domains in request order (duplicates removed)
    pub domains: Vec<String>,
    /// Latest opinion per domain; keys equal `domains`
    pub expert_opinions: HashMap<String, String>,
    pub synthesis: String,
}

impl ExpertResult {
    /// `(domain, opinion)` pairs in request order
    pub fn opinions_in_order(&self) -> impl Iterator<Item = (&str, &str)> {
        self.domains.iter().filter_map(|d| {
            self.expert_opinions
                .get(d)
                .map(|op| (d.as_str(), op.as_str()))
        })
    }
}

/// Newline-joined `"{domain}: {opinion}"` lines in domain order.
pub fn combine_opinions(domains: &[String], opinions: &HashMap<String, String>) -> String {
    domains
        .iter()
        .filter_map(|d| opinions.get(d).map(|op| format!("{}: {}", d, op)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result of a dispatched `respond` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ResponseRecord {
    Binary(DialecticResult),
    Debate(DebateResult),
    Experts(ExpertResult),
}

impl ResponseRecord {
    pub fn mode(&self) -> Mode {
        match self {
            ResponseRecord::Binary(_) => Mode::Binary,
            ResponseRecord::Debate(_) => Mode::Debate,
            ResponseRecord::Experts(_) => Mode::Experts,
        }
    }

    /// The final synthesis of whichever mode ran
    pub fn synthesis(&self) -> &str {
        match self {
            ResponseRecord::Binary(r) => &r.synthesis,
            ResponseRecord::Debate(r) => &r.synthesis,
            ResponseRecord::Experts(r) => &r.synthesis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debate_label_display_and_parse() {
        assert_eq!(DebateLabel::Thesis.to_string(), "Thesis");
        assert_eq!(DebateLabel::Con(2).to_string(), "Con 2");
        assert_eq!("Pro 3".parse::<DebateLabel>().unwrap(), DebateLabel::Pro(3));
        assert!("Rebuttal 1".parse::<DebateLabel>().is_err());
        assert!("Con x".parse::<DebateLabel>().is_err());
    }

    #[test]
    fn test_debate_entry_join() {
        let entries = vec![
            DebateEntry::new(DebateLabel::Thesis, "AI helps"),
            DebateEntry::new(DebateLabel::Con(1), "Jobs are lost"),
        ];
        assert_eq!(
            DebateEntry::join(&entries),
            "Thesis: AI helps\nCon 1: Jobs are lost"
        );
    }

    #[test]
    fn test_debate_result_rounds() {
        let result = DebateResult {
            debate_history: vec![
                DebateEntry::new(DebateLabel::Thesis, "t"),
                DebateEntry::new(DebateLabel::Con(1), "c1"),
                DebateEntry::new(DebateLabel::Pro(1), "p1"),
                DebateEntry::new(DebateLabel::Con(2), "c2"),
            ],
            synthesis: "s".to_string(),
        };
        assert_eq!(result.rounds(), 2);
        assert_eq!(result.history_lines()[3], "Con 2: c2");
    }

    #[test]
    fn test_combine_opinions_follows_domain_order() {
        let domains = vec!["science".to_string(), "humor".to_string()];
        let mut opinions = HashMap::new();
        opinions.insert("humor".to_string(), "It's a pun".to_string());
        opinions.insert("science".to_string(), "Rayleigh scattering".to_string());
        assert_eq!(
            combine_opinions(&domains, &opinions),
            "science: Rayleigh scattering\nhumor: It's a pun"
        );
    }

    #[test]
    fn test_response_record_json_is_tagged_by_mode() {
        let record = ResponseRecord::Debate(DebateResult {
            debate_history: vec![DebateEntry::new(DebateLabel::Thesis, "t")],
            synthesis: "s".to_string(),
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["mode"], "debate");
        assert_eq!(json["debate_history"][0]["label"], "Thesis");
        assert_eq!(record.mode(), Mode::Debate);
        assert_eq!(record.synthesis(), "s");
    }

    #[test]
    fn test_dialectic_result_accepted() {
        let result = DialecticResult {
            thesis: "t".to_string(),
            antithesis: "a".to_string(),
            synthesis: "s".to_string(),
            critiques: vec![Critique::new("weak", 0.4), Critique::new("good", 0.85)],
        };
        assert!(result.accepted(0.8));
        assert_eq!(result.final_critique().unwrap().text, "good");
    }
}
