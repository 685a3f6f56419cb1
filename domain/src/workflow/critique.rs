//! Critique value object and score normalization.
//!
//! Every workflow's termination depends on the critic's score, and the score
//! comes from a loosely-typed text generator. [`parse_score`] turns whatever the
//! generator produced into a number in `[0.0, 1.0]` and never fails.
//!
//! | Raw value | Result |
//! |-----------|--------|
//! | `0.75` / `"0.75"` | `0.75` |
//! | `"3/4"` | `0.75` |
//! | `"not-a-number"`, `"1/0"`, `"1/2/3"` | `0.5` |
//! | `1.5` / `-0.2` | `1.0` / `0.0` |

use serde::{Deserialize, Serialize};

/// Neutral score used when the raw value cannot be interpreted.
pub const FALLBACK_SCORE: f64 = 0.5;

/// Score as returned by the generator, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawScore {
    /// Already numeric (e.g. a JSON number)
    Number(f64),
    /// Anything textual: "0.8", "4/5", "eight"
    Text(String),
}

impl From<f64> for RawScore {
    fn from(value: f64) -> Self {
        RawScore::Number(value)
    }
}

impl From<&str> for RawScore {
    fn from(value: &str) -> Self {
        RawScore::Text(value.to_string())
    }
}

impl From<String> for RawScore {
    fn from(value: String) -> Self {
        RawScore::Text(value)
    }
}

/// Normalize a raw critic score into `[0.0, 1.0]`.
///
/// Unparsable input (non-numeric text, malformed fractions, division by zero)
/// falls back to [`FALLBACK_SCORE`]. A NaN value, including the text `"NaN"`,
/// counts as unparsable. The result is always clamped.
pub fn parse_score(raw: impl Into<RawScore>) -> f64 {
    let value = match raw.into() {
        RawScore::Number(n) => Some(n),
        RawScore::Text(text) => parse_text_score(&text),
    };

    match value {
        Some(v) if !v.is_nan() => v.clamp(0.0, 1.0),
        _ => FALLBACK_SCORE,
    }
}

fn parse_text_score(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.contains('/') {
        let (num, den) = text.split_once('/')?;
        if den.contains('/') {
            return None;
        }
        let num: f64 = num.trim().parse().ok()?;
        let den: f64 = den.trim().parse().ok()?;
        if den == 0.0 {
            return None;
        }
        Some(num / den)
    } else {
        text.parse().ok()
    }
}

/// Critic feedback plus its normalized acceptance score (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Critique {
    /// Free-form feedback from the critic
    pub text: String,
    /// Normalized score, always within `[0.0, 1.0]`
    pub score: f64,
}

impl Critique {
    /// Create a critique, normalizing the raw score.
    pub fn new(text: impl Into<String>, raw_score: impl Into<RawScore>) -> Self {
        Self {
            text: text.into(),
            score: parse_score(raw_score),
        }
    }

    /// Whether this critique meets the given acceptance threshold.
    pub fn meets(&self, threshold: f64) -> bool {
        self.score >= threshold
    }
}

impl std::fmt::Display for Critique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (score: {:.2})", self.text, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_decimal_string() {
        assert_eq!(parse_score("0.75"), 0.75);
        assert_eq!(parse_score("  0.9\n"), 0.9);
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(parse_score("3/4"), 0.75);
        assert_eq!(parse_score("8 / 10"), 0.8);
    }

    #[test]
    fn test_parse_garbage_falls_back() {
        assert_eq!(parse_score("not-a-number"), 0.5);
        assert_eq!(parse_score(""), 0.5);
        assert_eq!(parse_score("NaN"), 0.5);
        assert_eq!(parse_score(f64::NAN), 0.5);
    }

    #[test]
    fn test_parse_malformed_fraction_falls_back() {
        assert_eq!(parse_score("1/0"), 0.5);
        assert_eq!(parse_score("1/2/3"), 0.5);
        assert_eq!(parse_score("a/4"), 0.5);
        assert_eq!(parse_score("/"), 0.5);
    }

    #[test]
    fn test_numeric_values_are_clamped() {
        assert_eq!(parse_score(1.5), 1.0);
        assert_eq!(parse_score(-0.2), 0.0);
        assert_eq!(parse_score(0.3), 0.3);
        assert_eq!(parse_score("7/5"), 1.0);
        assert_eq!(parse_score("inf"), 1.0);
    }

    #[test]
    fn test_critique_normalizes_on_construction() {
        let critique = Critique::new("Too one-sided", "9/10");
        assert_eq!(critique.score, 0.9);
        assert!(critique.meets(0.8));
        assert!(!critique.meets(0.95));

        let critique = Critique::new("Unclear", "eight");
        assert_eq!(critique.score, FALLBACK_SCORE);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(Critique::new("ok", 0.8).meets(0.8));
    }
}
