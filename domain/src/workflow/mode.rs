//! Workflow mode selection.
//!
//! [`Mode`] picks one of the three fixed reasoning topologies. Parsing an
//! unknown mode string is the only way dispatch can fail before any agent runs.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reasoning workflow run by the responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Thesis → antithesis → synthesis, refined by critique
    #[default]
    Binary,
    /// Alternating con/pro rounds, then a synthesis of the whole debate
    Debate,
    /// Independent domain opinions merged into a synthesis
    Experts,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Binary, Mode::Debate, Mode::Experts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Binary => "binary",
            Mode::Debate => "debate",
            Mode::Experts => "experts",
        }
    }

    /// Get a human-readable description of this mode
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Binary => "Binary: thesis, antithesis, synthesis with critique-driven refinement",
            Mode::Debate => "Debate: alternating con/pro rounds, closing synthesis",
            Mode::Experts => "Experts: domain opinions merged into a synthesis",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary" => Ok(Mode::Binary),
            "debate" => Ok(Mode::Debate),
            "experts" => Ok(Mode::Experts),
            _ => Err(DomainError::InvalidMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("binary".parse::<Mode>().ok(), Some(Mode::Binary));
        assert_eq!("debate".parse::<Mode>().ok(), Some(Mode::Debate));
        assert_eq!("experts".parse::<Mode>().ok(), Some(Mode::Experts));
    }

    #[test]
    fn test_from_str_is_exact() {
        for s in ["Debate", " experts ", "BINARY", ""] {
            assert_eq!(
                s.parse::<Mode>().unwrap_err(),
                DomainError::InvalidMode(s.to_string())
            );
        }
    }

    #[test]
    fn test_unknown_mode_is_invalid() {
        let err = "trinary".parse::<Mode>().unwrap_err();
        assert_eq!(err, DomainError::InvalidMode("trinary".to_string()));
    }

    #[test]
    fn test_display_roundtrip() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_default() {
        assert_eq!(Mode::default(), Mode::Binary);
    }
}
