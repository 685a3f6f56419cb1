//! Agent roles.

use crate::agent::signature::AgentSignature;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The semantic transformation an agent performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    Thesis,
    Antithesis,
    Synthesis,
    Critic,
    ProDebate,
    ConDebate,
    Expert,
}

impl AgentRole {
    pub const ALL: [AgentRole; 7] = [
        AgentRole::Thesis,
        AgentRole::Antithesis,
        AgentRole::Synthesis,
        AgentRole::Critic,
        AgentRole::ProDebate,
        AgentRole::ConDebate,
        AgentRole::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::Thesis => "thesis",
            AgentRole::Antithesis => "antithesis",
            AgentRole::Synthesis => "synthesis",
            AgentRole::Critic => "critic",
            AgentRole::ProDebate => "pro_debate",
            AgentRole::ConDebate => "con_debate",
            AgentRole::Expert => "expert",
        }
    }

    /// Input/output contract for this role
    pub fn signature(&self) -> &'static AgentSignature {
        AgentSignature::for_role(*self)
    }

    /// The output field that carries this role's main text
    pub fn primary_output(&self) -> &'static str {
        self.signature().outputs[0].name
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AgentRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "thesis" => Ok(AgentRole::Thesis),
            "antithesis" => Ok(AgentRole::Antithesis),
            "synthesis" => Ok(AgentRole::Synthesis),
            "critic" => Ok(AgentRole::Critic),
            "pro_debate" | "pro" => Ok(AgentRole::ProDebate),
            "con_debate" | "con" => Ok(AgentRole::ConDebate),
            "expert" => Ok(AgentRole::Expert),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for role in AgentRole::ALL {
            assert_eq!(role.as_str().parse::<AgentRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("pro".parse::<AgentRole>().unwrap(), AgentRole::ProDebate);
        assert_eq!("con-debate".parse::<AgentRole>().unwrap(), AgentRole::ConDebate);
        assert!("judge".parse::<AgentRole>().is_err());
    }

    #[test]
    fn test_primary_output() {
        assert_eq!(AgentRole::Thesis.primary_output(), "thesis");
        assert_eq!(AgentRole::Critic.primary_output(), "critique");
        assert_eq!(AgentRole::ProDebate.primary_output(), "pro_argument");
        assert_eq!(AgentRole::Expert.primary_output(), "opinion");
    }
}
