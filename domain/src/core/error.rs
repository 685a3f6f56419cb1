//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown mode: {0} (expected one of: binary, debate, experts)")]
    InvalidMode(String),

    #[error("Unknown agent role: {0}")]
    InvalidRole(String),
}

impl DomainError {
    /// Check if this error came from mode dispatch
    pub fn is_invalid_mode(&self) -> bool {
        matches!(self, DomainError::InvalidMode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_mode_display() {
        let error = DomainError::InvalidMode("trinary".to_string());
        assert_eq!(
            error.to_string(),
            "Unknown mode: trinary (expected one of: binary, debate, experts)"
        );
    }

    #[test]
    fn test_is_invalid_mode_check() {
        assert!(DomainError::InvalidMode("x".to_string()).is_invalid_mode());
        assert!(!DomainError::InvalidRole("judge".to_string()).is_invalid_mode());
    }
}
