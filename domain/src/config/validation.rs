//! Configuration issues detected when validating loaded settings.
//!
//! Validation never fails outright; it returns every issue found with a
//! severity, and the caller decides whether errors abort the run.

use std::fmt;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssueCode {
    /// A model id is empty or whitespace.
    EmptyModelName { field: String },
    /// `[models.roles]` names a role that does not exist.
    UnknownRole { role: String },
    /// A threshold lies outside `[0.0, 1.0]`.
    ThresholdOutOfRange { field: String, value: f64 },
    /// `[respond] domains` is present but empty.
    EmptyDomains,
    /// A zero budget turns the named loop off entirely.
    ZeroBudget { field: String },
    /// `timeout_seconds` is 0.
    InvalidTimeout,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let err = ConfigIssue::error(
            ConfigIssueCode::UnknownRole {
                role: "judge".to_string(),
            },
            "unknown role 'judge'",
        );
        assert!(err.is_error());
        assert_eq!(err.to_string(), "error: unknown role 'judge'");

        let warn = ConfigIssue::warning(
            ConfigIssueCode::ZeroBudget {
                field: "respond.max_rounds".to_string(),
            },
            "max_rounds is 0",
        );
        assert!(!warn.is_error());
        assert_eq!(warn.severity, Severity::Warning);
    }
}
