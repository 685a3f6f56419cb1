//! Named text fields exchanged with agents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered `name -> text` pairs.
///
/// Insertion order is kept so prompts render fields in signature order.
/// Setting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues(Vec<(String, String)>);

/// Inputs handed to an agent invocation.
pub type AgentInputs = FieldValues;

/// Outputs parsed from an agent reply.
pub type AgentOutputs = FieldValues;

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of the named fields that are present, in the order given
    pub fn select<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> FieldValues {
        let mut selected = FieldValues::new();
        for name in names {
            if let Some(value) = self.get(name) {
                selected.set(name, value);
            }
        }
        selected
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FieldValues {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut values = FieldValues::new();
        for (n, v) in iter {
            values.set(n, v);
        }
        values
    }
}

impl fmt::Display for FieldValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}
