//! Mapping from dwellings scenario keys to economic scenario keys.
//!
//! Dwelling projections and GVA projections are published under different
//! scenario names. Rules are tried in order and the first match wins; a key
//! that no rule matches is its own economic key.

use serde::{Deserialize, Serialize};

/// One key mapping rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "match", rename_all = "snake_case")]
pub enum KeyRule {
    /// Matches a key equal to `key`.
    Exact { key: String, econ_key: String },
    /// Matches any key containing `pattern`.
    Contains { pattern: String, econ_key: String },
}

impl KeyRule {
    pub fn exact(key: impl Into<String>, econ_key: impl Into<String>) -> Self {
        Self::Exact {
            key: key.into(),
            econ_key: econ_key.into(),
        }
    }

    pub fn contains(pattern: impl Into<String>, econ_key: impl Into<String>) -> Self {
        Self::Contains {
            pattern: pattern.into(),
            econ_key: econ_key.into(),
        }
    }

    /// Returns the economic key when this rule matches `key`.
    pub fn apply(&self, key: &str) -> Option<&str> {
        match self {
            Self::Exact {
                key: expected,
                econ_key,
            } if key == expected.as_str() => Some(econ_key.as_str()),
            Self::Contains { pattern, econ_key } if key.contains(pattern.as_str()) => {
                Some(econ_key.as_str())
            }
            _ => None,
        }
    }
}

/// Ordered list of [`KeyRule`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioKeyMap {
    rules: Vec<KeyRule>,
}

impl Default for ScenarioKeyMap {
    /// Pairs the 23k dwellings scenarios with their economics scenarios.
    fn default() -> Self {
        Self::new(vec![
            KeyRule::contains("new-cities", "1-new-cities"),
            KeyRule::exact("4-expansion23", "2-expansion"),
        ])
    }
}

impl ScenarioKeyMap {
    pub fn new(rules: Vec<KeyRule>) -> Self {
        Self { rules }
    }

    /// A map where every key is its own economic key.
    pub fn identity() -> Self {
        Self::new(Vec::new())
    }

    pub fn rules(&self) -> &[KeyRule] {
        &self.rules
    }

    pub fn econ_key<'a>(&'a self, key: &'a str) -> &'a str {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(key))
            .unwrap_or(key)
    }
}
