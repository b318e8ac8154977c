//! Persisted activation state for validation rules.
//!
//! Rules themselves are code; only the per-rule active flag is
//! configurable. Collaborators load settings at startup, apply them onto
//! [`crate::default_rules`], and pass the resulting slice into every
//! validation call. The engine never reads configuration on its own.

use crate::error::Result;
use crate::types::ValidationRule;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Activation flag for a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetting {
    /// Rule identifier, matching [`ValidationRule::id`].
    pub id: String,

    /// Whether the rule takes part in validation.
    pub active: bool,
}

/// Ordered set of per-rule activation flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSettings {
    /// One entry per known rule.
    pub rules: Vec<RuleSetting>,
}

impl RuleSettings {
    /// Capture the activation state of an existing rule set.
    pub fn from_rules(rules: &[ValidationRule]) -> Self {
        Self {
            rules: rules
                .iter()
                .map(|rule| RuleSetting {
                    id: rule.id.clone(),
                    active: rule.active,
                })
                .collect(),
        }
    }

    /// Apply saved flags onto a rule set.
    ///
    /// Entries with no matching rule are ignored; rules with no saved entry
    /// keep their current state.
    pub fn apply(&self, rules: &mut [ValidationRule]) {
        for setting in &self.rules {
            if let Some(rule) = rules.iter_mut().find(|rule| rule.id == setting.id) {
                rule.active = setting.active;
            }
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::debug!(
            "loaded {} rule settings from {}",
            settings.rules.len(),
            path.display()
        );
        Ok(settings)
    }

    /// Write settings to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        log::debug!("saved {} rule settings to {}", self.rules.len(), path.display());
        Ok(())
    }
}
