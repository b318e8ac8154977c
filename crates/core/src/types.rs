//! Domain types for the markdown slide model.

use serde::{Deserialize, Serialize};

/// Structural breakdown of a single slide.
///
/// Derived fresh on every parse; the extraction passes are independent, so a
/// line may contribute to more than one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideComponents {
    /// Text of the first level-1 heading, empty if the slide has none.
    pub title: String,

    /// Level 2-6 heading lines in slide order, marker included.
    pub headings: Vec<String>,

    /// Lines not recognized as heading, code fence, quote, or list marker.
    pub paragraphs: Vec<String>,

    /// Contiguous list blocks (marker lines plus indented continuations).
    pub lists: Vec<String>,

    /// Complete fenced code blocks, fences included.
    pub code_blocks: Vec<String>,
}

/// Broad category of a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    /// Limits on text length.
    Length,
    /// Formatting conventions.
    Format,
    /// Required structural elements.
    Structure,
}

/// A named validation rule: a pure predicate over slide text plus metadata.
///
/// Rules are toggled active/inactive by collaborators but never edited;
/// persistence goes through [`crate::RuleSettings`], which carries only the
/// activation flags. The validator itself is code and is skipped during
/// serialization.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationRule {
    /// Unique rule identifier, e.g. "slide-length".
    pub id: String,

    /// Display name.
    pub name: String,

    /// Rule category.
    #[serde(rename = "type")]
    pub rule_type: RuleType,

    /// Human-readable description, also used as the failure message.
    pub description: String,

    /// Pure predicate: returns true when the slide text passes the rule.
    #[serde(skip)]
    pub validator: fn(&str) -> bool,

    /// Style tag attached to failures of this rule.
    pub error_class: String,

    /// Inactive rules are skipped during evaluation.
    pub active: bool,
}

impl ValidationRule {
    /// Create an active rule.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rule_type: RuleType,
        description: impl Into<String>,
        validator: fn(&str) -> bool,
        error_class: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rule_type,
            description: description.into(),
            validator,
            error_class: error_class.into(),
            active: true,
        }
    }
}

/// Pass/fail outcome of validating one slide.
///
/// A value object recomputed on every validation call; `valid` is false
/// exactly when `errors` is non-empty.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// True when every active rule passed.
    pub valid: bool,

    /// One entry per failing rule, in rule order.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// A passing result with no errors.
    pub fn passing() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// Record a rule failure.
    pub fn record_failure(&mut self, error: ValidationError) {
        self.valid = false;
        self.errors.push(error);
    }
}

/// A single rule failure on a slide.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    /// 0-based index of the slide within the split document.
    pub slide_index: usize,

    /// The rule that failed; owned copy so results outlive the rule slice.
    pub rule: ValidationRule,

    /// Failure message shown to the user.
    pub message: String,
}
