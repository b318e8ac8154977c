//! WASM bindings for the markdown slide deck core.
//!
//! This crate exposes slide splitting, structure parsing, validation,
//! rendering, and export to JavaScript for the browser editor. Structured
//! values cross the boundary via serde; the editor persists rule settings
//! itself and passes them back in on every validation call.

use serde::Serialize;
use slidemark_core::{
    default_rules, markdown_to_html, parse_slide_components, split_into_slides,
    to_lesson_module, validate_document, RuleSettings, ValidationResult,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validation outcome for a whole document.
#[derive(Debug, Serialize)]
pub struct ValidationSummary {
    /// Number of slides in the document.
    pub slide_count: usize,

    /// Number of slides with at least one failing rule.
    pub failing_slides: usize,

    /// Per-slide results, index-aligned with the split output.
    pub results: Vec<ValidationResult>,
}

/// Split a markdown document into slides.
///
/// Returns a JavaScript array of slide strings.
#[wasm_bindgen]
pub fn split_slides(markdown: &str) -> Result<JsValue, JsValue> {
    let slides = split_into_slides(markdown);
    serde_wasm_bindgen::to_value(&slides).map_err(to_js_error)
}

/// Parse one slide into its structural components.
#[wasm_bindgen]
pub fn slide_components(slide_text: &str) -> Result<JsValue, JsValue> {
    let components = parse_slide_components(slide_text);
    serde_wasm_bindgen::to_value(&components).map_err(to_js_error)
}

/// Render one slide's markdown to an HTML fragment.
///
/// The fragment is not sanitized; the editor decides how to present it.
#[wasm_bindgen]
pub fn render_slide(markdown: &str) -> String {
    markdown_to_html(markdown)
}

/// Default rule settings, for seeding the editor's configuration store.
#[wasm_bindgen]
pub fn default_rule_settings() -> Result<JsValue, JsValue> {
    let settings = RuleSettings::from_rules(&default_rules());
    serde_wasm_bindgen::to_value(&settings).map_err(to_js_error)
}

/// Validate a whole document against the default rules with the given
/// settings applied.
///
/// # Arguments
/// * `markdown` - The full document text
/// * `settings` - A rule-settings object, or undefined/null for defaults
#[wasm_bindgen]
pub fn validate_markdown(markdown: &str, settings: JsValue) -> Result<JsValue, JsValue> {
    let settings: Option<RuleSettings> = if settings.is_undefined() || settings.is_null() {
        None
    } else {
        Some(
            serde_wasm_bindgen::from_value(settings)
                .map_err(|e| JsValue::from_str(&format!("Invalid rule settings: {}", e)))?,
        )
    };

    let summary = validate_markdown_impl(markdown, settings);
    serde_wasm_bindgen::to_value(&summary).map_err(to_js_error)
}

fn validate_markdown_impl(markdown: &str, settings: Option<RuleSettings>) -> ValidationSummary {
    let mut rules = default_rules();
    if let Some(settings) = &settings {
        settings.apply(&mut rules);
    }

    let slides = split_into_slides(markdown);
    let results = validate_document(&slides, &rules);
    let failing_slides = results.iter().filter(|result| !result.valid).count();

    ValidationSummary {
        slide_count: slides.len(),
        failing_slides,
        results,
    }
}

/// Generate the TypeScript lesson module for a document.
#[wasm_bindgen]
pub fn convert_to_module(markdown: &str, file_name: &str) -> String {
    to_lesson_module(markdown, file_name)
}

/// Markdown passthrough export.
#[wasm_bindgen]
pub fn export_markdown(markdown: &str) -> String {
    slidemark_core::export_markdown(markdown)
}

fn to_js_error(e: serde_wasm_bindgen::Error) -> JsValue {
    JsValue::from_str(&format!("Serialization error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidemark_core::RuleSetting;

    #[test]
    fn test_validate_with_default_rules() {
        let summary = validate_markdown_impl("# Title\n\nSome text", None);
        assert_eq!(summary.slide_count, 1);
        assert_eq!(summary.failing_slides, 0);
        assert!(summary.results[0].valid);
    }

    #[test]
    fn test_validate_counts_failing_slides() {
        let summary = validate_markdown_impl("# Good Slide\n---\nno heading", None);
        assert_eq!(summary.slide_count, 2);
        assert_eq!(summary.failing_slides, 1);
    }

    #[test]
    fn test_validate_applies_settings() {
        let settings = RuleSettings {
            rules: vec![RuleSetting {
                id: "slide-structure".to_string(),
                active: false,
            }],
        };
        let summary = validate_markdown_impl("no heading at all", Some(settings));
        assert_eq!(summary.failing_slides, 0);
    }
}
