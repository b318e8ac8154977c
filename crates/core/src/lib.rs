//! Core slide model, validation, rendering, and export for markdown slide
//! decks.
//!
//! A deck is a single markdown document whose slides are separated by lines
//! of three or more hyphens. Everything here is a pure, synchronous function
//! over in-memory strings: splitting, structural parsing, rule validation,
//! HTML rendering, and export serialization. Identical input always yields
//! identical output, so callers can recompute on every keystroke without a
//! caching layer. The only fallible surface is rule-settings persistence.

pub mod components;
pub mod error;
pub mod export;
pub mod render;
pub mod rules;
pub mod settings;
pub mod split;
pub mod types;

pub use components::parse_slide_components;
pub use error::{Error, Result};
pub use export::{export_markdown, markdown_file_name, module_file_name, to_lesson_module};
pub use render::markdown_to_html;
pub use rules::{default_rules, validate_document, validate_slide};
pub use settings::{RuleSetting, RuleSettings};
pub use split::split_into_slides;
pub use types::{
    RuleType, SlideComponents, ValidationError, ValidationResult, ValidationRule,
};
