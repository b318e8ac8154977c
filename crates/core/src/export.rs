//! Export serializers: markdown passthrough and the generated TypeScript
//! lesson module.
//!
//! The lesson module is the hand-off format for the lesson player: a
//! TypeScript data module listing every slide with a derived title and its
//! raw markdown embedded in a template literal.

use crate::components::slide_title;
use crate::split::split_into_slides;
use regex::Regex;
use std::sync::LazyLock;

/// Markdown file extension, at the end of the name only.
static MARKDOWN_EXT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(md|markdown)$").unwrap());

/// Word separators in a file name: hyphen, underscore, or whitespace.
static SEPARATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_\s]").unwrap());

/// Markdown export is the identity: slide delimiters are already part of
/// the document, so no re-splitting or re-joining happens.
pub fn export_markdown(markdown: &str) -> String {
    markdown.to_string()
}

/// Generate a TypeScript lesson module for a document.
///
/// The deck title comes from the file name; each slide entry carries a
/// 1-based string id, the slide's first level-1 heading (or "Slide N" when
/// absent), and the raw slide text with backticks escaped for the template
/// literal. Always succeeds; an empty document yields an empty slides
/// array.
///
/// # Example output
/// ```text
/// // Generated from my-lesson.md
///
/// export const lesson = {
///   title: "My Lesson",
///   description: "Auto-generated from Markdown content",
///   slides: [
///     {
///       id: "1",
///       title: "Hello",
///       content: `# Hello
///
/// body`,
///     },
///   ],
/// };
///
/// export default lesson;
/// ```
pub fn to_lesson_module(markdown: &str, file_name: &str) -> String {
    let slides = split_into_slides(markdown);
    let deck_title = title_from_file_name(file_name);

    let mut module = format!("// Generated from {file_name}\n\n");
    module.push_str("export const lesson = {\n");
    module.push_str(&format!("  title: \"{}\",\n", deck_title.replace('"', "\\\"")));
    module.push_str("  description: \"Auto-generated from Markdown content\",\n");
    module.push_str("  slides: [\n");

    for (index, slide) in slides.iter().enumerate() {
        let title =
            slide_title(slide).unwrap_or_else(|| format!("Slide {}", index + 1));

        module.push_str("    {\n");
        module.push_str(&format!("      id: \"{}\",\n", index + 1));
        module.push_str(&format!("      title: \"{}\",\n", title.replace('"', "\\\"")));
        module.push_str(&format!("      content: `{}`,\n", slide.replace('`', "\\`")));
        module.push_str("    },\n");
    }

    module.push_str("  ],\n");
    module.push_str("};\n");
    module.push_str("\nexport default lesson;\n");

    module
}

/// File name for a markdown export: the name itself, with `.md` appended
/// unless already present.
pub fn markdown_file_name(file_name: &str) -> String {
    if file_name.ends_with(".md") {
        file_name.to_string()
    } else {
        format!("{file_name}.md")
    }
}

/// File name for a lesson module export: markdown extension swapped for
/// `.ts`.
pub fn module_file_name(file_name: &str) -> String {
    format!("{}.ts", MARKDOWN_EXT_REGEX.replace(file_name, ""))
}

/// Derive a display title from a file name: extension stripped, separator
/// tokens title-cased and joined with single spaces. Empty tokens survive,
/// so doubled separators produce doubled spaces.
fn title_from_file_name(file_name: &str) -> String {
    let stem = MARKDOWN_EXT_REGEX.replace(file_name, "");

    SEPARATOR_REGEX
        .split(&stem)
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_markdown_is_identity() {
        let document = "# A\n---\n# B\n";
        assert_eq!(export_markdown(document), document);
    }

    #[test]
    fn test_lesson_module_basic() {
        let module = to_lesson_module("# Hello\n\nbody", "my-lesson.md");
        assert!(module.starts_with("// Generated from my-lesson.md\n\n"));
        assert!(module.contains("  title: \"My Lesson\",\n"));
        assert!(module.contains("      id: \"1\",\n"));
        assert!(module.contains("      title: \"Hello\",\n"));
        assert!(module.contains("      content: `# Hello\n\nbody`,\n"));
        assert!(module.ends_with("export default lesson;\n"));
    }

    #[test]
    fn test_lesson_module_slide_ids_are_one_based() {
        let module = to_lesson_module("# A\n---\n# B\n---\n# C", "deck.md");
        assert!(module.contains("id: \"1\""));
        assert!(module.contains("id: \"2\""));
        assert!(module.contains("id: \"3\""));
    }

    #[test]
    fn test_lesson_module_title_falls_back_to_slide_number() {
        let module = to_lesson_module("no heading here\n---\n# Named", "deck.md");
        assert!(module.contains("title: \"Slide 1\""));
        assert!(module.contains("title: \"Named\""));
    }

    #[test]
    fn test_lesson_module_escapes_backticks_in_content() {
        let module = to_lesson_module("# Code\n\nuse `foo()`", "deck.md");
        assert!(module.contains("content: `# Code\n\nuse \\`foo()\\``"));
    }

    #[test]
    fn test_lesson_module_escapes_quotes_in_titles() {
        let module = to_lesson_module("# Say \"Hi\"", "deck.md");
        assert!(module.contains("title: \"Say \\\"Hi\\\"\""));
    }

    #[test]
    fn test_lesson_module_empty_document_has_no_slides() {
        let module = to_lesson_module("", "empty.md");
        assert!(module.contains("  slides: [\n  ],\n"));
    }

    #[test]
    fn test_title_from_file_name_separators() {
        assert_eq!(title_from_file_name("my-lesson.md"), "My Lesson");
        assert_eq!(title_from_file_name("intro_to_rust.markdown"), "Intro To Rust");
        assert_eq!(title_from_file_name("plain lesson"), "Plain Lesson");
    }

    #[test]
    fn test_title_from_file_name_keeps_inner_casing() {
        assert_eq!(title_from_file_name("advancedTopics.md"), "AdvancedTopics");
    }

    #[test]
    fn test_title_from_file_name_doubled_separator() {
        // Empty tokens survive the join.
        assert_eq!(title_from_file_name("a--b.md"), "A  B");
    }

    #[test]
    fn test_markdown_file_name() {
        assert_eq!(markdown_file_name("lesson"), "lesson.md");
        assert_eq!(markdown_file_name("lesson.md"), "lesson.md");
    }

    #[test]
    fn test_module_file_name() {
        assert_eq!(module_file_name("my-lesson.md"), "my-lesson.ts");
        assert_eq!(module_file_name("notes.markdown"), "notes.ts");
        assert_eq!(module_file_name("bare"), "bare.ts");
    }
}
