//! Structural parsing of a single slide into semantic components.
//!
//! Each category is extracted by an independent pass over the slide text, so
//! a line can contribute to more than one category (an indented list
//! continuation line also counts as a paragraph line). This is a structural
//! extraction, not an AST.

use crate::types::SlideComponents;
use regex::Regex;
use std::sync::LazyLock;

/// Level-1 heading line; the capture is the heading text.
static TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());

/// Level 2-6 heading lines, matched including the marker.
static SUBHEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{2,6} (.+)$").unwrap());

/// Bullet marker prefix, optionally indented.
static BULLET_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*+]").unwrap());

/// Numbered-list marker prefix, optionally indented.
static NUMBERED_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.").unwrap());

/// A list line proper: a marker followed by at least one more character.
static LIST_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-*+]|\d+\.)[^\n]+").unwrap());

/// Indented continuation of a preceding list line.
static LIST_CONTINUATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+[^\n]+").unwrap());

/// A complete fenced code block, fences included.
static CODE_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());

/// Parse one slide's text into its structural components.
///
/// Absent categories yield empty lists; any string input is valid.
pub fn parse_slide_components(slide_text: &str) -> SlideComponents {
    let mut components = SlideComponents::default();

    components.title = slide_title(slide_text).unwrap_or_default();

    for heading in SUBHEADING_REGEX.find_iter(slide_text) {
        components.headings.push(heading.as_str().trim().to_string());
    }

    for line in paragraph_lines(slide_text) {
        components.paragraphs.push(line.trim().to_string());
    }

    components.lists = list_blocks(slide_text);

    for block in CODE_BLOCK_REGEX.find_iter(slide_text) {
        components.code_blocks.push(block.as_str().trim().to_string());
    }

    components
}

/// Text of the first level-1 heading, if the slide has one.
///
/// Only the first match counts even when several level-1 headings exist.
/// Shared with the export serializer for per-slide titles.
pub(crate) fn slide_title(slide_text: &str) -> Option<String> {
    TITLE_REGEX
        .captures(slide_text)
        .map(|caps| caps[1].trim().to_string())
}

/// Raw paragraph lines: non-empty lines that carry no heading, code-fence,
/// quote, or list marker prefix. Shared with the paragraph-length rule,
/// which measures the untrimmed line.
pub(crate) fn paragraph_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|line| is_paragraph_line(line))
}

fn is_paragraph_line(line: &str) -> bool {
    !line.is_empty()
        && !line.starts_with('#')
        && !line.starts_with("```")
        && !line.starts_with('>')
        && !BULLET_PREFIX_REGEX.is_match(line)
        && !NUMBERED_PREFIX_REGEX.is_match(line)
}

/// Group contiguous list lines (and their indented continuations) into
/// blocks, one entry per run.
fn list_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut run: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if LIST_ITEM_REGEX.is_match(line) {
            run.push(line);
        } else if !run.is_empty() && LIST_CONTINUATION_REGEX.is_match(line) {
            run.push(line);
        } else if !run.is_empty() {
            blocks.push(run.join("\n").trim().to_string());
            run.clear();
        }
    }

    if !run.is_empty() {
        blocks.push(run.join("\n").trim().to_string());
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_extraction() {
        let components = parse_slide_components("# My Title\n\nBody text");
        assert_eq!(components.title, "My Title");
    }

    #[test]
    fn test_title_only_first_level_one_heading() {
        let components = parse_slide_components("# First\n\n# Second");
        assert_eq!(components.title, "First");
    }

    #[test]
    fn test_title_absent_yields_empty_string() {
        let components = parse_slide_components("## Only A Subheading");
        assert_eq!(components.title, "");
    }

    #[test]
    fn test_title_is_trimmed() {
        let components = parse_slide_components("# Spaced Out   ");
        assert_eq!(components.title, "Spaced Out");
    }

    #[test]
    fn test_headings_include_marker_and_keep_order() {
        let components =
            parse_slide_components("## First\ntext\n### Second\n###### Sixth");
        assert_eq!(components.headings, vec!["## First", "### Second", "###### Sixth"]);
    }

    #[test]
    fn test_level_one_heading_is_not_a_subheading() {
        let components = parse_slide_components("# Title\n## Sub");
        assert_eq!(components.headings, vec!["## Sub"]);
    }

    #[test]
    fn test_seven_hashes_is_not_a_heading() {
        let components = parse_slide_components("####### Too Deep");
        assert!(components.headings.is_empty());
        // The hash prefix still keeps it out of the paragraph pass.
        assert!(components.paragraphs.is_empty());
    }

    #[test]
    fn test_paragraphs_exclude_marked_lines() {
        let slide = "# Title\nplain text\n> quote\n- bullet\n1. numbered\n```\ncode\n```\nmore text";
        let components = parse_slide_components(slide);
        // "code" sits between fences but carries no marker prefix, so the
        // independent paragraph pass picks it up too.
        assert_eq!(components.paragraphs, vec!["plain text", "code", "more text"]);
    }

    #[test]
    fn test_paragraph_lines_are_not_merged() {
        let components = parse_slide_components("line one\nline two");
        assert_eq!(components.paragraphs, vec!["line one", "line two"]);
    }

    #[test]
    fn test_lists_group_contiguous_runs() {
        let slide = "- one\n- two\n\ntext between\n\n1. first\n2. second";
        let components = parse_slide_components(slide);
        assert_eq!(components.lists, vec!["- one\n- two", "1. first\n2. second"]);
    }

    #[test]
    fn test_list_continuation_lines_join_their_run() {
        let slide = "- item\n  wrapped continuation\n- next";
        let components = parse_slide_components(slide);
        assert_eq!(
            components.lists,
            vec!["- item\n  wrapped continuation\n- next"]
        );
    }

    #[test]
    fn test_indented_bullets_are_list_lines() {
        let components = parse_slide_components("  - indented\n* star\n+ plus");
        assert_eq!(components.lists, vec!["- indented\n* star\n+ plus"]);
        assert!(components.paragraphs.is_empty());
    }

    #[test]
    fn test_bare_marker_without_content_is_not_a_list_line() {
        let components = parse_slide_components("-\ntext");
        assert!(components.lists.is_empty());
    }

    #[test]
    fn test_continuation_line_is_also_a_paragraph() {
        // Extraction passes are independent; the indented continuation line
        // shows up in both categories.
        let components = parse_slide_components("- item\n  continuation");
        assert_eq!(components.lists, vec!["- item\n  continuation"]);
        assert_eq!(components.paragraphs, vec!["continuation"]);
    }

    #[test]
    fn test_code_blocks_include_fences() {
        let slide = "```\nlet x = 1;\n```\ntext\n```\nlet y = 2;\n```";
        let components = parse_slide_components(slide);
        assert_eq!(
            components.code_blocks,
            vec!["```\nlet x = 1;\n```", "```\nlet y = 2;\n```"]
        );
    }

    #[test]
    fn test_unterminated_fence_is_not_matched() {
        let components = parse_slide_components("```\nno closing fence");
        assert!(components.code_blocks.is_empty());
    }

    #[test]
    fn test_empty_slide_yields_empty_components() {
        assert_eq!(parse_slide_components(""), SlideComponents::default());
    }
}
