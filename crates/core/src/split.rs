//! Splitting a markdown document into slides.
//!
//! A slide delimiter is a line consisting solely of three or more hyphens.

use regex::Regex;
use std::sync::LazyLock;

/// A full line of three or more hyphens, nothing else.
static SLIDE_DELIMITER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^---+$").unwrap());

/// Split a markdown document into slides at delimiter lines.
///
/// Each segment is trimmed and segments that are empty after trimming are
/// dropped, so consecutive delimiters produce no phantom slides. A document
/// without any delimiter yields a single slide, unless it is blank, which
/// yields no slides at all. The delimiter lines themselves are discarded.
pub fn split_into_slides(markdown: &str) -> Vec<String> {
    SLIDE_DELIMITER_REGEX
        .split(markdown)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
