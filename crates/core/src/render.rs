//! Markdown to HTML-fragment rendering for slide preview.
//!
//! A sequential text-substitution pipeline, not a tree parse. The pass order
//! is fixed and observable: heading lines first, then paragraph wrapping of
//! every remaining bare line, then inline emphasis, list items, fenced code,
//! inline code, and blockquotes. Because paragraph wrapping runs early, list
//! markers, quote markers, and code fences reach the later passes already
//! wrapped in paragraph tags; nested or malformed markdown yields
//! best-effort, possibly malformed HTML. Raw HTML in the source is passed
//! through unescaped; sanitization is the caller's concern.

use regex::Regex;
use std::sync::LazyLock;

static H1_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());
static H2_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.+)$").unwrap());
static H3_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.+)$").unwrap());

static BOLD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());

/// One bullet line, optionally indented; wrapped as a single-item list.
static BULLET_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(\s*)?- (.+)$").unwrap());

/// One numbered line, optionally indented; wrapped as a single-item list.
static NUMBERED_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(\s*)?(\d+)\. (.+)$").unwrap());

static FENCED_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.+?)```").unwrap());
static INLINE_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.+?)`").unwrap());

static BLOCKQUOTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^> (.+)$").unwrap());

/// Convert a slide's markdown to an HTML fragment.
///
/// Each list line gets its own `<ul>`/`<ol>` container; consecutive items
/// are never merged into a shared container.
pub fn markdown_to_html(markdown: &str) -> String {
    let html = H1_REGEX.replace_all(markdown, "<h1>$1</h1>");
    let html = H2_REGEX.replace_all(&html, "<h2>$1</h2>");
    let html = H3_REGEX.replace_all(&html, "<h3>$1</h3>");

    let html = wrap_paragraphs(&html);

    let html = BOLD_REGEX.replace_all(&html, "<strong>$1</strong>");
    let html = ITALIC_REGEX.replace_all(&html, "<em>$1</em>");

    let html = BULLET_ITEM_REGEX.replace_all(&html, "<ul><li>$2</li></ul>");
    let html = NUMBERED_ITEM_REGEX.replace_all(&html, "<ol><li>$3</li></ol>");

    let html = FENCED_CODE_REGEX.replace_all(&html, "<pre><code>$1</code></pre>");
    let html = INLINE_CODE_REGEX.replace_all(&html, "<code>$1</code>");

    let html = BLOCKQUOTE_REGEX.replace_all(&html, "<blockquote>$1</blockquote>");

    html.into_owned()
}

/// Wrap every non-empty line that does not already start with a block-level
/// tag in paragraph tags. Empty lines pass through untouched.
fn wrap_paragraphs(html: &str) -> String {
    html.split('\n')
        .map(|line| {
            if line.is_empty() || starts_with_block_tag(line) {
                line.to_string()
            } else {
                format!("<p>{line}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn starts_with_block_tag(line: &str) -> bool {
    if let Some(rest) = line.strip_prefix("<h") {
        if rest.starts_with(|c: char| ('1'..='6').contains(&c)) {
            return true;
        }
    }
    line.starts_with("<ul")
        || line.starts_with("<ol")
        || line.starts_with("<blockquote")
        || line.starts_with("<pre")
}
