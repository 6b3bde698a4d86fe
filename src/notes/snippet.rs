//! Snippet summarizer
//!
//! Converts a note's markdown body into a short plain-text preview for the
//! note list. The body is rendered to HTML, scrubbed of anything executable
//! or style-carrying, flattened to text, and clipped to a handful of lines.
//! Output is deterministic and the function never fails.

use once_cell::sync::Lazy;
use pulldown_cmark::{html, Parser};
use regex::Regex;

/// Script, style, and embedded-frame elements are dropped wholesale,
/// content included. Stored note bodies are reflected into a display
/// surface, so their markup is never trusted.
static SCRIPTISH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>|<iframe\b[^>]*>.*?</iframe\s*>",
    )
    .unwrap()
});

/// Block boundaries that become line breaks in the preview
static BLOCK_BREAKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</p\s*>|</h[1-6]\s*>|</li\s*>|<br\s*/?>").unwrap());

/// Any remaining tag, stripped while keeping inner text (divs, sections,
/// emphasis, list wrappers)
static TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Produce a bounded plain-text preview of a markdown note body.
///
/// At most `max_lines` non-empty lines are kept, joined by `\n`; a `...`
/// marker is appended iff lines were dropped. Empty or whitespace-only
/// bodies yield an empty string.
pub fn summarize(body: &str, max_lines: usize) -> String {
    if body.trim().is_empty() {
        return String::new();
    }

    clip_lines(&markup_to_plain(body), max_lines)
}

/// Render markdown to HTML and flatten it back down to plain text
fn markup_to_plain(body: &str) -> String {
    let mut rendered = String::with_capacity(body.len() * 2);
    html::push_html(&mut rendered, Parser::new(body));

    let scrubbed = SCRIPTISH.replace_all(&rendered, "");
    let broken = BLOCK_BREAKS.replace_all(&scrubbed, "\n");
    let text = TAGS.replace_all(&broken, "");
    let collapsed = EXCESS_NEWLINES.replace_all(&text, "\n\n");

    decode_entities(&collapsed)
}

/// Decode the five standard entities the HTML renderer escapes text with.
/// `&amp;` goes last so escaped ampersands are not double-decoded.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Keep at most `max_lines` non-empty lines, marking any truncation
fn clip_lines(text: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();

    let mut preview = lines
        .iter()
        .take(max_lines)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    if lines.len() > max_lines {
        preview.push_str("...");
    }

    preview
}
