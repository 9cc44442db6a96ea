//! services/engine/src/markup.rs
//!
//! A small tokenizer for the assistant's constrained markup dialect. It
//! converts raw message text into a sequence of display segments the
//! presentation layer walks; nothing here decides how segments are drawn.
//!
//! Structured (code-first) messages never reach this module: the caller
//! renders them verbatim based on the message's `is_structured` hint.

/// One structurally-typed unit of renderable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplaySegment {
    /// A plain text run.
    Text(String),
    LineBreak,
    Heading1(String),
    Heading2(String),
    /// A bullet line, marker stripped.
    Bullet(String),
    Bold(String),
    Italic(String),
    InlineCode(String),
    /// A fenced code block, kept verbatim: nothing inside is reinterpreted.
    CodeBlock(String),
}

const FENCE: &str = "```";
const BOLD: &str = "**";

/// Renders markup text into an ordered sequence of display segments.
///
/// Inline patterns are matched in precedence order: fenced code first (so
/// `*` and backticks inside a block are never reinterpreted), then inline
/// code, bold, italic. Unmatched delimiters degrade to literal plain text.
pub fn render(text: &str) -> Vec<DisplaySegment> {
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];

        if let Some((consumed, segment)) = match_inline_token(rest) {
            flush_plain(&mut plain, &mut segments);
            segments.push(segment);
            pos += consumed;
            continue;
        }

        // No token starts here. The current character, delimiter or not,
        // is literal text.
        let ch = rest.chars().next().unwrap_or('\u{fffd}');
        plain.push(ch);
        pos += ch.len_utf8();
    }

    flush_plain(&mut plain, &mut segments);
    segments
}

/// Tries to match one balanced inline token at the start of `rest`.
/// Returns the number of bytes consumed and the produced segment.
fn match_inline_token(rest: &str) -> Option<(usize, DisplaySegment)> {
    if let Some(inner) = delimited(rest, FENCE, FENCE) {
        return Some((
            inner.len() + 2 * FENCE.len(),
            DisplaySegment::CodeBlock(inner.to_string()),
        ));
    }
    if let Some(inner) = delimited(rest, "`", "`") {
        return Some((inner.len() + 2, DisplaySegment::InlineCode(inner.to_string())));
    }
    if let Some(inner) = delimited(rest, BOLD, BOLD) {
        return Some((
            inner.len() + 2 * BOLD.len(),
            DisplaySegment::Bold(inner.to_string()),
        ));
    }
    if let Some(inner) = delimited(rest, "*", "*") {
        return Some((inner.len() + 2, DisplaySegment::Italic(inner.to_string())));
    }
    None
}

/// If `rest` starts with `open` and a matching `close` follows, returns the
/// content between the delimiters.
///
/// An empty run is rejected: otherwise a dangling `**` would parse as the
/// italic pair `*` + `*` with nothing inside instead of degrading to
/// literal text.
fn delimited<'a>(rest: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let body = rest.strip_prefix(open)?;
    let end = body.find(close)?;
    if end == 0 {
        return None;
    }
    Some(&body[..end])
}

/// Splits an accumulated plain run into line-structured segments, inserting
/// a `LineBreak` between lines but not before the first.
fn flush_plain(plain: &mut String, segments: &mut Vec<DisplaySegment>) {
    if plain.is_empty() {
        return;
    }
    for (index, line) in plain.split('\n').enumerate() {
        if index > 0 {
            segments.push(DisplaySegment::LineBreak);
        }
        if let Some(heading) = line.strip_prefix("## ") {
            segments.push(DisplaySegment::Heading2(heading.to_string()));
        } else if let Some(heading) = line.strip_prefix("# ") {
            segments.push(DisplaySegment::Heading1(heading.to_string()));
        } else if let Some(item) = line.strip_prefix("- ") {
            segments.push(DisplaySegment::Bullet(item.to_string()));
        } else if !line.is_empty() {
            segments.push(DisplaySegment::Text(line.to_string()));
        }
    }
    plain.clear();
}
