//! Tag boundary scanner: splits raw document text into literal-text spans
//! and complete top-level tag spans.
//!
//! One forward walk over the input, driven by the registry's pre-compiled
//! head pattern. Tag elements can nest (a link's text may contain further
//! tags or stray `<`), so the end of a non-self-closing element is found
//! with an explicit stack walk rather than a single non-nesting match.
//! Scanning never fails: unknown tags and inline tag occurrences stay text,
//! and an unterminated element consumes the rest of the document.

use crate::registry::BlockRegistry;
use tracing::warn;

/// One contiguous span of the raw source.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text between tag elements, exactly as written.
    Text(String),
    /// One complete top-level tag element, from its `<` through the `>` of
    /// its close tag (or to end of input for the unterminated fallback).
    Tag(String),
}

/// End of a start tag, as found by [`read_start_tag`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct StartTag {
    /// Byte offset just past the terminating `>`.
    pub(crate) end: usize,
    pub(crate) self_closing: bool,
}

/// Pieces of one tag segment, re-derived from its raw span.
#[derive(Debug, PartialEq)]
pub(crate) struct TagParts<'a> {
    pub(crate) name: &'a str,
    pub(crate) attr_text: &'a str,
    pub(crate) inner: &'a str,
}

/// Splits the document into an ordered list of segments.
pub fn scan_segments(registry: &BlockRegistry, text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut flush_from = 0;
    let mut pos = 0;

    // Helper to flush accumulated text as a text segment. Whitespace-only
    // runs between blocks are dropped, never kept as empty text blocks.
    fn flush_text(segments: &mut Vec<Segment>, pending: &str) {
        if !pending.trim().is_empty() {
            segments.push(Segment::Text(pending.to_string()));
        }
    }

    while let Some(m) = registry.tag_head().find_at(text, pos) {
        let head = m.as_str();
        let tag_name = match head.strip_prefix("</") {
            // a stray close tag cannot begin a block
            Some(_) => {
                pos = m.end();
                continue;
            }
            None => &head[1..],
        };
        if registry.kind_for_tag(tag_name).is_none()
            || !at_block_boundary(&text[flush_from..m.start()])
        {
            pos = m.end();
            continue;
        }

        let start = m.start();
        let seg_end = match read_start_tag(text, m.end()) {
            Some(tag) if tag.self_closing => Some(tag.end),
            Some(tag) => find_balanced_end(registry, text, tag_name, tag.end),
            None => None,
        };

        flush_text(&mut segments, &text[flush_from..start]);
        match seg_end {
            Some(end) => {
                segments.push(Segment::Tag(text[start..end].to_string()));
                flush_from = end;
                pos = end;
            }
            None => {
                warn!(
                    tag = tag_name,
                    offset = start,
                    "unterminated tag, taking remainder of document as one segment"
                );
                segments.push(Segment::Tag(text[start..].to_string()));
                return segments;
            }
        }
    }

    flush_text(&mut segments, &text[flush_from..]);
    segments
}

/// A known tag only begins a block when it sits at a block boundary: at the
/// start of the document, after nothing but whitespace since the previous
/// segment, or after a blank line. Anywhere else the occurrence is inline
/// and stays part of the enclosing paragraph text.
fn at_block_boundary(pending: &str) -> bool {
    if pending.chars().all(char::is_whitespace) {
        return true;
    }
    let tail = pending.trim_end_matches([' ', '\t', '\r']);
    let Some(tail) = tail.strip_suffix('\n') else {
        return false;
    };
    tail.trim_end_matches([' ', '\t', '\r']).ends_with('\n')
}

/// Walks forward from the end of an open start tag until the stack seeded
/// with `open_name` empties. Every non-self-closing open tag pushes, known
/// or not; a close tag pops only when it matches the stack top. Returns the
/// byte offset just past the matching close tag, or `None` if the document
/// ends first.
fn find_balanced_end(
    registry: &BlockRegistry,
    text: &str,
    open_name: &str,
    from: usize,
) -> Option<usize> {
    let mut stack: Vec<&str> = vec![open_name];
    let mut pos = from;

    while let Some(m) = registry.tag_head().find_at(text, pos) {
        let head = m.as_str();
        if let Some(close_name) = head.strip_prefix("</") {
            match read_close_tag_end(text, m.end()) {
                Some(end) => {
                    if stack.last().copied() == Some(close_name) {
                        stack.pop();
                        if stack.is_empty() {
                            return Some(end);
                        }
                    }
                    pos = end;
                }
                // `</Name` with no `>` is not a close tag, skip past it
                None => pos = m.end(),
            }
        } else {
            match read_start_tag(text, m.end()) {
                Some(tag) => {
                    if !tag.self_closing {
                        stack.push(&head[1..]);
                    }
                    pos = tag.end;
                }
                // an unterminated start tag inside leaves the whole element
                // unbalanced
                None => return None,
            }
        }
    }
    None
}

/// Reads from just after a tag identifier to the `>` that terminates the
/// start tag. Quoted attribute values may legally contain `<`, `>`, or `/`,
/// so the walk skips over both quoting conventions; inside backticks a
/// backslash escapes the next character. Returns `None` when the start tag
/// never terminates.
pub(crate) fn read_start_tag(text: &str, from: usize) -> Option<StartTag> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'>' => {
                let self_closing = i > from && bytes[i - 1] == b'/';
                return Some(StartTag {
                    end: i + 1,
                    self_closing,
                });
            }
            b'"' => {
                i += 1;
                while i < bytes.len() && bytes[i] != b'"' {
                    i += 1;
                }
                if i >= bytes.len() {
                    return None;
                }
                i += 1;
            }
            b'`' => {
                i += 1;
                while i < bytes.len() && bytes[i] != b'`' {
                    if bytes[i] == b'\\' && i + 1 < bytes.len() {
                        i += 1;
                    }
                    i += 1;
                }
                if i >= bytes.len() {
                    return None;
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    None
}

/// Reads from just after a close tag's identifier, over optional whitespace,
/// to its `>`. Returns the offset just past it.
pub(crate) fn read_close_tag_end(text: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    if bytes.get(i) == Some(&b'>') {
        Some(i + 1)
    } else {
        None
    }
}

/// Splits a tag segment back into name, attribute substring, and inner
/// content. Tolerant of the unterminated fallback: a missing `>` yields an
/// empty inner with everything after the name as attribute text; a missing
/// close tag lets the inner run to the end of the span.
pub(crate) fn split_tag<'a>(registry: &BlockRegistry, raw: &'a str) -> Option<TagParts<'a>> {
    let m = registry.tag_head().find_at(raw, 0)?;
    if m.start() != 0 || raw.starts_with("</") {
        return None;
    }
    let name = &raw[1..m.end()];

    let Some(tag) = read_start_tag(raw, m.end()) else {
        return Some(TagParts {
            name,
            attr_text: raw[m.end()..].trim(),
            inner: "",
        });
    };

    let raw_attr = &raw[m.end()..tag.end - 1];
    let attr_text = raw_attr.strip_suffix('/').unwrap_or(raw_attr).trim();

    let inner = if tag.self_closing {
        ""
    } else {
        match strip_close_tag(raw, name) {
            Some(before_close) => &raw[tag.end..before_close],
            None => &raw[tag.end..],
        }
    };

    Some(TagParts {
        name,
        attr_text,
        inner,
    })
}

/// If `raw` ends with `</name>`, returns the byte offset where that close
/// tag begins.
fn strip_close_tag(raw: &str, name: &str) -> Option<usize> {
    let t = raw.strip_suffix('>')?;
    let t = t.trim_end_matches([' ', '\t', '\r', '\n']);
    let t = t.strip_suffix(name)?;
    let t = t.strip_suffix("</")?;
    Some(t.len())
}
