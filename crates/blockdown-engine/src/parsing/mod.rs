//! Document parsing: raw text to typed blocks.
//!
//! The pipeline runs in two phases:
//!
//! 1. [`scanner`] splits the text into literal-text and tag segments.
//! 2. [`block_from_segment`] turns each segment into at most one [`Block`]:
//!    registry defaults first, then the tag's inner content onto the kind's
//!    body field, then extracted attributes onto their schema fields.
//!
//! Parsing is total. Malformed input degrades (unknown tags and inline tag
//! occurrences become paragraph text, unterminated tags consume to end of
//! input) and never produces an error.

pub mod attrs;
pub mod scanner;


use crate::escape::unescape_body;
use crate::model::{Block, BlockContent};
use crate::registry::BlockRegistry;
use attrs::extract_attrs;
use scanner::{Segment, scan_segments, split_tag};
use tracing::debug;

/// Parses a whole document into an ordered block list. Every block receives
/// a fresh id; parsing the same text twice yields equal content with
/// different ids.
pub fn parse_document(registry: &BlockRegistry, text: &str) -> Vec<Block> {
    scan_segments(registry, text)
        .into_iter()
        .filter_map(|segment| block_from_segment(registry, &segment))
        .collect()
}

/// Turns one segment into zero or one block.
///
/// Text segments keep their raw span untouched (untrimmed, no unescaping) as
/// paragraph text, or nothing if the span is blank. Tag segments start from
/// the registry default for their kind and overlay inner content, then
/// attributes. A tag segment that cannot be re-derived is treated as text.
pub fn block_from_segment(registry: &BlockRegistry, segment: &Segment) -> Option<Block> {
    match segment {
        Segment::Text(raw) => paragraph_block(raw),
        Segment::Tag(raw) => {
            let Some(parts) = split_tag(registry, raw) else {
                return paragraph_block(raw);
            };
            let Some(kind) = registry.kind_for_tag(parts.name) else {
                return paragraph_block(raw);
            };

            let mut content = registry.default_content(kind);
            apply_inner(&mut content, parts.inner);
            for (name, value) in extract_attrs(registry, parts.attr_text) {
                apply_attr(&mut content, &name, value);
            }
            Some(Block::new(content))
        }
    }
}

fn paragraph_block(raw: &str) -> Option<Block> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(Block::new(BlockContent::Text {
        text: raw.to_string(),
    }))
}

/// Maps a tag's inner content onto the kind's body field. Inner content is
/// trimmed for every kind except paragraph text, where surrounding
/// whitespace is part of the payload and trimming would be unrecoverable.
fn apply_inner(content: &mut BlockContent, inner: &str) {
    match content {
        BlockContent::Heading { text, .. } | BlockContent::Link { text, .. } => {
            *text = unescape_body(inner.trim());
        }
        BlockContent::Text { text } => {
            *text = unescape_body(inner);
        }
        BlockContent::Code { code, .. } => {
            *code = unescape_body(inner.trim());
        }
        BlockContent::Divider | BlockContent::Spacer { .. } => {}
    }
}

/// Overlays one extracted attribute onto the matching schema field.
/// Attributes outside the kind's schema are dropped; the closed field set is
/// the contract.
fn apply_attr(content: &mut BlockContent, name: &str, value: String) {
    match (content, name) {
        (BlockContent::Heading { text, .. }, "text") => *text = value,
        (BlockContent::Text { text }, "text") => *text = value,
        (BlockContent::Code { code, .. }, "code") => *code = value,
        (BlockContent::Code { language, .. }, "language") => *language = value,
        (BlockContent::Link { text, .. }, "text") => *text = value,
        (BlockContent::Link { href, .. }, "href") => *href = value,
        (_, name) => debug!(attr = name, "ignoring attribute not in block schema"),
    }
}
