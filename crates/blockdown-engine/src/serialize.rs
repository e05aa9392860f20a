//! Serialization: typed blocks back to document text.
//!
//! Each kind has one fixed template. Escaping is position-specific (body,
//! quoted attribute, backtick template) and every escape has an exact
//! inverse in the parser, so serialize-then-parse preserves payloads.
//! Serialization is total: the closed kind set guarantees a template for
//! every block.

use crate::escape::{escape_attr, escape_body, escape_template};
use crate::model::{Block, BlockContent};
use crate::registry::BlockRegistry;

/// Renders the block list in order, blocks separated by one blank line.
/// An empty list yields the empty string.
pub fn serialize_blocks(registry: &BlockRegistry, blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| render_block(registry, block))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Renders one block from its kind's template.
pub fn render_block(registry: &BlockRegistry, block: &Block) -> String {
    let tag = registry.tag_name(block.kind());
    match &block.content {
        BlockContent::Heading { text, .. } => {
            format!("<{tag}>\n{}\n</{tag}>", escape_body(text))
        }
        // no newline padding: paragraph inner content is parsed untrimmed,
        // so padding would accrete on every round trip
        BlockContent::Text { text } => {
            format!("<{tag}>{}</{tag}>", escape_body(text))
        }
        BlockContent::Code { code, language } => {
            format!(
                "<{tag} code={{`{}`}} language=\"{}\" />",
                escape_template(code),
                escape_attr(language)
            )
        }
        BlockContent::Link { text, href } => {
            format!(
                "<{tag} href=\"{}\">\n{}\n</{tag}>",
                escape_attr(href),
                escape_body(text)
            )
        }
        BlockContent::Divider | BlockContent::Spacer { .. } => {
            format!("<{tag} />")
        }
    }
}
