use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a block within one editing session.
///
/// Ids are minted fresh on every parse and by every [`crate::store::BlockStore`]
/// mutation that creates a block. Two independent parses of equivalent text
/// produce different ids, so ids must never be used to compare documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

/// Heading depth. The tag vocabulary has exactly three levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

/// Vertical spacing step for spacer blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpacerSize {
    Small,
    Medium,
    Large,
}

/// The closed set of block kinds. No new kinds exist at runtime; every tag
/// name in a document either maps to one of these or is treated as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    H1,
    H2,
    H3,
    Text,
    Code,
    Link,
    Divider,
    SpacerSmall,
    SpacerMedium,
    SpacerLarge,
}

impl BlockKind {
    pub const ALL: [BlockKind; 10] = [
        BlockKind::H1,
        BlockKind::H2,
        BlockKind::H3,
        BlockKind::Text,
        BlockKind::Code,
        BlockKind::Link,
        BlockKind::Divider,
        BlockKind::SpacerSmall,
        BlockKind::SpacerMedium,
        BlockKind::SpacerLarge,
    ];
}

/// Typed payload of a block. Each variant carries the full prop schema for
/// its kind, so a block can never hold an unrecognized kind or a prop set
/// that does not match its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockContent {
    Heading { level: HeadingLevel, text: String },
    Text { text: String },
    Code { code: String, language: String },
    Link { text: String, href: String },
    Divider,
    Spacer { size: SpacerSize },
}

impl BlockContent {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Heading {
                level: HeadingLevel::H1,
                ..
            } => BlockKind::H1,
            BlockContent::Heading {
                level: HeadingLevel::H2,
                ..
            } => BlockKind::H2,
            BlockContent::Heading {
                level: HeadingLevel::H3,
                ..
            } => BlockKind::H3,
            BlockContent::Text { .. } => BlockKind::Text,
            BlockContent::Code { .. } => BlockKind::Code,
            BlockContent::Link { .. } => BlockKind::Link,
            BlockContent::Divider => BlockKind::Divider,
            BlockContent::Spacer {
                size: SpacerSize::Small,
            } => BlockKind::SpacerSmall,
            BlockContent::Spacer {
                size: SpacerSize::Medium,
            } => BlockKind::SpacerMedium,
            BlockContent::Spacer {
                size: SpacerSize::Large,
            } => BlockKind::SpacerLarge,
        }
    }
}

/// One unit of document content: a session-unique id plus typed payload.
/// Document order is the order of the containing `Vec<Block>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub content: BlockContent,
}

impl Block {
    pub fn new(content: BlockContent) -> Self {
        Self {
            id: BlockId::new(),
            content,
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.content.kind()
    }
}
