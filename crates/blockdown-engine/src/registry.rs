use crate::model::{BlockContent, BlockKind, HeadingLevel, SpacerSize};
use regex::Regex;

/// Matches a candidate tag head: `<` plus optional `/` plus an identifier.
/// Deliberately matches *any* identifier, not just the closed table, because
/// the balanced scan must track unknown tags nested inside known ones.
const TAG_HEAD_PATTERN: &str = r"<(/?)([A-Za-z][A-Za-z0-9]*)";

/// Matches one attribute in either syntax: `name="literal"` or
/// ``name={`template`}``. The backtick form admits backslash-escaped
/// characters so escaped backticks inside code bodies do not end the value.
const ATTR_PATTERN: &str = r#"(?s)([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(?:"([^"]*)"|\{`((?:[^`\\]|\\.)*)`\})"#;

/// The closed tag vocabulary plus the pre-compiled scan patterns.
///
/// One registry is built per editing session and passed by reference into
/// the scanner, parser, and serializer. There is no process-wide state: two
/// sessions never share anything through parsing.
#[derive(Debug, Clone)]
pub struct BlockRegistry {
    head_re: Regex,
    attr_re: Regex,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            head_re: Regex::new(TAG_HEAD_PATTERN).expect("Invalid tag head regex"),
            attr_re: Regex::new(ATTR_PATTERN).expect("Invalid attribute regex"),
        }
    }

    /// Look up the kind for a tag identifier. `None` means the identifier is
    /// not part of the vocabulary and the `<` it followed is ordinary text.
    pub fn kind_for_tag(&self, tag: &str) -> Option<BlockKind> {
        match tag {
            "H1" => Some(BlockKind::H1),
            "H2" => Some(BlockKind::H2),
            "H3" => Some(BlockKind::H3),
            "Text" => Some(BlockKind::Text),
            "Code" => Some(BlockKind::Code),
            "Link" => Some(BlockKind::Link),
            "D" => Some(BlockKind::Divider),
            "SpacerS" => Some(BlockKind::SpacerSmall),
            "SpacerM" => Some(BlockKind::SpacerMedium),
            "SpacerL" => Some(BlockKind::SpacerLarge),
            _ => None,
        }
    }

    pub fn tag_name(&self, kind: BlockKind) -> &'static str {
        match kind {
            BlockKind::H1 => "H1",
            BlockKind::H2 => "H2",
            BlockKind::H3 => "H3",
            BlockKind::Text => "Text",
            BlockKind::Code => "Code",
            BlockKind::Link => "Link",
            BlockKind::Divider => "D",
            BlockKind::SpacerSmall => "SpacerS",
            BlockKind::SpacerMedium => "SpacerM",
            BlockKind::SpacerLarge => "SpacerL",
        }
    }

    /// Default payload for a kind: empty strings for every text field, fixed
    /// size for spacers. Parsing starts from this and overlays whatever the
    /// source text actually provides, so missing props never leave a hole.
    pub fn default_content(&self, kind: BlockKind) -> BlockContent {
        match kind {
            BlockKind::H1 => BlockContent::Heading {
                level: HeadingLevel::H1,
                text: String::new(),
            },
            BlockKind::H2 => BlockContent::Heading {
                level: HeadingLevel::H2,
                text: String::new(),
            },
            BlockKind::H3 => BlockContent::Heading {
                level: HeadingLevel::H3,
                text: String::new(),
            },
            BlockKind::Text => BlockContent::Text {
                text: String::new(),
            },
            BlockKind::Code => BlockContent::Code {
                code: String::new(),
                language: String::new(),
            },
            BlockKind::Link => BlockContent::Link {
                text: String::new(),
                href: String::new(),
            },
            BlockKind::Divider => BlockContent::Divider,
            BlockKind::SpacerSmall => BlockContent::Spacer {
                size: SpacerSize::Small,
            },
            BlockKind::SpacerMedium => BlockContent::Spacer {
                size: SpacerSize::Medium,
            },
            BlockKind::SpacerLarge => BlockContent::Spacer {
                size: SpacerSize::Large,
            },
        }
    }

    pub(crate) fn tag_head(&self) -> &Regex {
        &self.head_re
    }

    pub(crate) fn attr(&self) -> &Regex {
        &self.attr_re
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}
