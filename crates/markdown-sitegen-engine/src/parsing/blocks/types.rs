/// The kind of a block, derived from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#` to `######` followed by a space.
    Heading {
        /// 1 to 6
        level: u8,
    },
    /// Fenced with ``` lines.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... in order.
    OrderedList,
    /// Default when no other kind matches.
    Paragraph,
}

/// A run of non-blank lines with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The block's lines, each trimmed, joined by `\n`.
    pub raw_text: String,
    pub kind: BlockKind,
}

impl Block {
    pub fn new(raw_text: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            raw_text: raw_text.into(),
            kind,
        }
    }
}
