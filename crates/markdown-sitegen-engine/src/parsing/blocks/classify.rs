use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classification of a single source line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// The line with surrounding whitespace trimmed.
    pub text: String,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
}

/// Classifies individual lines.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify(&self, line: &str) -> LineClass {
        let text = line.trim();
        LineClass {
            text: text.to_string(),
            is_blank: text.is_empty(),
        }
    }
}

/// Determines the kind of a block from its text.
///
/// First match wins: heading, code, quote, unordered list, ordered list,
/// then paragraph.
pub fn classify(raw: &str) -> BlockKind {
    let lines: Vec<&str> = raw.lines().collect();

    if let Some(level) = lines.first().and_then(|first| Heading::level(first)) {
        return BlockKind::Heading { level };
    }
    if CodeFence::matches(&lines) {
        return BlockKind::Code;
    }
    if BlockQuote::matches(&lines) {
        return BlockKind::Quote;
    }
    if UnorderedList::matches(&lines) {
        return BlockKind::UnorderedList;
    }
    if OrderedList::matches(&lines) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}
