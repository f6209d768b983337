use super::{
    classify::{LineClass, classify},
    types::Block,
};

/// Groups classified lines into blocks.
///
/// Non-blank lines accumulate into the current block; a blank line (or the
/// end of input) closes it. Runs of blank lines produce a single boundary.
pub struct BlockBuilder {
    lines: Vec<String>,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            lines: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass) {
        if c.is_blank {
            self.flush();
            return;
        }
        self.lines.push(c.text);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        let raw_text = std::mem::take(&mut self.lines).join("\n");
        let kind = classify(&raw_text);
        log::trace!("classified block as {kind:?}");
        self.out.push(Block { raw_text, kind });
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::BlockKind;
    use pretty_assertions::assert_eq;

    fn line(text: &str) -> LineClass {
        LineClass {
            text: text.to_string(),
            is_blank: text.is_empty(),
        }
    }

    #[test]
    fn blocks_are_classified_on_flush() {
        let mut builder = BlockBuilder::new();
        for text in ["# Title", "", "", "- a", "- b", "", "plain"] {
            builder.push(line(text));
        }

        let kinds: Vec<BlockKind> = builder.finish().into_iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Heading { level: 1 },
                BlockKind::UnorderedList,
                BlockKind::Paragraph,
            ]
        );
    }

    #[test]
    fn only_blank_lines_build_nothing() {
        let mut builder = BlockBuilder::new();
        builder.push(line(""));
        builder.push(line(""));
        assert!(builder.finish().is_empty());
    }
}
