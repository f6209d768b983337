pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, MarkdownLineClassifier};

/// Splits a document into classified blocks.
///
/// Blocks are separated by one or more blank lines. Every line is trimmed, so
/// indentation is not preserved. An empty or whitespace-only document yields
/// no blocks.
pub fn segment(document: &str) -> Vec<Block> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in document.lines() {
        builder.push(classifier.classify(line));
    }

    builder.finish()
}
