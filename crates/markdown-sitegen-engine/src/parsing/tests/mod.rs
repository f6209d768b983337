//! Integration tests for the segmenter.


use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::{Block, BlockKind},
    segment,
};

#[test]
fn heading_paragraph_and_list() {
    let blocks = segment("# H\n\nbody text\n\n- a\n- b");
    invariants::check(&blocks);
    assert_eq!(
        blocks,
        vec![
            Block::new("# H", BlockKind::Heading { level: 1 }),
            Block::new("body text", BlockKind::Paragraph),
            Block::new("- a\n- b", BlockKind::UnorderedList),
        ]
    );
}

#[test]
fn indented_document_is_trimmed() {
    let md = "
    This is **bolded** paragraph.

    This is another paragraph with _italic_ text and `code` here.
    This is the same paragraph on a new line.

    - This is a list
    - with items
    ";
    let blocks = segment(md);
    invariants::check(&blocks);
    let texts: Vec<&str> = blocks.iter().map(|b| b.raw_text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "This is **bolded** paragraph.",
            "This is another paragraph with _italic_ text and `code` here.\nThis is the same paragraph on a new line.",
            "- This is a list\n- with items",
        ]
    );
}

#[test]
fn excessive_blank_lines_collapse() {
    let blocks = segment("Paragraph one.\n\n\n\n\n\nParagraph two.\n \t \n\nParagraph three.");
    invariants::check(&blocks);
    assert_eq!(blocks.len(), 3);
    assert!(blocks.iter().all(|b| b.kind == BlockKind::Paragraph));
}

#[test]
fn windows_line_endings() {
    let blocks = segment("# Title\r\n\r\nBody\r\n");
    invariants::check(&blocks);
    assert_eq!(
        blocks,
        vec![
            Block::new("# Title", BlockKind::Heading { level: 1 }),
            Block::new("Body", BlockKind::Paragraph),
        ]
    );
}

#[test]
fn code_fence_with_inline_syntax() {
    let blocks = segment("```\nlet x = **y**;\n```");
    invariants::check(&blocks);
    assert_eq!(blocks, vec![Block::new("```\nlet x = **y**;\n```", BlockKind::Code)]);
}

#[test]
fn single_line_document() {
    let blocks = segment("This is a single line of Markdown.");
    assert_eq!(
        blocks,
        vec![Block::new("This is a single line of Markdown.", BlockKind::Paragraph)]
    );
}

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    assert!(segment("").is_empty());
}

/// Test blank lines don't produce blocks.
#[test]
fn blank_lines_only() {
    assert!(segment("\n  \n\t\n").is_empty());
}
