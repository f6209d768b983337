use crate::{
    error::ConvertError,
    html::{Child, LeafNode, ParentNode},
    parsing::{
        blocks::{
            Block, BlockKind,
            kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
        },
        inline::tokenize,
    },
};

use super::span::text_span_to_html_node;

/// Builds the HTML node for a single classified block.
///
/// Every kind except code has its inline content tokenized; code content is
/// emitted literally inside `<pre><code>`.
pub fn block_to_html_node(block: &Block) -> Result<ParentNode, ConvertError> {
    let raw = block.raw_text.as_str();
    match block.kind {
        BlockKind::Heading { level } => {
            let tag = format!("h{level}");
            inline_parent(&tag, &Heading::inline_text(raw, level))
        }
        BlockKind::Code => code_to_html_node(raw),
        BlockKind::Quote => inline_parent("blockquote", &BlockQuote::inline_text(raw)),
        BlockKind::UnorderedList => list_to_html_node("ul", UnorderedList::items(raw)),
        BlockKind::OrderedList => list_to_html_node("ol", OrderedList::items(raw)),
        BlockKind::Paragraph => inline_parent("p", &Paragraph::inline_text(raw)),
    }
}

/// Tokenizes inline text and converts every span to a child node.
pub fn text_to_children(text: &str) -> Result<Vec<Child>, ConvertError> {
    tokenize(text)?
        .into_iter()
        .map(|span| -> Result<Child, ConvertError> { Ok(text_span_to_html_node(span)?.into()) })
        .collect()
}

fn inline_parent(tag: &str, text: &str) -> Result<ParentNode, ConvertError> {
    Ok(ParentNode::new(tag, text_to_children(text)?)?)
}

fn list_to_html_node(tag: &str, items: Vec<&str>) -> Result<ParentNode, ConvertError> {
    let children = items
        .into_iter()
        .map(|item| -> Result<Child, ConvertError> { Ok(inline_parent("li", item)?.into()) })
        .collect::<Result<Vec<Child>, ConvertError>>()?;
    Ok(ParentNode::new(tag, children)?)
}

fn code_to_html_node(raw: &str) -> Result<ParentNode, ConvertError> {
    let interior = CodeFence::interior(raw);
    // An empty interior stays empty so rendering reports the empty leaf.
    let value = if interior.is_empty() {
        interior
    } else {
        interior + "\n"
    };
    let code = LeafNode::tagged("code", value);
    Ok(ParentNode::new("pre", vec![code.into()])?)
}
