//! # Document Conversion
//!
//! Assembles segmented blocks and tokenized inline text into an HTML tree.
//!
//! ## Modules
//!
//! - **`span`**: `text_span_to_html_node()` maps one `TextSpan` to a `LeafNode`
//! - **`block`**: `block_to_html_node()` builds the node for one `Block`
//! - **`title`**: `extract_title()` finds the page title

pub mod block;
pub mod span;
pub mod title;

pub use block::block_to_html_node;
pub use span::text_span_to_html_node;
pub use title::extract_title;

use crate::{
    error::ConvertError,
    html::{Child, HtmlNode, ParentNode},
    parsing::segment,
};

/// The tag of the node wrapping a whole document.
pub const ROOT_TAG: &str = "div";

/// Converts a markdown document into an HTML tree rooted at a `<div>`.
///
/// # Errors
/// Fails on the first block that can't be converted. An empty document has
/// no blocks and fails with `EmptyChildren`.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, ConvertError> {
    let blocks = segment(markdown);
    log::debug!("segmented document into {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(|block| -> Result<Child, ConvertError> { Ok(block_to_html_node(block)?.into()) })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParentNode::new(ROOT_TAG, children)?.into())
}

/// Converts a markdown document into an HTML fragment.
///
/// The result starts with `<div>` and ends with `</div>`.
pub fn convert_document(markdown: &str) -> Result<String, ConvertError> {
    Ok(markdown_to_html_node(markdown)?.to_html()?)
}
