//! # HTML Node Model
//!
//! A minimal HTML tree with two node variants:
//!
//! - **`LeafNode`**: optional tag plus a text value, no children
//! - **`ParentNode`**: required tag plus a non-empty list of children
//!
//! Children of a parent are either nodes, rendered recursively, or raw
//! strings, which are HTML-escaped on render. Leaf values are emitted as-is.
//!
//! Trees are built once and rendered once. Constructors take finished
//! children and attribute lists and validate them up front, so a
//! `ParentNode` that exists always has a valid tag and at least one child.

pub mod attributes;
pub mod node;

pub use attributes::{AttrValue, Attributes};
pub use node::{Child, HtmlNode, LeafNode, ParentNode};

/// Errors raised while building or rendering HTML nodes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("leaf node has no value (tag: {tag:?})")]
    EmptyLeafValue { tag: Option<String> },
    #[error("invalid parent tag `{tag}`")]
    InvalidParentTag { tag: String },
    #[error("parent node <{tag}> has no children")]
    EmptyChildren { tag: String },
}
