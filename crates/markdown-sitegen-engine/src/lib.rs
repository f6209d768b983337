pub mod convert;
pub mod error;
pub mod html;
pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use convert::{convert_document, extract_title, markdown_to_html_node};
pub use error::ConvertError;
pub use html::{HtmlError, HtmlNode};
pub use parsing::{
    blocks::{Block, BlockKind},
    inline::{InlineError, SpanKind, TextSpan, tokenize},
    segment,
};
