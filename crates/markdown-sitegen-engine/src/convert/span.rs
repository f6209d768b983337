use crate::{
    html::{Attributes, LeafNode},
    parsing::inline::{InlineError, SpanKind, TextSpan},
};

/// Maps a text span to the leaf node that renders it.
///
/// | kind   | node                          |
/// |--------|-------------------------------|
/// | Plain  | untagged text                 |
/// | Bold   | `<b>`                         |
/// | Italic | `<i>`                         |
/// | Code   | `<code>`                      |
/// | Link   | `<a href="url">text</a>`      |
/// | Image  | `<img src="url" alt="alt">`   |
///
/// # Errors
/// Links and images with an empty target fail with
/// [`InlineError::MissingLinkTarget`] / [`InlineError::MissingImageTarget`].
pub fn text_span_to_html_node(span: TextSpan) -> Result<LeafNode, InlineError> {
    let TextSpan { content, kind } = span;
    let leaf = match kind {
        SpanKind::Plain => LeafNode::text(content),
        SpanKind::Bold => LeafNode::tagged("b", content),
        SpanKind::Italic => LeafNode::tagged("i", content),
        SpanKind::Code => LeafNode::tagged("code", content),
        SpanKind::Link { url } => {
            if url.is_empty() {
                return Err(InlineError::MissingLinkTarget { text: content });
            }
            LeafNode::tagged("a", content).with_attributes(Attributes::from([("href", url)]))
        }
        SpanKind::Image { url } => {
            if url.is_empty() {
                return Err(InlineError::MissingImageTarget { alt: content });
            }
            LeafNode::void("img", Attributes::from([("src", url), ("alt", content)]))
        }
    };
    Ok(leaf)
}
