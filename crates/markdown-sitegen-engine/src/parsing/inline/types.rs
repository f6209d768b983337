/// The kind of an inline text span.
///
/// Links and images own their target URL so a plain span can never carry one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    /// Text that isn't part of any special construct.
    Plain,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](url)`
    Link { url: String },
    /// `![alt](url)`
    Image { url: String },
}

/// A typed fragment of inline text produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    /// Visible text, or the alt text for images.
    pub content: String,
    pub kind: SpanKind,
}

impl TextSpan {
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn bold(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Bold)
    }

    pub fn italic(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Italic)
    }

    pub fn code(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Code)
    }

    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Link { url: url.into() })
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, SpanKind::Image { url: url.into() })
    }

    /// The link or image target, if this span has one.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { url } | SpanKind::Image { url } => Some(url),
            SpanKind::Plain | SpanKind::Bold | SpanKind::Italic | SpanKind::Code => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.kind, SpanKind::Plain)
    }
}

/// Errors raised while tokenizing or converting inline text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    #[error("invalid markdown, formatted section not closed: unmatched `{delimiter}`")]
    UnterminatedInlineSpan { delimiter: &'static str },
    #[error("link `{text}` has no target")]
    MissingLinkTarget { text: String },
    #[error("image `{alt}` has no target")]
    MissingImageTarget { alt: String },
}
