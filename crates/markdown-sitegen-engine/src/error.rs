use crate::{html::HtmlError, parsing::inline::InlineError};

/// Errors raised while converting a markdown document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Inline(#[from] InlineError),
    #[error(transparent)]
    Html(#[from] HtmlError),
    #[error("no `# ` title line found in markdown")]
    NoTitleFound,
}
