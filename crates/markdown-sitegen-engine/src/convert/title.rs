use crate::error::ConvertError;

/// The marker a title line starts with.
pub const TITLE_PREFIX: &str = "# ";

/// Returns the text of the first line starting with `# `, trimmed.
///
/// Later `# ` lines are ignored. Lines are not trimmed before matching, so an
/// indented `# ` line does not count.
pub fn extract_title(markdown: &str) -> Result<String, ConvertError> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .ok_or(ConvertError::NoTitleFound)
}
