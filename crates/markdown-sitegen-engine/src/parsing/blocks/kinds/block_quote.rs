/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier or assembler code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Whether every line of a block is quoted.
    pub fn matches(lines: &[&str]) -> bool {
        !lines.is_empty() && lines.iter().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips a single `> ` (or bare `>`) prefix from a line.
    ///
    /// Lines without the prefix are returned unchanged.
    pub fn strip_prefix(line: &str) -> &str {
        match line.strip_prefix(Self::PREFIX) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }

    /// Folds the quoted lines of a block into one line of inline text.
    pub fn inline_text(raw: &str) -> String {
        raw.lines()
            .map(Self::strip_prefix)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
