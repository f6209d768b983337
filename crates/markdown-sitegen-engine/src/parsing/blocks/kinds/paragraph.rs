/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// kind matches. Their lines are folded into a single line before inline
/// tokenization.
pub struct Paragraph;

impl Paragraph {
    pub fn inline_text(raw: &str) -> String {
        raw.lines().collect::<Vec<_>>().join(" ")
    }
}
