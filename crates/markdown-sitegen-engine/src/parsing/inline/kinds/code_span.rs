/// Code span inline type with owned delimiter constant.
///
/// Code spans are split last, so backticks inside an image or link are
/// already out of reach by the time this delimiter is applied.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const DELIMITER: &'static str = "`";
}
