/// Strong emphasis, rendered as `<b>`.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";
}

/// Emphasis, rendered as `<i>`.
pub struct Italic;

impl Italic {
    pub const DELIMITER: &'static str = "_";
}
