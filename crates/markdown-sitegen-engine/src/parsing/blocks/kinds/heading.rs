/// ATX heading (`# Title` through `###### Title`).
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Returns the heading level if `line` opens a heading.
    ///
    /// Needs 1 to 6 `#` followed by a space; `####### x` and `#x` are not
    /// headings.
    pub fn level(line: &str) -> Option<u8> {
        let hashes = line.chars().take_while(|c| *c == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }
        if line[hashes..].starts_with(' ') {
            Some(hashes as u8)
        } else {
            None
        }
    }

    /// Heading text with the marker and one space stripped and any line
    /// breaks folded into spaces.
    pub fn inline_text(raw: &str, level: u8) -> String {
        let text = raw.get(level as usize + 1..).unwrap_or_default();
        text.lines().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Heading 1", Some(1))]
    #[case("### Subheading", Some(3))]
    #[case("###### Small heading", Some(6))]
    #[case("####### Too deep", None)]
    #[case("#NoSpace", None)]
    #[case("#", None)]
    #[case("Not # a heading", None)]
    fn heading_levels(#[case] line: &str, #[case] expected: Option<u8>) {
        assert_eq!(Heading::level(line), expected);
    }

    #[test]
    fn inline_text_strips_marker() {
        assert_eq!(Heading::inline_text("## Section", 2), "Section");
    }

    #[test]
    fn inline_text_folds_lines() {
        assert_eq!(Heading::inline_text("# Long\nheading", 1), "Long heading");
    }
}
