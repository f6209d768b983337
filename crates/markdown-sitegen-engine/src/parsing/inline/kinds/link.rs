use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

/// A link or image found in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    /// Byte range of the whole construct, including `!`, brackets and parens.
    pub range: Range<usize>,
    /// Link text or image alt text.
    pub label: String,
    pub url: String,
}

/// Image syntax: `![alt](url)`.
///
/// The alt text may not contain brackets and the url may not contain
/// parentheses.
pub struct Image;

impl Image {
    pub const PATTERN: &'static str = r"!\[([^\[\]]*)\]\(([^\(\)]*)\)";

    fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid image regex"))
    }

    /// Finds every image in `text`, in order of appearance.
    pub fn find_all(text: &str) -> Vec<LinkMatch> {
        Self::regex()
            .captures_iter(text)
            .filter_map(|caps| to_link_match(&caps))
            .collect()
    }
}

/// Link syntax: `[text](url)` where the `[` is not immediately preceded by `!`.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"\[([^\[\]]*)\]\(([^\(\)]*)\)";
    pub const IMAGE_MARKER: u8 = b'!';

    fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid link regex"))
    }

    /// Finds every link in `text`, in order of appearance.
    ///
    /// The regex engine has no look-behind, so matches that directly follow
    /// `!` are filtered out here instead.
    pub fn find_all(text: &str) -> Vec<LinkMatch> {
        let bytes = text.as_bytes();
        Self::regex()
            .captures_iter(text)
            .filter_map(|caps| to_link_match(&caps))
            .filter(|m| m.range.start == 0 || bytes[m.range.start - 1] != Self::IMAGE_MARKER)
            .collect()
    }
}

fn to_link_match(caps: &regex::Captures<'_>) -> Option<LinkMatch> {
    let whole = caps.get(0)?;
    Some(LinkMatch {
        range: whole.range(),
        label: caps.get(1)?.as_str().to_string(),
        url: caps.get(2)?.as_str().to_string(),
    })
}
