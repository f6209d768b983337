/// Dash-prefixed list (`- item`).
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn matches(lines: &[&str]) -> bool {
        !lines.is_empty() && lines.iter().all(|line| line.starts_with(Self::MARKER))
    }

    /// The text of each item with its marker stripped.
    pub fn items(raw: &str) -> Vec<&str> {
        raw.lines()
            .map(|line| line.strip_prefix(Self::MARKER).unwrap_or(line))
            .collect()
    }
}

/// Numbered list (`1. first`, `2. second`, ...).
///
/// Numbers must start at 1 and increase by exactly one per line.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    pub fn matches(lines: &[&str]) -> bool {
        !lines.is_empty()
            && lines
                .iter()
                .enumerate()
                .all(|(i, line)| line.starts_with(&Self::marker(i + 1)))
    }

    /// The text of each item with its `N. ` marker stripped.
    pub fn items(raw: &str) -> Vec<&str> {
        raw.lines()
            .map(|line| match line.split_once(Self::SEPARATOR) {
                Some((number, rest)) if is_number(number) => rest,
                _ => line,
            })
            .collect()
    }

    fn marker(number: usize) -> String {
        format!("{number}{}", Self::SEPARATOR)
    }
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn unordered_items() {
        assert!(UnorderedList::matches(&["- a", "- b"]));
        assert_eq!(UnorderedList::items("- a\n- b"), vec!["a", "b"]);
    }

    #[test]
    fn unordered_needs_space_after_dash() {
        assert!(!UnorderedList::matches(&["- a", "-b"]));
    }

    #[rstest]
    #[case(&["1. First item", "2. Second item", "3. Third item"], true)]
    #[case(&["1. Only one item"], true)]
    #[case(&["2. Starts at two"], false)]
    #[case(&["1. a", "3. skips"], false)]
    #[case(&["1. a", "1. repeats"], false)]
    #[case(&["1.no space"], false)]
    fn ordered_numbering(#[case] lines: &[&str], #[case] expected: bool) {
        assert_eq!(OrderedList::matches(lines), expected);
    }

    #[test]
    fn ordered_items_strip_numbers() {
        assert_eq!(
            OrderedList::items("1. one\n2. two\n10. ten"),
            vec!["one", "two", "ten"]
        );
    }

    #[test]
    fn ordered_items_keep_inner_separators() {
        assert_eq!(OrderedList::items("1. a. b"), vec!["a. b"]);
    }
}
