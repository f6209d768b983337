pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// A block is fenced when its first and last lines are both exactly a
    /// fence and there are at least two lines.
    pub fn matches(lines: &[&str]) -> bool {
        match lines {
            [first, .., last] => *first == Self::BACKTICKS && *last == Self::BACKTICKS,
            _ => false,
        }
    }

    /// The lines between the fences, joined by newlines.
    ///
    /// Returns an empty string when the fences enclose nothing.
    pub fn interior(raw: &str) -> String {
        let lines: Vec<&str> = raw.lines().collect();
        match lines.as_slice() {
            [_, inner @ .., _] => inner.join("\n"),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_fenced_block() {
        assert!(CodeFence::matches(&["```", "code", "```"]));
    }

    #[test]
    fn empty_fence_pair_still_matches() {
        assert!(CodeFence::matches(&["```", "```"]));
    }

    #[test]
    fn single_fence_line_is_not_code() {
        assert!(!CodeFence::matches(&["```"]));
    }

    #[test]
    fn info_string_is_not_a_fence() {
        assert!(!CodeFence::matches(&["```rust", "fn main() {}", "```"]));
    }

    #[test]
    fn unclosed_fence_is_not_code() {
        assert!(!CodeFence::matches(&["```", "code"]));
    }

    #[test]
    fn interior_excludes_fences() {
        assert_eq!(
            CodeFence::interior("```\ndef func():\nreturn True\n```"),
            "def func():\nreturn True"
        );
        assert_eq!(CodeFence::interior("```\n```"), "");
    }
}
