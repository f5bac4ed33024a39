//! Capture-group substitution for renaming.

use regex::{Captures, Regex};

/// A pattern plus a replacement template using `$1`..`$9` placeholders.
#[derive(Debug, Clone)]
pub struct Replacement {
    pattern: Regex,
    template: String,
}

impl Replacement {
    pub fn new(pattern: Regex, template: impl Into<String>) -> Self {
        Self {
            pattern,
            template: template.into(),
        }
    }

    /// Replace every non-overlapping match of the pattern in `name` with the
    /// expanded template. Text between matches is kept verbatim.
    pub fn apply(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len());
        let mut last = 0;

        for caps in self.pattern.captures_iter(name) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            out.push_str(&name[last..whole.start()]);
            out.push_str(&expand(&self.template, &caps));
            last = whole.end();
        }

        out.push_str(&name[last..]);
        out
    }
}

/// Substitute `$n` (n in 1..=9) with capture group n. Groups that did not
/// participate expand to nothing; any other `$` is literal.
fn expand(template: &str, caps: &Captures<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' {
            if let Some(group) = chars.peek().and_then(|d| d.to_digit(10)).filter(|d| *d >= 1) {
                chars.next();
                if let Some(m) = caps.get(group as usize) {
                    out.push_str(m.as_str());
                }
                continue;
            }
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacement(pattern: &str, template: &str) -> Replacement {
        Replacement::new(Regex::new(pattern).unwrap(), template)
    }

    #[test]
    fn test_whole_name_replacement() {
        let r = replacement("^(background)$", "color_$1");
        assert_eq!(r.apply("background"), "color_background");
        assert_eq!(r.apply("foreground"), "foreground");
    }

    #[test]
    fn test_multiple_groups_reordered() {
        let r = replacement("^([a-z]+)_([0-9]+)$", "$2_$1");
        assert_eq!(r.apply("gray_100"), "100_gray");
    }

    #[test]
    fn test_multiple_matches_keep_literal_segments() {
        let r = replacement("o(\\d)", "[$1]");
        assert_eq!(r.apply("a o1 b o2 c"), "a [1] b [2] c");
    }

    #[test]
    fn test_missing_group_expands_empty() {
        let r = replacement("^(a)(x)?$", "$1-$2-$9");
        assert_eq!(r.apply("a"), "a--");
    }

    #[test]
    fn test_literal_dollar() {
        let r = replacement("^(a)$", "$$1 $x $0");
        assert_eq!(r.apply("a"), "$a $x $0");
    }
}
