//! Name normalization.
//!
//! Four independent stages, applied to a raw token name in this order:
//!
//! 1. [`collapse_path`] turns a design-tool path (`Colors/Primary`) into a flat name.
//! 2. [`NameRules::is_valid`] checks the flat name against the validate regex.
//! 3. [`Replacement`] rewrites the name using capture groups.
//! 4. [`NameStyle`] converts to `camelCase` or `snake_case`.
//!
//! Stages 3 and 4 together form [`NameRules::rename`], a pure function of the
//! input name, so two variants that share a source name always end up with the
//! same output name.

mod case;
mod replace;

pub use case::{to_camel_case, to_snake_case, tokenize, NameStyle};
pub use replace::Replacement;

use regex::Regex;

/// Flatten a slash-separated path.
///
/// `"x/x"` collapses to `"x"`; any other path has its slashes replaced by `_`.
pub fn collapse_path(name: &str) -> String {
    let segments: Vec<&str> = name.split('/').collect();
    if segments.len() == 2 && segments[0] == segments[1] {
        segments[0].to_string()
    } else {
        name.replace('/', "_")
    }
}

/// Compiled naming configuration.
#[derive(Debug, Clone, Default)]
pub struct NameRules {
    validate: Option<Regex>,
    replace: Option<Replacement>,
    style: Option<NameStyle>,
}

impl NameRules {
    /// Rules that accept every name and rename nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validate(mut self, validate: Regex) -> Self {
        self.validate = Some(validate);
        self
    }

    pub fn with_replace(mut self, replace: Replacement) -> Self {
        self.replace = Some(replace);
        self
    }

    pub fn with_style(mut self, style: NameStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn validate_pattern(&self) -> Option<&Regex> {
        self.validate.as_ref()
    }

    /// Whether `name` passes the validate regex (always true without one).
    pub fn is_valid(&self, name: &str) -> bool {
        self.validate.as_ref().map_or(true, |re| re.is_match(name))
    }

    /// Apply the replace and case-style stages.
    pub fn rename(&self, name: &str) -> String {
        let replaced = match &self.replace {
            Some(replace) => replace.apply(name),
            None => name.to_string(),
        };

        match self.style {
            Some(style) => style.apply(&replaced),
            None => replaced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_identical_segments() {
        assert_eq!(collapse_path("primary/primary"), "primary");
    }

    #[test]
    fn test_collapse_replaces_slashes() {
        assert_eq!(collapse_path("text/primary"), "text_primary");
        assert_eq!(collapse_path("a/a/a"), "a_a_a");
        assert_eq!(collapse_path("plain"), "plain");
    }

    #[test]
    fn test_default_rules_are_identity() {
        let rules = NameRules::new();
        assert!(rules.is_valid("Anything Goes/1"));
        assert_eq!(rules.rename("Anything Goes"), "Anything Goes");
    }

    #[test]
    fn test_rename_replace_then_style() {
        let rules = NameRules::new()
            .with_validate(Regex::new("^[a-z_]+$").unwrap())
            .with_replace(Replacement::new(
                Regex::new("^(background)$").unwrap(),
                "color_$1",
            ))
            .with_style(NameStyle::CamelCase);

        assert!(rules.is_valid("background"));
        assert!(!rules.is_valid("Background"));
        assert_eq!(rules.rename("background"), "colorBackground");
    }
}
