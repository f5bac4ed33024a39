//! Batch validation of one variant list.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{Result, SwatchError};
use crate::naming::NameRules;
use crate::types::{Asset, Platform};

use super::AssetError;

/// Index assets by a key, reporting every repeat as a duplicate of the first.
///
/// The key decides identity; payloads are never compared.
pub fn index_by<'a, A: Asset>(
    assets: &'a [A],
    key: impl Fn(&'a A) -> &'a str,
    errors: &mut Vec<AssetError>,
) -> BTreeMap<&'a str, &'a A> {
    let mut index: BTreeMap<&str, &A> = BTreeMap::new();
    for asset in assets {
        let name = key(asset);
        match index.get(name) {
            Some(&first) => errors.push(AssetError::FoundDuplicate {
                name: key(first).to_string(),
            }),
            None => {
                index.insert(name, asset);
            }
        }
    }
    index
}

/// Checks names and uniqueness of a homogeneous asset list.
#[derive(Debug, Clone, Copy)]
pub struct AssetValidator<'a> {
    rules: &'a NameRules,
    platform: Option<Platform>,
}

impl<'a> AssetValidator<'a> {
    pub fn new(rules: &'a NameRules, platform: Option<Platform>) -> Self {
        Self { rules, platform }
    }

    /// Run every rule over the whole list.
    ///
    /// On success the assets come back sorted by name, with nothing dropped.
    /// On failure every violation is returned, not just the first.
    pub fn check<A: Asset>(&self, assets: Vec<A>) -> std::result::Result<Vec<A>, Vec<AssetError>> {
        let mut errors = Vec::new();

        if let Some(pattern) = self.rules.validate_pattern() {
            for asset in &assets {
                if !pattern.is_match(asset.name()) {
                    errors.push(AssetError::BadName {
                        name: asset.name().to_string(),
                        pattern: pattern.as_str().to_string(),
                    });
                }
            }
        }

        index_by(&assets, |a| a.name(), &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        let mut assets = assets;
        assets.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(assets)
    }

    /// Keep only assets available on the target platform.
    pub fn filter_platform<A: Asset>(&self, assets: Vec<A>) -> Vec<A> {
        let before = assets.len();
        let kept: Vec<A> = assets
            .into_iter()
            .filter(|a| a.is_available_on(self.platform))
            .collect();
        if kept.len() != before {
            debug!(
                dropped = before - kept.len(),
                platform = ?self.platform,
                "dropped assets tagged for another platform"
            );
        }
        kept
    }

    /// Check, sort and platform-filter a list, failing with the aggregated errors.
    pub fn validate<A: Asset>(&self, assets: Vec<A>) -> Result<Vec<A>> {
        let checked = self
            .check(assets)
            .map_err(|errors| SwatchError::Assets { errors })?;
        Ok(self.filter_platform(checked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;
    use pretty_assertions::assert_eq;
    use regex::Regex;

    fn color(name: &str) -> Color {
        Color::rgba(name, 0.0, 0.0, 0.0, 1.0)
    }

    fn names<A: Asset>(assets: &[A]) -> Vec<&str> {
        assets.iter().map(|a| a.name()).collect()
    }

    #[test]
    fn test_valid_batch_is_sorted_and_complete() {
        let rules = NameRules::new();
        let validator = AssetValidator::new(&rules, None);

        let result = validator.validate(vec![color("c"), color("a"), color("b")]).unwrap();
        assert_eq!(names(&result), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_reported_once_per_repeat() {
        let rules = NameRules::new();
        let validator = AssetValidator::new(&rules, None);

        let errors = validator
            .check(vec![color("a"), Color::rgba("a", 1.0, 1.0, 1.0, 1.0)])
            .unwrap_err();
        assert_eq!(errors, vec![AssetError::FoundDuplicate { name: "a".into() }]);

        let errors = validator
            .check(vec![color("a"), color("b"), color("a")])
            .unwrap_err();
        assert_eq!(errors, vec![AssetError::FoundDuplicate { name: "a".into() }]);
    }

    #[test]
    fn test_all_violations_accumulate() {
        let rules = NameRules::new().with_validate(Regex::new("^[a-z_]+$").unwrap());
        let validator = AssetValidator::new(&rules, None);

        let errors = validator
            .check(vec![color("Bad"), color("ok"), color("9lives"), color("ok")])
            .unwrap_err();

        assert_eq!(
            errors,
            vec![
                AssetError::BadName {
                    name: "Bad".into(),
                    pattern: "^[a-z_]+$".into()
                },
                AssetError::BadName {
                    name: "9lives".into(),
                    pattern: "^[a-z_]+$".into()
                },
                AssetError::FoundDuplicate { name: "ok".into() },
            ]
        );
    }

    #[test]
    fn test_platform_filter() {
        let rules = NameRules::new();
        let validator = AssetValidator::new(&rules, Some(Platform::Ios));

        let result = validator
            .validate(vec![
                color("shared"),
                color("ios_only").with_platform(Some(Platform::Ios)),
                color("android_only").with_platform(Some(Platform::Android)),
            ])
            .unwrap();
        assert_eq!(names(&result), vec!["ios_only", "shared"]);
    }

    #[test]
    fn test_validate_wraps_errors() {
        let rules = NameRules::new();
        let validator = AssetValidator::new(&rules, None);

        match validator.validate(vec![color("a"), color("a")]) {
            Err(SwatchError::Assets { errors }) => assert_eq!(errors.len(), 1),
            other => panic!("expected aggregated error, got {:?}", other),
        }
    }
}
