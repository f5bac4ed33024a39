//! Validation, renaming and pairing for a batch of assets.
//!
//! ```ignore
//! use swatch::{Pipeline, VariantSets};
//!
//! let pipeline = Pipeline::from_config(&config)?;
//! let out = pipeline.paired(VariantSets::new(light).with_dark(dark))?;
//! for warning in &out.warnings {
//!     eprintln!("{}", warning);
//! }
//! ```

use tracing::debug;

use crate::config::Config;
use crate::error::{Result, SwatchError};
use crate::naming::NameRules;
use crate::pairing::AssetPairer;
use crate::types::{Asset, AssetPair, Platform};
use crate::validation::{AssetValidator, AssetWarning};

/// A successful result plus any non-fatal findings.
#[derive(Debug, Clone, PartialEq)]
pub struct Processed<T> {
    pub tokens: T,
    pub warnings: Vec<AssetWarning>,
}

impl<T> Processed<T> {
    pub fn new(tokens: T) -> Self {
        Self {
            tokens,
            warnings: Vec::new(),
        }
    }
}

/// Per-appearance lists of the same token set.
#[derive(Debug, Clone)]
pub struct VariantSets<A> {
    pub light: Vec<A>,
    pub dark: Option<Vec<A>>,
    pub light_hc: Option<Vec<A>>,
    pub dark_hc: Option<Vec<A>>,
}

impl<A> VariantSets<A> {
    pub fn new(light: Vec<A>) -> Self {
        Self {
            light,
            dark: None,
            light_hc: None,
            dark_hc: None,
        }
    }

    pub fn with_dark(mut self, dark: Vec<A>) -> Self {
        self.dark = Some(dark);
        self
    }

    pub fn with_light_hc(mut self, light_hc: Vec<A>) -> Self {
        self.light_hc = Some(light_hc);
        self
    }

    pub fn with_dark_hc(mut self, dark_hc: Vec<A>) -> Self {
        self.dark_hc = Some(dark_hc);
        self
    }

    /// Apply `f` to every list that is present.
    pub fn map_lists(self, mut f: impl FnMut(Vec<A>) -> Vec<A>) -> Self {
        Self {
            light: f(self.light),
            dark: self.dark.map(&mut f),
            light_hc: self.light_hc.map(&mut f),
            dark_hc: self.dark_hc.map(&mut f),
        }
    }
}

/// Runs validator, renamer and pairer with one naming configuration.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    rules: NameRules,
    platform: Option<Platform>,
}

impl Pipeline {
    pub fn new(rules: NameRules, platform: Option<Platform>) -> Self {
        Self { rules, platform }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.name_rules()?, config.platform))
    }

    fn validator(&self) -> AssetValidator<'_> {
        AssetValidator::new(&self.rules, self.platform)
    }

    fn pairer(&self) -> AssetPairer<'_> {
        AssetPairer::new(&self.rules, self.platform)
    }

    /// Validate and rename a single-palette token list.
    pub fn flat<A: Asset>(&self, assets: Vec<A>) -> Result<Processed<Vec<A>>> {
        let validated = self.validator().validate(assets)?;
        let renamed: Vec<A> = validated
            .into_iter()
            .map(|a| {
                let name = self.rules.rename(a.original_name());
                a.renamed(name)
            })
            .collect();
        debug!(tokens = renamed.len(), "validated flat token list");
        Ok(Processed::new(renamed))
    }

    /// Validate every variant list, then pair and rename.
    ///
    /// All lists are checked before anything fails, so one run reports the
    /// violations of every list together.
    pub fn paired<A: Asset>(&self, sets: VariantSets<A>) -> Result<Processed<Vec<AssetPair<A>>>> {
        let validator = self.validator();
        let mut errors = Vec::new();
        let mut check = |assets: Vec<A>| match validator.check(assets) {
            Ok(checked) => checked,
            Err(found) => {
                errors.extend(found);
                Vec::new()
            }
        };

        let light = check(sets.light);
        let dark = sets.dark.map(&mut check);
        let light_hc = sets.light_hc.map(&mut check);
        let dark_hc = sets.dark_hc.map(&mut check);

        if !errors.is_empty() {
            return Err(SwatchError::Assets { errors });
        }

        let pairer = self.pairer();
        let out = pairer.pair(&light, dark.as_deref())?;
        let tokens = pairer.attach_high_contrast(out.tokens, light_hc.as_deref(), dark_hc.as_deref());

        Ok(Processed {
            tokens,
            warnings: out.warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{NameStyle, Replacement};
    use crate::types::Color;
    use crate::validation::AssetError;
    use pretty_assertions::assert_eq;
    use regex::Regex;

    fn color(name: &str) -> Color {
        Color::rgba(name, 0.0, 0.0, 0.0, 1.0)
    }

    #[test]
    fn test_flat_renames() {
        let rules = NameRules::new()
            .with_validate(Regex::new("^[a-z_]+$").unwrap())
            .with_replace(Replacement::new(Regex::new("^(background)$").unwrap(), "color_$1"));
        let pipeline = Pipeline::new(rules, None);

        let out = pipeline.flat(vec![color("background")]).unwrap();
        assert_eq!(out.tokens[0].name, "color_background");
        assert_eq!(out.tokens[0].original_name, "background");
    }

    #[test]
    fn test_flat_keeps_every_distinct_valid_asset() {
        let rules = NameRules::new().with_style(NameStyle::SnakeCase);
        let pipeline = Pipeline::new(rules, None);

        let input: Vec<Color> = ["zeta", "alphaOne", "beta2"].iter().map(|n| color(n)).collect();
        let out = pipeline.flat(input).unwrap();

        let names: Vec<&str> = out.tokens.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["alpha_one", "beta_2", "zeta"]);
    }

    #[test]
    fn test_paired_aggregates_errors_across_lists() {
        let rules = NameRules::new().with_validate(Regex::new("^[a-z]+$").unwrap());
        let pipeline = Pipeline::new(rules, None);

        let sets = VariantSets::new(vec![color("a"), color("a")])
            .with_dark(vec![color("Bad")])
            .with_dark_hc(vec![color("b"), color("b")]);

        match pipeline.paired(sets) {
            Err(SwatchError::Assets { errors }) => assert_eq!(
                errors,
                vec![
                    AssetError::FoundDuplicate { name: "a".into() },
                    AssetError::BadName {
                        name: "Bad".into(),
                        pattern: "^[a-z]+$".into()
                    },
                    AssetError::FoundDuplicate { name: "b".into() },
                ]
            ),
            other => panic!("expected asset errors, got {:?}", other),
        }
    }

    #[test]
    fn test_paired_with_high_contrast() {
        let pipeline = Pipeline::default();

        let sets = VariantSets::new(vec![color("bg"), color("fg")])
            .with_dark(vec![color("bg")])
            .with_light_hc(vec![color("fg")]);

        let out = pipeline.paired(sets).unwrap();
        assert_eq!(out.tokens.len(), 2);
        assert_eq!(out.warnings.len(), 1);

        let fg = &out.tokens[1];
        assert_eq!(fg.name(), "fg");
        assert!(fg.dark.is_none());
        assert!(fg.light_hc.is_some());
    }
}
