//! Appearance pairing.
//!
//! Combines the light and dark lists of a token set into [`AssetPair`]s and
//! enforces the cross-set rules:
//!
//! - the dark list may not be longer than the light list
//! - every dark name must exist in the light list
//! - a light asset's platform tag must match its dark counterpart's
//!
//! Light-only names are allowed and reported as a warning; those tokens are
//! universal. High-contrast variants are attached to already-built pairs by
//! name and are not subject to the rules above.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{Result, SwatchError};
use crate::naming::NameRules;
use crate::pipeline::Processed;
use crate::types::{Asset, AssetPair, Platform};
use crate::validation::{index_by, AssetError, AssetWarning};

/// Builds paired tokens from validated variant lists.
#[derive(Debug, Clone, Copy)]
pub struct AssetPairer<'a> {
    rules: &'a NameRules,
    platform: Option<Platform>,
}

impl<'a> AssetPairer<'a> {
    pub fn new(rules: &'a NameRules, platform: Option<Platform>) -> Self {
        Self { rules, platform }
    }

    fn rename<A: Asset>(&self, asset: &A) -> A {
        asset.clone().renamed(self.rules.rename(asset.original_name()))
    }

    fn available<A: Asset>(&self, asset: &A) -> bool {
        asset.is_available_on(self.platform)
    }

    /// Pair a light list with an optional dark list.
    ///
    /// Both lists must already have passed [`crate::validation::AssetValidator::check`];
    /// platform filtering happens here, after the cross-set rules have seen
    /// every asset.
    pub fn pair<A: Asset>(
        &self,
        light: &[A],
        dark: Option<&[A]>,
    ) -> Result<Processed<Vec<AssetPair<A>>>> {
        let Some(dark) = dark else {
            let pairs = light
                .iter()
                .filter(|a| self.available(*a))
                .map(|a| AssetPair::new(self.rename(a), None))
                .collect();
            return Ok(Processed::new(pairs));
        };

        let mut errors = Vec::new();
        let light_set = index_by(light, |a| a.original_name(), &mut errors);
        let dark_set = index_by(dark, |a| a.original_name(), &mut errors);

        if light.len() < dark.len() {
            errors.push(AssetError::CountMismatch {
                light: light.len(),
                dark: dark.len(),
            });
        }

        let dark_only: Vec<String> = dark_set
            .keys()
            .filter(|name| !light_set.contains_key(*name))
            .map(|name| name.to_string())
            .collect();
        if !dark_only.is_empty() {
            errors.push(AssetError::DarkAssetsNotFoundInLightPalette { names: dark_only });
        }

        for (name, light_asset) in &light_set {
            let Some(tag) = light_asset.platform() else {
                continue;
            };
            if let Some(dark_asset) = dark_set.get(name) {
                if dark_asset.platform() != Some(tag) {
                    errors.push(AssetError::DescriptionMismatch {
                        name: name.to_string(),
                        light: Some(tag),
                        dark: dark_asset.platform(),
                    });
                }
            }
        }

        if !errors.is_empty() {
            return Err(SwatchError::Assets { errors });
        }

        let mut warnings = Vec::new();
        let light_only: Vec<String> = light_set
            .keys()
            .filter(|name| !dark_set.contains_key(*name))
            .map(|name| name.to_string())
            .collect();
        if !light_only.is_empty() {
            warnings.push(AssetWarning::LightAssetsNotFoundInDarkPalette { names: light_only });
        }

        let pairs: Vec<AssetPair<A>> = light_set
            .iter()
            .filter(|(_, a)| self.available(**a))
            .map(|(name, light_asset)| {
                let dark_asset = dark_set
                    .get(name)
                    .filter(|d| self.available(**d))
                    .map(|d| self.rename(*d));
                AssetPair::new(self.rename(*light_asset), dark_asset)
            })
            .collect();

        debug!(pairs = pairs.len(), warnings = warnings.len(), "paired light and dark assets");
        Ok(Processed { tokens: pairs, warnings })
    }

    /// Attach high-contrast variants to pairs by original name.
    ///
    /// High-contrast names with no light pair are dropped.
    pub fn attach_high_contrast<A: Asset>(
        &self,
        pairs: Vec<AssetPair<A>>,
        light_hc: Option<&[A]>,
        dark_hc: Option<&[A]>,
    ) -> Vec<AssetPair<A>> {
        if light_hc.is_none() && dark_hc.is_none() {
            return pairs;
        }

        let mut light_hc = self.hc_index(light_hc);
        let mut dark_hc = self.hc_index(dark_hc);

        let pairs: Vec<AssetPair<A>> = pairs
            .into_iter()
            .map(|pair| {
                let key = pair.light.original_name().to_string();
                let lhc = light_hc.remove(key.as_str()).map(|a| self.rename(a));
                let dhc = dark_hc.remove(key.as_str()).map(|a| self.rename(a));
                pair.with_high_contrast(lhc, dhc)
            })
            .collect();

        let orphans: Vec<&str> = light_hc.keys().chain(dark_hc.keys()).copied().collect();
        if !orphans.is_empty() {
            warn!(names = ?orphans, "high-contrast assets without a light counterpart were dropped");
        }

        pairs
    }

    fn hc_index<'b, A: Asset>(&self, assets: Option<&'b [A]>) -> BTreeMap<&'b str, &'b A> {
        assets
            .unwrap_or_default()
            .iter()
            .filter(|a| self.available(*a))
            .map(|a| (a.original_name(), a))
            .collect()
    }
}
