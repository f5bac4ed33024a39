//! Appearance-paired tokens.

use serde::Serialize;

use super::Asset;

/// All appearance variants of one logical token.
///
/// `light` is always present. A missing `dark` marks a universal token that
/// uses the same value in every appearance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPair<A> {
    pub light: A,
    pub dark: Option<A>,
    #[serde(rename = "lightHC")]
    pub light_hc: Option<A>,
    #[serde(rename = "darkHC")]
    pub dark_hc: Option<A>,
}

impl<A: Asset> AssetPair<A> {
    pub fn new(light: A, dark: Option<A>) -> Self {
        Self {
            light,
            dark,
            light_hc: None,
            dark_hc: None,
        }
    }

    /// Attach high-contrast variants.
    pub fn with_high_contrast(self, light_hc: Option<A>, dark_hc: Option<A>) -> Self {
        Self {
            light_hc,
            dark_hc,
            ..self
        }
    }

    /// Canonical name of the token (the light variant's name).
    pub fn name(&self) -> &str {
        self.light.name()
    }

    /// Whether the token has no appearance-specific value.
    pub fn is_universal(&self) -> bool {
        self.dark.is_none() && self.light_hc.is_none() && self.dark_hc.is_none()
    }
}
