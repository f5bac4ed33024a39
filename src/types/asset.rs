//! Asset kinds and the capability shared by the validation pipeline.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};

use super::Colour;

/// The target platform an asset can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Platform {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            other => Err(SwatchError::Parse {
                message: format!("Unknown platform: {}", other),
                help: Some("Use 'ios' or 'android'".to_string()),
            }),
        }
    }
}

/// A named design value that can be validated, renamed and paired.
///
/// Identity for duplicate detection and pairing is the name alone; payloads
/// are never compared.
pub trait Asset: Clone {
    /// Current canonical name.
    fn name(&self) -> &str;

    /// Name as it arrived from the source, before any renaming stage.
    fn original_name(&self) -> &str;

    /// Platform restriction, `None` for universal assets.
    fn platform(&self) -> Option<Platform>;

    /// Return a copy carrying a new canonical name. `original_name` is kept.
    fn renamed(self, name: String) -> Self;

    /// Return a copy whose original name is its current name. Source stages
    /// that derive a token's identity (suffix stripping) call this before
    /// validation.
    fn rebased(self) -> Self;

    /// Whether the asset should be emitted for `target` (`None` keeps everything).
    fn is_available_on(&self, target: Option<Platform>) -> bool {
        match (self.platform(), target) {
            (Some(own), Some(target)) => own == target,
            _ => true,
        }
    }
}

macro_rules! impl_asset {
    ($ty:ty) => {
        impl Asset for $ty {
            fn name(&self) -> &str {
                &self.name
            }

            fn original_name(&self) -> &str {
                &self.original_name
            }

            fn platform(&self) -> Option<Platform> {
                self.platform
            }

            fn renamed(self, name: String) -> Self {
                Self { name, ..self }
            }

            fn rebased(self) -> Self {
                Self {
                    original_name: self.name.clone(),
                    ..self
                }
            }
        }
    };
}

/// A colour token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub name: String,
    pub original_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    pub value: Colour,
}

impl Color {
    pub fn new(name: impl Into<String>, value: Colour) -> Self {
        let name = name.into();
        Self {
            original_name: name.clone(),
            name,
            platform: None,
            value,
        }
    }

    /// Convenience constructor from raw components.
    pub fn rgba(name: impl Into<String>, r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(name, Colour::new(r, g, b, a))
    }

    pub fn with_platform(mut self, platform: Option<Platform>) -> Self {
        self.platform = platform;
        self
    }
}

impl_asset!(Color);

/// Exported image file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Svg,
    Pdf,
    Png,
}

/// One rendition of an image at a given scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub scale: f64,
    pub url: String,
}

/// An image token, either a single vector or a set of raster scales.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePack {
    pub name: String,
    pub original_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    pub format: ImageFormat,
    /// Renditions ordered by ascending scale.
    pub images: Vec<Image>,
}

impl ImagePack {
    /// Build a pack from a scale -> URL map. Scale keys are string labels
    /// such as `"1"`, `"2x"` or `"3"`; unparseable labels are skipped.
    pub fn new(
        name: impl Into<String>,
        format: ImageFormat,
        urls: &BTreeMap<String, String>,
    ) -> Self {
        let name = name.into();
        let mut images: Vec<Image> = urls
            .iter()
            .filter_map(|(label, url)| {
                parse_scale(label).map(|scale| Image {
                    scale,
                    url: url.clone(),
                })
            })
            .collect();
        images.sort_by(|a, b| a.scale.total_cmp(&b.scale));

        Self {
            original_name: name.clone(),
            name,
            platform: None,
            format,
            images,
        }
    }

    pub fn with_platform(mut self, platform: Option<Platform>) -> Self {
        self.platform = platform;
        self
    }

    /// Whether the pack is a single, scale-independent rendition.
    pub fn is_single_scale(&self) -> bool {
        self.images.len() == 1
    }
}

impl_asset!(ImagePack);

fn parse_scale(label: &str) -> Option<f64> {
    let label = label.trim();
    let label = label.strip_suffix('x').unwrap_or(label);
    label.parse::<f64>().ok().filter(|s| *s > 0.0)
}

/// A spacing token in points.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacing {
    pub name: String,
    pub original_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    pub value: f64,
}

impl Spacing {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        let name = name.into();
        Self {
            original_name: name.clone(),
            name,
            platform: None,
            value,
        }
    }
}

impl_asset!(Spacing);

/// A corner radius token in points.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerRadius {
    pub name: String,
    pub original_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    pub value: f64,
}

impl CornerRadius {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        let name = name.into();
        Self {
            original_name: name.clone(),
            name,
            platform: None,
            value,
        }
    }
}

impl_asset!(CornerRadius);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renamed_keeps_original_name() {
        let color = Color::rgba("background", 1.0, 1.0, 1.0, 1.0).renamed("bg".to_string());
        assert_eq!(color.name(), "bg");
        assert_eq!(color.original_name(), "background");
    }

    #[test]
    fn test_availability() {
        let universal = Color::rgba("a", 0.0, 0.0, 0.0, 1.0);
        let ios = universal.clone().with_platform(Some(Platform::Ios));

        assert!(universal.is_available_on(Some(Platform::Android)));
        assert!(ios.is_available_on(Some(Platform::Ios)));
        assert!(!ios.is_available_on(Some(Platform::Android)));
        assert!(ios.is_available_on(None));
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("iOS".parse::<Platform>().unwrap(), Platform::Ios);
        assert_eq!("android".parse::<Platform>().unwrap(), Platform::Android);
        assert!("web".parse::<Platform>().is_err());
    }

    #[test]
    fn test_image_pack_orders_scales() {
        let mut urls = BTreeMap::new();
        urls.insert("3x".to_string(), "https://cdn/3".to_string());
        urls.insert("1".to_string(), "https://cdn/1".to_string());
        urls.insert("2".to_string(), "https://cdn/2".to_string());
        urls.insert("bogus".to_string(), "https://cdn/x".to_string());

        let pack = ImagePack::new("arrow", ImageFormat::Png, &urls);
        let scales: Vec<f64> = pack.images.iter().map(|i| i.scale).collect();
        assert_eq!(scales, vec![1.0, 2.0, 3.0]);
        assert!(!pack.is_single_scale());
    }
}
