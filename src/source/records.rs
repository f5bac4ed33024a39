//! Decoded design-tool records and their mapping onto assets.
//!
//! The records are produced by the API loader; this module only flattens
//! names, reads platform tags from descriptions and builds typed assets.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, SwatchError};
use crate::naming::collapse_path;
use crate::types::{Color, Colour, CornerRadius, ImageFormat, ImagePack, Platform, Spacing};

/// What a style description says about where the asset belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionTag {
    /// Available on every platform.
    Universal,
    Platform(Platform),
    /// Marked `none`; not exported at all.
    Excluded,
}

impl DescriptionTag {
    /// Read the tag from a free-form description. Matching is on whole words,
    /// case-insensitive; `none` wins over platform names.
    pub fn parse(description: &str) -> Self {
        let lower = description.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        if words.contains(&"none") {
            DescriptionTag::Excluded
        } else if words.contains(&"ios") {
            DescriptionTag::Platform(Platform::Ios)
        } else if words.contains(&"android") {
            DescriptionTag::Platform(Platform::Android)
        } else {
            DescriptionTag::Universal
        }
    }

    /// The platform restriction, or `None` when excluded.
    pub fn platform(self) -> Option<Option<Platform>> {
        match self {
            DescriptionTag::Universal => Some(None),
            DescriptionTag::Platform(p) => Some(Some(p)),
            DescriptionTag::Excluded => None,
        }
    }
}

/// Platform restriction for a record, or `None` if it should be skipped.
fn included(kind: &str, name: &str, description: &str) -> Option<Option<Platform>> {
    let platform = DescriptionTag::parse(description).platform();
    if platform.is_none() {
        warn!(kind, name, "skipped: description marks it as excluded");
    }
    platform
}

/// A color style with its first solid fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorStyleRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub color: Colour,
    /// Fill opacity, multiplied into the colour's alpha.
    #[serde(default)]
    pub opacity: Option<f64>,
}

/// An exported image component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub format: ImageFormat,
    /// Scale label (`"1"`, `"2"`, `"3x"`) to download URL.
    pub urls: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DimensionKind {
    Spacing,
    CornerRadius,
}

/// A numeric component metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: DimensionKind,
    pub value: f64,
}

pub fn colors_from_styles(records: Vec<ColorStyleRecord>) -> Vec<Color> {
    records
        .into_iter()
        .filter_map(|record| {
            let platform = included("color", &record.name, &record.description)?;
            let value = match record.opacity {
                Some(opacity) => record.color.with_opacity(opacity),
                None => record.color,
            };
            Some(Color::new(collapse_path(&record.name), value).with_platform(platform))
        })
        .collect()
}

pub fn images_from_records(records: Vec<ImageRecord>) -> Vec<ImagePack> {
    records
        .into_iter()
        .filter_map(|record| {
            let platform = included("image", &record.name, &record.description)?;
            let pack = ImagePack::new(collapse_path(&record.name), record.format, &record.urls)
                .with_platform(platform);
            if pack.images.is_empty() {
                warn!(name = %record.name, "skipped: image has no usable renditions");
                return None;
            }
            Some(pack)
        })
        .collect()
}

/// Split dimension records into spacing and corner-radius tokens.
pub fn dimensions_from_records(records: Vec<DimensionRecord>) -> (Vec<Spacing>, Vec<CornerRadius>) {
    let mut spacing = Vec::new();
    let mut radii = Vec::new();

    for record in records {
        let Some(platform) = included("dimension", &record.name, &record.description) else {
            continue;
        };
        let name = collapse_path(&record.name);
        match record.kind {
            DimensionKind::Spacing => {
                let mut token = Spacing::new(name, record.value);
                token.platform = platform;
                spacing.push(token);
            }
            DimensionKind::CornerRadius => {
                let mut token = CornerRadius::new(name, record.value);
                token.platform = platform;
                radii.push(token);
            }
        }
    }

    (spacing, radii)
}

/// Read a JSON document from disk.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read records: {}", e),
    })?;

    serde_json::from_str(&content).map_err(|e| SwatchError::Parse {
        message: format!("Invalid records in {}: {}", path.display(), e),
        help: Some("Records must be the decoded JSON produced by the exporter".to_string()),
    })
}
