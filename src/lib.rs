//! swatch - design token validation and pairing
//!
//! A library for turning decoded design-tool records (color styles, image
//! components, variables, dimensions) into validated, renamed token sets with
//! light, dark and high-contrast variants paired by name.

pub mod cli;
pub mod config;
pub mod error;
pub mod naming;
pub mod output;
pub mod pairing;
pub mod pipeline;
pub mod source;
pub mod types;
pub mod validation;
pub mod variables;

pub use config::{Config, VariablesConfig, VariantsConfig};
pub use error::{Result, SwatchError};
pub use naming::{collapse_path, NameRules, NameStyle, Replacement};
pub use pairing::AssetPairer;
pub use pipeline::{Pipeline, Processed, VariantSets};
pub use source::{split_by_suffix, AssetsFilter, DescriptionTag, Suffixes};
pub use types::{
    Asset, AssetPair, Color, Colour, CornerRadius, Image, ImageFormat, ImagePack, Platform,
    Spacing,
};
pub use validation::{
    AssetError, AssetValidator, AssetWarning, Diagnostic, Severity, ValidationResult,
};
pub use variables::{ModeNames, ResolveError, VariableColors, VariableResolver, VariablesMeta};
