//! Core domain types for swatch.
//!
//! - `Colour` - RGBA colour values
//! - `Asset` - the capability every token kind implements
//! - `Color`, `ImagePack`, `Spacing`, `CornerRadius` - concrete token kinds
//! - `AssetPair` - a token's appearance variants

mod asset;
mod colour;
mod pair;

pub use asset::{Asset, Color, CornerRadius, Image, ImageFormat, ImagePack, Platform, Spacing};
pub use colour::Colour;
pub use pair::AssetPair;
