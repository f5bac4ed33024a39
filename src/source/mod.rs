//! Turning decoded design-tool records into per-variant asset lists.

mod filter;
mod records;
mod variants;

pub use filter::AssetsFilter;
pub use records::{
    colors_from_styles, dimensions_from_records, images_from_records, load_json,
    ColorStyleRecord, DescriptionTag, DimensionKind, DimensionRecord, ImageRecord,
};
pub use variants::{split_by_suffix, Suffixes};
