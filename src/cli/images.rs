//! Images command: validate and pair image components.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::pipeline::Pipeline;
use crate::source::images_from_records;

use super::{emit, load_config, pair_summary, VariantFiles};

/// Validate and pair image components
#[derive(Args, Debug)]
pub struct ImagesArgs {
    #[command(flatten)]
    pub files: VariantFiles,

    /// Configuration file (defaults to ./swatch.yaml)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

pub fn run(args: ImagesArgs) -> Result<()> {
    let printer = Printer::new();
    let config = load_config(args.config.as_deref())?;
    let pipeline = Pipeline::from_config(&config)?;

    let sets = args.files.load(&config.images, &printer, images_from_records)?;

    emit(&printer, pipeline.paired(sets), |pairs| {
        pair_summary(pairs, "image", "images")
    })
}
