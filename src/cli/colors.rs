//! Colors command: validate and pair color styles.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::pipeline::Pipeline;
use crate::source::colors_from_styles;

use super::{emit, load_config, pair_summary, VariantFiles};

/// Validate and pair color styles
#[derive(Args, Debug)]
pub struct ColorsArgs {
    #[command(flatten)]
    pub files: VariantFiles,

    /// Configuration file (defaults to ./swatch.yaml)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

pub fn run(args: ColorsArgs) -> Result<()> {
    let printer = Printer::new();
    let config = load_config(args.config.as_deref())?;
    let pipeline = Pipeline::from_config(&config)?;

    let sets = args.files.load(&config.colors, &printer, colors_from_styles)?;

    emit(&printer, pipeline.paired(sets), |pairs| {
        pair_summary(pairs, "color", "colors")
    })
}
