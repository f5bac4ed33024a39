//! Variables command: resolve colors from a Variables response.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, SwatchError};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{Pipeline, VariantSets};
use crate::source::load_json;
use crate::variables::{ModeNames, VariableResolver, VariablesResponse};

use super::{emit, load_config, pair_summary};

/// Resolve, validate and pair colors from a Variables response
#[derive(Args, Debug)]
pub struct VariablesArgs {
    /// Local variables response (JSON)
    pub input: PathBuf,

    /// Configuration file (defaults to ./swatch.yaml)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

pub fn run(args: VariablesArgs) -> Result<()> {
    let printer = Printer::new();
    let config = load_config(args.config.as_deref())?;
    let settings = config.variables.as_ref().ok_or_else(|| SwatchError::Validation {
        message: "no variables section in config".to_string(),
        help: Some("Set variables.tokensCollectionName and variables.lightModeName".to_string()),
    })?;
    let pipeline = Pipeline::from_config(&config)?;

    printer.status("Loading", &display_path(&args.input));
    let response: VariablesResponse = load_json(&args.input)?;
    if response.error {
        return Err(SwatchError::Parse {
            message: format!("{} is an error response", display_path(&args.input)),
            help: response.status.map(|status| format!("The API answered with status {}", status)),
        });
    }

    let colors = VariableResolver::new(&response.meta)
        .with_primitives_mode(settings.primitives_mode_name.as_deref())
        .resolve_colors(&settings.tokens_collection_name, &ModeNames::from(settings))?;
    printer.info(
        "Resolved",
        &format!(
            "{} from '{}'",
            plural(colors.light.len(), "variable", "variables"),
            settings.tokens_collection_name
        ),
    );

    let mut sets = VariantSets::from(colors);
    if let Some(filter) = settings.assets_filter() {
        sets = sets.map_lists(|list| filter.apply(list));
    }

    emit(&printer, pipeline.paired(sets), |pairs| {
        pair_summary(pairs, "color", "colors")
    })
}

