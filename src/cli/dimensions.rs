//! Dimensions command: validate spacing and corner radius tokens.
//!
//! Dimensions have a single palette, so they are validated and renamed but
//! never paired.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::error::{Result, SwatchError};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{Pipeline, Processed};
use crate::source::{dimensions_from_records, load_json, DimensionRecord};
use crate::types::{CornerRadius, Spacing};

use super::{emit, load_config};

/// Validate spacing and corner radius tokens
#[derive(Args, Debug)]
pub struct DimensionsArgs {
    /// Dimension records file (JSON)
    pub input: PathBuf,

    /// Configuration file (defaults to ./swatch.yaml)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionTokens {
    pub spacing: Vec<Spacing>,
    pub corner_radius: Vec<CornerRadius>,
}

pub fn run(args: DimensionsArgs) -> Result<()> {
    let printer = Printer::new();
    let config = load_config(args.config.as_deref())?;
    let pipeline = Pipeline::from_config(&config)?;

    printer.status("Loading", &display_path(&args.input));
    let records: Vec<DimensionRecord> = load_json(&args.input)?;
    let (spacing, corner_radius) = dimensions_from_records(records);

    let result = validate(&pipeline, spacing, corner_radius);
    emit(&printer, result, |tokens| {
        format!(
            "{}, {}",
            plural(tokens.spacing.len(), "spacing", "spacings"),
            plural(tokens.corner_radius.len(), "corner radius", "corner radii")
        )
    })
}

/// Each kind is its own namespace, so duplicates are only checked within a
/// kind. Errors from both kinds are reported together.
fn validate(
    pipeline: &Pipeline,
    spacing: Vec<Spacing>,
    corner_radius: Vec<CornerRadius>,
) -> Result<Processed<DimensionTokens>> {
    let (spacing, corner_radius) = match (pipeline.flat(spacing), pipeline.flat(corner_radius)) {
        (Ok(spacing), Ok(corner_radius)) => (spacing.tokens, corner_radius.tokens),
        (Err(SwatchError::Assets { mut errors }), Err(SwatchError::Assets { errors: more })) => {
            errors.extend(more);
            return Err(SwatchError::Assets { errors });
        }
        (Err(e), _) | (_, Err(e)) => return Err(e),
    };

    Ok(Processed::new(DimensionTokens {
        spacing,
        corner_radius,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::NameRules;
    use regex::Regex;

    #[test]
    fn test_validate_reports_both_kinds() {
        let rules = NameRules::new().with_validate(Regex::new("^[a-z]+$").unwrap());
        let pipeline = Pipeline::new(rules, None);

        let result = validate(
            &pipeline,
            vec![Spacing::new("Small", 4.0)],
            vec![CornerRadius::new("Round", 8.0)],
        );

        match result {
            Err(SwatchError::Assets { errors }) => assert_eq!(errors.len(), 2),
            other => panic!("expected asset errors, got {:?}", other.map(|p| p.tokens)),
        }
    }

    #[test]
    fn test_same_name_across_kinds_is_allowed() {
        let pipeline = Pipeline::default();

        let tokens = validate(
            &pipeline,
            vec![Spacing::new("small", 4.0)],
            vec![CornerRadius::new("small", 2.0)],
        )
        .unwrap()
        .tokens;

        assert_eq!(tokens.spacing.len(), 1);
        assert_eq!(tokens.corner_radius.len(), 1);
    }
}
