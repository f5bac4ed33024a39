//! Colors from the design tool's Variables feature.
//!
//! A collection defines modes and owns variables; each variable holds one
//! value per mode, either a literal or an alias to another variable that may
//! live in a different collection. [`VariableResolver`] follows aliases down
//! to literals and produces one color list per requested appearance mode.

mod resolver;
mod types;

pub use resolver::VariableResolver;
pub use types::{
    Mode, Variable, VariableAlias, VariableCollection, VariableValue, VariablesMeta,
    VariablesResponse,
};

use miette::Diagnostic;
use thiserror::Error;

use crate::config::VariablesConfig;
use crate::pipeline::VariantSets;
use crate::types::Color;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("Variable collection '{name}' not found")]
    #[diagnostic(
        code(swatch::resolve::collection),
        help("Check tokensCollectionName against the collections in the file")
    )]
    CollectionNotFound { name: String },

    #[error("Mode '{mode}' not found in collection '{collection}'")]
    #[diagnostic(code(swatch::resolve::mode), help("Check the configured mode names"))]
    ModeNotFound { collection: String, mode: String },

    #[error("Variable alias cycle: {}", .chain.join(" -> "))]
    #[diagnostic(
        code(swatch::resolve::cycle),
        help("An alias chain leads back to itself; point one of the variables at a literal value")
    )]
    AliasCycle { chain: Vec<String> },
}

/// Mode names to resolve, one per appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeNames {
    pub light: String,
    pub dark: Option<String>,
    pub light_hc: Option<String>,
    pub dark_hc: Option<String>,
}

impl ModeNames {
    pub fn light(name: impl Into<String>) -> Self {
        Self {
            light: name.into(),
            dark: None,
            light_hc: None,
            dark_hc: None,
        }
    }
}

impl From<&VariablesConfig> for ModeNames {
    fn from(config: &VariablesConfig) -> Self {
        Self {
            light: config.light_mode_name.clone(),
            dark: config.dark_mode_name.clone(),
            light_hc: config.light_hc_mode_name.clone(),
            dark_hc: config.dark_hc_mode_name.clone(),
        }
    }
}

/// Resolved colors, one list per mode. Lists for modes that were not
/// requested are `None`; variables with no value in a mode are absent from
/// that mode's list.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableColors {
    pub light: Vec<Color>,
    pub dark: Option<Vec<Color>>,
    pub light_hc: Option<Vec<Color>>,
    pub dark_hc: Option<Vec<Color>>,
}

impl From<VariableColors> for VariantSets<Color> {
    fn from(colors: VariableColors) -> Self {
        VariantSets {
            light: colors.light,
            dark: colors.dark,
            light_hc: colors.light_hc,
            dark_hc: colors.dark_hc,
        }
    }
}
