use miette::Diagnostic;
use thiserror::Error;

use crate::validation::AssetError;
use crate::variables::ResolveError;

/// Main error type for swatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum SwatchError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(swatch::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(swatch::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(swatch::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Every rule violation found in one pass over a batch.
    #[error("{} asset validation error(s)", errors.len())]
    #[diagnostic(code(swatch::validate::assets))]
    Assets {
        #[related]
        errors: Vec<AssetError>,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolve(#[from] ResolveError),
}

pub type Result<T> = std::result::Result<T, SwatchError>;
