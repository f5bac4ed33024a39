//! Rule violations found while validating and pairing asset batches.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::Platform;

fn tag(platform: &Option<Platform>) -> &'static str {
    platform.map_or("universal", |p| p.name())
}

/// A hard validation failure. A batch reports every one it finds.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum AssetError {
    #[error("Bad asset name '{name}': does not match /{pattern}/")]
    #[diagnostic(
        code(swatch::validate::bad_name),
        help("Rename the style in the design file or relax nameValidateRegexp")
    )]
    BadName { name: String, pattern: String },

    #[error("Found duplicate asset '{name}'")]
    #[diagnostic(
        code(swatch::validate::duplicate),
        help("Two styles flatten to the same name; rename one of them")
    )]
    FoundDuplicate { name: String },

    #[error("Dark palette has {dark} asset(s) but light palette has only {light}")]
    #[diagnostic(
        code(swatch::validate::count_mismatch),
        help("Every dark asset needs a light counterpart")
    )]
    CountMismatch { light: usize, dark: usize },

    #[error("Dark assets not found in light palette: {}", .names.join(", "))]
    #[diagnostic(
        code(swatch::validate::dark_not_in_light),
        help("Dark variants cannot introduce new tokens; add them to the light palette")
    )]
    DarkAssetsNotFoundInLightPalette { names: Vec<String> },

    #[error(
        "Asset '{name}' is {} in the light palette but {} in the dark palette",
        tag(.light),
        tag(.dark)
    )]
    #[diagnostic(
        code(swatch::validate::description_mismatch),
        help("Use the same platform tag in both descriptions")
    )]
    DescriptionMismatch {
        name: String,
        light: Option<Platform>,
        dark: Option<Platform>,
    },
}

/// A non-fatal finding returned next to a successful result.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum AssetWarning {
    #[error("Light assets not found in dark palette (treated as universal): {}", .names.join(", "))]
    #[diagnostic(
        code(swatch::validate::light_not_in_dark),
        severity(Warning),
        help("Add dark variants if these tokens should change with appearance")
    )]
    LightAssetsNotFoundInDarkPalette { names: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AssetError::DarkAssetsNotFoundInLightPalette {
            names: vec!["b".to_string(), "c".to_string()],
        };
        assert_eq!(err.to_string(), "Dark assets not found in light palette: b, c");

        let err = AssetError::DescriptionMismatch {
            name: "accent".to_string(),
            light: Some(Platform::Ios),
            dark: None,
        };
        assert_eq!(
            err.to_string(),
            "Asset 'accent' is ios in the light palette but universal in the dark palette"
        );
    }

    #[test]
    fn test_codes() {
        let err = AssetError::FoundDuplicate {
            name: "a".to_string(),
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("swatch::validate::duplicate"));
    }
}
