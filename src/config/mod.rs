//! Project configuration (swatch.yaml) parsing.
//!
//! Keys are camelCase to match the names used by the design-token exporter
//! configuration this file is usually written next to.

use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};
use crate::naming::{NameRules, NameStyle, Replacement};
use crate::source::{AssetsFilter, Suffixes};
use crate::types::Platform;

/// The default configuration file name.
pub const CONFIG_FILENAME: &str = "swatch.yaml";

/// Project configuration loaded from swatch.yaml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Target platform; assets tagged for another platform are dropped.
    pub platform: Option<Platform>,

    /// Names must match this pattern.
    pub name_validate_regexp: Option<String>,

    /// Replacement template with `$1`..`$9` placeholders.
    pub name_replace_regexp: Option<String>,

    /// Pattern whose matches the template replaces. Defaults to
    /// `name_validate_regexp`.
    pub name_match_regexp: Option<String>,

    pub name_style: Option<NameStyle>,

    pub colors: VariantsConfig,

    pub images: VariantsConfig,

    pub variables: Option<VariablesConfig>,
}

/// How variant lists are obtained for style-based sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariantsConfig {
    /// Split one source into variants by name suffix.
    pub use_single_file: bool,
    pub dark_mode_suffix: String,
    #[serde(rename = "lightHCModeSuffix")]
    pub light_hc_mode_suffix: String,
    #[serde(rename = "darkHCModeSuffix")]
    pub dark_hc_mode_suffix: String,
    /// Comma-separated name filter, `*` wildcards allowed.
    pub filter: Option<String>,
}

impl Default for VariantsConfig {
    fn default() -> Self {
        Self {
            use_single_file: false,
            dark_mode_suffix: "_dark".to_string(),
            light_hc_mode_suffix: "_lightHC".to_string(),
            dark_hc_mode_suffix: "_darkHC".to_string(),
            filter: None,
        }
    }
}

impl VariantsConfig {
    pub fn suffixes(&self) -> Suffixes {
        Suffixes {
            dark: self.dark_mode_suffix.clone(),
            light_hc: self.light_hc_mode_suffix.clone(),
            dark_hc: self.dark_hc_mode_suffix.clone(),
        }
    }

    pub fn assets_filter(&self) -> Option<AssetsFilter> {
        self.filter.as_deref().map(AssetsFilter::parse)
    }
}

/// Settings for resolving colors from the design tool's Variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariablesConfig {
    pub tokens_collection_name: String,
    pub light_mode_name: String,
    #[serde(default)]
    pub dark_mode_name: Option<String>,
    #[serde(default, rename = "lightHCModeName")]
    pub light_hc_mode_name: Option<String>,
    #[serde(default, rename = "darkHCModeName")]
    pub dark_hc_mode_name: Option<String>,
    /// Mode used to read aliased variables in other collections.
    #[serde(default)]
    pub primitives_mode_name: Option<String>,
    #[serde(default)]
    pub filter: Option<String>,
}

impl VariablesConfig {
    pub fn assets_filter(&self) -> Option<AssetsFilter> {
        self.filter.as_deref().map(AssetsFilter::parse)
    }
}

fn compile(field: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| SwatchError::Parse {
        message: format!("Invalid {}: {}", field, e),
        help: Some(format!("Check the regular expression '{}'", pattern)),
    })
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| SwatchError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Compile the naming settings.
    pub fn name_rules(&self) -> Result<NameRules> {
        let mut rules = NameRules::new();

        let validate = self
            .name_validate_regexp
            .as_deref()
            .map(|p| compile("nameValidateRegexp", p))
            .transpose()?;

        if let Some(template) = &self.name_replace_regexp {
            let pattern = match (&self.name_match_regexp, &validate) {
                (Some(p), _) => compile("nameMatchRegexp", p)?,
                (None, Some(v)) => v.clone(),
                (None, None) => {
                    return Err(SwatchError::Parse {
                        message: "nameReplaceRegexp needs a pattern to match".to_string(),
                        help: Some("Set nameValidateRegexp or nameMatchRegexp".to_string()),
                    })
                }
            };
            rules = rules.with_replace(Replacement::new(pattern, template.clone()));
        }

        if let Some(validate) = validate {
            rules = rules.with_validate(validate);
        }
        if let Some(style) = self.name_style {
            rules = rules.with_style(style);
        }

        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert!(config.platform.is_none());
        assert!(!config.colors.use_single_file);
        assert_eq!(config.colors.dark_mode_suffix, "_dark");
        assert!(config.variables.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
platform: ios
nameValidateRegexp: '^([a-z_]+)$'
nameReplaceRegexp: 'color_$1'
nameStyle: camelCase
colors:
  useSingleFile: true
  darkModeSuffix: '-night'
  lightHCModeSuffix: '-contrast'
  filter: 'bg*, text'
variables:
  tokensCollectionName: Tokens
  lightModeName: Light
  darkModeName: Dark
  primitivesModeName: Value
"#;
        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.platform, Some(Platform::Ios));
        assert_eq!(config.name_style, Some(NameStyle::CamelCase));
        assert!(config.colors.use_single_file);
        assert_eq!(config.colors.dark_mode_suffix, "-night");
        assert_eq!(config.colors.light_hc_mode_suffix, "-contrast");
        assert_eq!(config.colors.dark_hc_mode_suffix, "_darkHC");
        assert!(config.colors.assets_filter().is_some());
        assert!(config.images.assets_filter().is_none());

        let variables = config.variables.unwrap();
        assert_eq!(variables.tokens_collection_name, "Tokens");
        assert_eq!(variables.dark_mode_name.as_deref(), Some("Dark"));
        assert_eq!(variables.primitives_mode_name.as_deref(), Some("Value"));
        assert!(variables.light_hc_mode_name.is_none());
    }

    #[test]
    fn test_name_rules_replace_defaults_to_validate_pattern() {
        let config = Config::parse(
            "nameValidateRegexp: '^([a-z_]+)$'\nnameReplaceRegexp: 'color_$1'\nnameStyle: camelCase\n",
        )
        .unwrap();
        let rules = config.name_rules().unwrap();

        assert!(rules.is_valid("text_primary"));
        assert_eq!(rules.rename("text_primary"), "colorTextPrimary");
    }

    #[test]
    fn test_name_rules_with_match_pattern() {
        let config = Config::parse(
            "nameValidateRegexp: '^[a-z_]+$'\nnameMatchRegexp: '^(background)$'\nnameReplaceRegexp: 'color_$1'\n",
        )
        .unwrap();
        let rules = config.name_rules().unwrap();

        assert_eq!(rules.rename("background"), "color_background");
        assert_eq!(rules.rename("surface"), "surface");
    }

    #[test]
    fn test_invalid_regex() {
        let config = Config::parse("nameValidateRegexp: '([a-z'\n").unwrap();
        assert!(matches!(config.name_rules(), Err(SwatchError::Parse { .. })));
    }

    #[test]
    fn test_replace_without_pattern() {
        let config = Config::parse("nameReplaceRegexp: 'x_$1'\n").unwrap();
        assert!(config.name_rules().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "platform: android\nnameStyle: snake_case\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.platform, Some(Platform::Android));
        assert_eq!(config.name_style, Some(NameStyle::SnakeCase));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = Config::load(&dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(SwatchError::Io { .. })));
    }
}
