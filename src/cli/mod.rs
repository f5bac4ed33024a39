pub mod colors;
pub mod completions;
pub mod dimensions;
pub mod images;
pub mod variables;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::{Config, VariantsConfig, CONFIG_FILENAME};
use crate::error::{Result, SwatchError};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{Processed, VariantSets};
use crate::source::{load_json, split_by_suffix};
use crate::types::{Asset, AssetPair};
use crate::validation::{print_diagnostics, ValidationResult};

/// swatch - design token validation and pairing
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate and pair color styles
    Colors(colors::ColorsArgs),

    /// Validate and pair image components
    Images(images::ImagesArgs),

    /// Resolve, validate and pair colors from a Variables response
    Variables(variables::VariablesArgs),

    /// Validate spacing and corner radius tokens
    Dimensions(dimensions::DimensionsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Record files for each appearance of one token set.
#[derive(Args, Debug)]
pub struct VariantFiles {
    /// Light (or only) records file
    pub light: PathBuf,

    /// Dark records file
    #[arg(long)]
    pub dark: Option<PathBuf>,

    /// Light high-contrast records file
    #[arg(long)]
    pub light_hc: Option<PathBuf>,

    /// Dark high-contrast records file
    #[arg(long)]
    pub dark_hc: Option<PathBuf>,
}

impl VariantFiles {
    /// Load every given file and convert its records, or split the light file
    /// by suffix when `useSingleFile` is set.
    pub fn load<R, A>(
        &self,
        config: &VariantsConfig,
        printer: &Printer,
        convert: impl Fn(Vec<R>) -> Vec<A>,
    ) -> Result<VariantSets<A>>
    where
        R: DeserializeOwned,
        A: Asset,
    {
        let read = |path: &Path| -> Result<Vec<A>> {
            printer.status("Loading", &display_path(path));
            Ok(convert(load_json(path)?))
        };

        let light = read(self.light.as_path())?;

        let sets = if config.use_single_file {
            if self.dark.is_some() || self.light_hc.is_some() || self.dark_hc.is_some() {
                return Err(SwatchError::Validation {
                    message: "variant files given with useSingleFile".to_string(),
                    help: Some("Drop --dark/--light-hc/--dark-hc or disable useSingleFile".to_string()),
                });
            }
            split_by_suffix(light, &config.suffixes())
        } else {
            VariantSets {
                light,
                dark: self.dark.as_deref().map(read).transpose()?,
                light_hc: self.light_hc.as_deref().map(read).transpose()?,
                dark_hc: self.dark_hc.as_deref().map(read).transpose()?,
            }
        };

        Ok(match config.assets_filter() {
            Some(filter) => sets.map_lists(|list| filter.apply(list)),
            None => sets,
        })
    }
}

/// Load the given config, else `swatch.yaml` in the working directory if
/// present, else defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => {
            let default = Path::new(CONFIG_FILENAME);
            if default.is_file() {
                Config::load(default)
            } else {
                debug!("no {} found, using defaults", CONFIG_FILENAME);
                Ok(Config::default())
            }
        }
    }
}

/// Print findings, then write the tokens as JSON to stdout.
///
/// A batch rejected by validation prints every violation and fails with a
/// single summary error.
pub fn emit<T: Serialize>(
    printer: &Printer,
    result: Result<Processed<T>>,
    summary: impl FnOnce(&T) -> String,
) -> Result<()> {
    let processed = match result {
        Ok(processed) => processed,
        Err(SwatchError::Assets { errors }) => {
            print_diagnostics(&ValidationResult::from_assets(&errors, &[]), printer);
            return Err(SwatchError::Validation {
                message: "tokens failed validation".to_string(),
                help: Some("Fix the names reported above and re-export".to_string()),
            });
        }
        Err(e) => return Err(e),
    };

    let report = ValidationResult::from_assets(&[], &processed.warnings);
    if report.has_warnings() {
        print_diagnostics(&report, printer);
    }

    write_json(&processed.tokens)?;
    printer.status("Finished", &summary(&processed.tokens));
    Ok(())
}

/// e.g. "12 colors (3 universal)"
pub fn pair_summary<A: Asset>(pairs: &[AssetPair<A>], singular: &str, pluralized: &str) -> String {
    let universal = pairs.iter().filter(|p| p.is_universal()).count();
    format!("{} ({} universal)", plural(pairs.len(), singular, pluralized), universal)
}

fn write_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout_error = |message: String| SwatchError::Io {
        path: PathBuf::from("<stdout>"),
        message,
    };

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)
        .map_err(|e| stdout_error(format!("Failed to write tokens: {}", e)))?;
    writeln!(stdout).map_err(|e| stdout_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{colors_from_styles, ColorStyleRecord};
    use crate::types::Color;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    const STYLES: &str = r#"[
        {"name": "bg", "color": {"r": 1, "g": 1, "b": 1}},
        {"name": "bg_dark", "color": {"r": 0, "g": 0, "b": 0}},
        {"name": "accent", "color": {"r": 1, "g": 0, "b": 0}}
    ]"#;

    #[test]
    fn test_cli_parses_variant_flags() {
        let cli = Cli::try_parse_from(["swatch", "colors", "light.json", "--dark", "dark.json"]).unwrap();
        match cli.command {
            Commands::Colors(args) => {
                assert_eq!(args.files.light, PathBuf::from("light.json"));
                assert_eq!(args.files.dark, Some(PathBuf::from("dark.json")));
                assert!(args.files.dark_hc.is_none());
            }
            other => panic!("expected colors, got {:?}", other),
        }
    }

    #[test]
    fn test_load_single_file_splits_and_filters() {
        let dir = TempDir::new().unwrap();
        let files = VariantFiles {
            light: write(&dir, "styles.json", STYLES),
            dark: None,
            light_hc: None,
            dark_hc: None,
        };
        let config = VariantsConfig {
            use_single_file: true,
            filter: Some("bg*".to_string()),
            ..VariantsConfig::default()
        };

        let sets: VariantSets<Color> = files
            .load(&config, &Printer::plain(), |r: Vec<ColorStyleRecord>| colors_from_styles(r))
            .unwrap();

        let light: Vec<&str> = sets.light.iter().map(|c| c.name()).collect();
        assert_eq!(light, vec!["bg"]);
        assert_eq!(sets.dark.unwrap()[0].name(), "bg");
    }

    #[test]
    fn test_single_file_rejects_variant_files() {
        let dir = TempDir::new().unwrap();
        let files = VariantFiles {
            light: write(&dir, "styles.json", STYLES),
            dark: Some(write(&dir, "dark.json", "[]")),
            light_hc: None,
            dark_hc: None,
        };
        let config = VariantsConfig {
            use_single_file: true,
            ..VariantsConfig::default()
        };

        let result = files.load(&config, &Printer::plain(), |r: Vec<ColorStyleRecord>| colors_from_styles(r));
        assert!(matches!(result, Err(SwatchError::Validation { .. })));
    }

    #[test]
    fn test_pair_summary_counts_universal_tokens() {
        let color = |name: &str| Color::rgba(name, 0.0, 0.0, 0.0, 1.0);
        let pairs = vec![
            AssetPair::new(color("bg"), Some(color("bg"))),
            AssetPair::new(color("brand"), None),
        ];

        assert_eq!(pair_summary(&pairs, "color", "colors"), "2 colors (1 universal)");
        assert_eq!(pair_summary::<Color>(&[], "color", "colors"), "0 colors (0 universal)");
    }

    #[test]
    fn test_load_config_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "custom.yaml", "nameStyle: snake_case\n");

        let config = load_config(Some(&path)).unwrap();
        assert!(config.name_style.is_some());
    }
}
