//! Diagnostic report built from validation outcomes.

use std::fmt;

use super::{AssetError, AssetWarning};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A finding flattened for printing.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// miette code, e.g. "swatch::validate::duplicate".
    pub code: String,
    pub message: String,
    pub help: Option<String>,
}

impl Diagnostic {
    fn from_miette(severity: Severity, d: &dyn miette::Diagnostic) -> Self {
        Self {
            severity,
            code: d
                .code()
                .map_or_else(|| "swatch::validate".to_string(), |c| c.to_string()),
            message: d.to_string(),
            help: d.help().map(|h| h.to_string()),
        }
    }
}

impl From<&AssetError> for Diagnostic {
    fn from(error: &AssetError) -> Self {
        Self::from_miette(Severity::Error, error)
    }
}

impl From<&AssetWarning> for Diagnostic {
    fn from(warning: &AssetWarning) -> Self {
        Self::from_miette(Severity::Warning, warning)
    }
}

/// Report for one run. Errors are listed before warnings.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_assets(errors: &[AssetError], warnings: &[AssetWarning]) -> Self {
        let mut report = Self::new();
        for error in errors {
            report.push(error.into());
        }
        for warning in warnings {
            report.push(warning.into());
        }
        report
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.errors.iter().chain(&self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duplicate(name: &str) -> AssetError {
        AssetError::FoundDuplicate {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_new_report_is_empty() {
        let report = ValidationResult::new();
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
        assert_eq!(report.iter().count(), 0);
    }

    #[test]
    fn test_from_assets() {
        let errors = vec![duplicate("a"), AssetError::CountMismatch { light: 1, dark: 2 }];
        let warnings = vec![AssetWarning::LightAssetsNotFoundInDarkPalette {
            names: vec!["b".to_string()],
        }];

        let report = ValidationResult::from_assets(&errors, &warnings);
        assert_eq!(report.error_count(), 2);
        assert_eq!(report.warning_count(), 1);

        let first = report.iter().next().unwrap();
        assert_eq!(first.code, "swatch::validate::duplicate");
        assert_eq!(first.message, "Found duplicate asset 'a'");
        assert!(first.help.is_some());
    }

    #[test]
    fn test_errors_print_before_warnings() {
        let mut report = ValidationResult::new();
        report.push((&AssetWarning::LightAssetsNotFoundInDarkPalette { names: vec![] }).into());
        report.push((&duplicate("x")).into());

        let severities: Vec<Severity> = report.iter().map(|d| d.severity).collect();
        assert_eq!(severities, vec![Severity::Error, Severity::Warning]);
        assert!(report.has_errors());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_warnings_only() {
        let report = ValidationResult::from_assets(
            &[],
            &[AssetWarning::LightAssetsNotFoundInDarkPalette { names: vec![] }],
        );

        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
