//! Asset validation.
//!
//! [`AssetValidator`] checks one variant list for bad names and duplicates.
//! Findings are typed ([`AssetError`], [`AssetWarning`]) so callers can act
//! on them, and convert into a [`ValidationResult`] report for printing.

mod checks;
mod errors;
mod warning;

pub use checks::{index_by, AssetValidator};
pub use errors::{AssetError, AssetWarning};
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::{plural, Printer};

/// Print a diagnostic report to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(d.severity.label(), d.severity == Severity::Error);
        eprintln!("  {}[{}]: {}", label, printer.dim(&d.code), d.message);
        if let Some(help) = &d.help {
            eprintln!("    {} {}", printer.dim("help:"), help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if result.has_errors() {
        printer.error(
            "Failed",
            &format!(
                "{}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
        );
    } else if result.has_warnings() {
        printer.warning("Passed", &plural(warnings, "warning", "warnings"));
    }
}
