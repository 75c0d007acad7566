//! Implementation of the `minuta lint` command.

use super::read_template;
use crate::cli::LintArgs;
use minuta::error::{MinutaError, Result};
use minuta::template::{ValidationReport, ValidationSummary, validate};

/// Execute the `minuta lint` command.
///
/// # Exit Codes
///
/// - 0: No syntax problems
/// - 1: Template could not be read
/// - 2: Syntax problems found
pub fn cmd_lint(args: LintArgs) -> Result<()> {
    let source = read_template(&args.template)?;
    let report = validate(&source);

    if args.json {
        let summary = ValidationSummary::from(&report);
        let json = serde_json::to_string_pretty(&summary).map_err(|e| {
            MinutaError::UserError(format!("failed to serialize lint report: {}", e))
        })?;
        println!("{}", json);
    } else {
        print_report(&args, &report);
    }

    check_report(&report)
}

fn print_report(args: &LintArgs, report: &ValidationReport) {
    if report.is_valid {
        println!("{}: ok", args.template.display());
        return;
    }
    println!("{}:", args.template.display());
    for message in report.messages() {
        println!("  - {}", message);
    }
}

fn check_report(report: &ValidationReport) -> Result<()> {
    if report.is_valid {
        return Ok(());
    }
    Err(MinutaError::ValidationError(format!(
        "{} problem(s) found in template",
        report.errors.len()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::write_file;
    use minuta::exit_codes;
    use tempfile::TempDir;

    #[test]
    fn test_lint_valid_template() {
        let dir = TempDir::new().unwrap();
        let args = LintArgs {
            template: write_file(&dir, "ok.hbs", "{{#if a}}{{b}}{{#else}}c{{/if}}"),
            json: false,
        };
        assert!(cmd_lint(args).is_ok());
    }

    #[test]
    fn test_lint_invalid_template_exit_code() {
        let dir = TempDir::new().unwrap();
        let args = LintArgs {
            template: write_file(&dir, "bad.hbs", "{{#if a}}sem fechamento"),
            json: true,
        };
        let err = cmd_lint(args).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
        assert!(err.to_string().contains("problem(s) found"));
    }

    #[test]
    fn test_lint_missing_template() {
        let dir = TempDir::new().unwrap();
        let args = LintArgs {
            template: dir.path().join("missing.hbs"),
            json: false,
        };
        let err = cmd_lint(args).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }
}
