//! Check command: compares every locale against the fallback locale.
//!
//! - Keys defined by the fallback but absent from a locale are errors.
//! - Supported locales without any resource are warnings.
//! - Resources for locales outside `supported_languages` are warnings.

use crate::commands::{Project, ProjectArgs};
use crate::error::{
    CliError, EmptyLocaleWarning, MissingKeyError, UnsupportedLocaleWarning, ValidationIssue,
    ValidationReport,
};
use crate::ui;
use clap::Parser;
use locale_catalog::LanguageIdentifier;

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Only check these locales. May be repeated.
    #[arg(short, long = "locale", value_name = "LOCALE")]
    pub locales: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<(), CliError> {
    let project = Project::load(&args.project)?;

    let locales: Vec<LanguageIdentifier> = if args.locales.is_empty() {
        project
            .supported
            .iter()
            .filter(|lang| **lang != project.fallback)
            .cloned()
            .collect()
    } else {
        args.locales
            .iter()
            .map(|tag| project.supported_locale(tag))
            .collect::<Result<_, _>>()?
    };

    ui::print_check_header(&locales, &project.fallback);

    let issues = collect_issues(&project, &locales);
    let error_count = issues.iter().filter(|issue| issue.is_error()).count();
    let warning_count = issues.len() - error_count;

    if error_count > 0 {
        return Err(ValidationReport {
            error_count,
            warning_count,
            issues,
        }
        .into());
    }

    if issues.is_empty() {
        ui::print_check_success();
    } else {
        for issue in issues {
            eprintln!("{:?}", miette::Report::new(issue));
        }
        ui::print_check_warnings(warning_count);
    }
    Ok(())
}

fn collect_issues(project: &Project, locales: &[LanguageIdentifier]) -> Vec<ValidationIssue> {
    let messages = project.messages();
    let fallback = project.fallback.to_string();
    let mut issues = Vec::new();

    for locale in messages.locales() {
        if !project.supported.contains(locale) {
            issues.push(
                UnsupportedLocaleWarning {
                    locale: locale.to_string(),
                }
                .into(),
            );
        }
    }

    for locale in locales {
        if !messages.contains_locale(locale) {
            issues.push(
                EmptyLocaleWarning {
                    locale: locale.to_string(),
                }
                .into(),
            );
            continue;
        }

        for key in messages.missing_keys(locale, &project.fallback) {
            issues.push(
                MissingKeyError {
                    key,
                    locale: locale.to_string(),
                    fallback: fallback.clone(),
                }
                .into(),
            );
        }
    }

    issues
}
