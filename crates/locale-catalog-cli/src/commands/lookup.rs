//! Lookup command: translates one key the way a running host would.

use crate::commands::{Project, ProjectArgs};
use crate::error::{CliError, InvalidFormatArgError, MissingTranslationError};
use crate::ui;
use clap::Parser;
use locale_catalog::{FormatArgs, TranslationService};

/// Arguments for the lookup command.
#[derive(Debug, Parser)]
pub struct LookupArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Dotted message key, e.g. `common.cancel`.
    pub key: String,

    /// Locale to translate into (defaults to the configured default language).
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Named format argument, as `name=value`. May be repeated.
    #[arg(short, long = "arg", value_name = "NAME=VALUE")]
    pub args: Vec<String>,

    /// Fail when neither the locale nor the fallback defines the key.
    #[arg(long)]
    pub strict: bool,
}

/// Run the lookup command.
pub fn run_lookup(args: LookupArgs) -> Result<(), CliError> {
    let project = Project::load(&args.project)?;

    let locale = match &args.locale {
        Some(tag) => project.supported_locale(tag)?,
        None => project.catalog.config.default_language_identifier()?,
    };

    let format_args = parse_format_args(&args.args)?;

    let service = TranslationService::builder()
        .catalog(project.catalog.catalog)
        .supported(project.supported)
        .fallback(project.fallback)
        .initial(locale.clone())
        .build()?;

    let translation = service.translate_detailed(&args.key, format_args.as_ref());
    ui::print_translation(&translation, &locale);

    if args.strict && translation.is_missing() {
        return Err(MissingTranslationError {
            key: args.key,
            locale: locale.to_string(),
        }
        .into());
    }
    Ok(())
}

fn parse_format_args(raw: &[String]) -> Result<Option<FormatArgs>, CliError> {
    if raw.is_empty() {
        return Ok(None);
    }

    let mut format_args = FormatArgs::new();
    for value in raw {
        let Some((name, arg)) = value.split_once('=') else {
            return Err(InvalidFormatArgError {
                value: value.clone(),
            }
            .into());
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(InvalidFormatArgError {
                value: value.clone(),
            }
            .into());
        }
        format_args.insert(name, arg);
    }
    Ok(Some(format_args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_args_are_split_on_the_first_equals_sign() {
        let parsed = parse_format_args(&["count=3".to_string(), "expr=a=b".to_string()])
            .unwrap()
            .unwrap();

        assert_eq!(parsed.get("count"), Some("3"));
        assert_eq!(parsed.get("expr"), Some("a=b"));
    }

    #[test]
    fn no_format_args_means_no_interpolation() {
        assert!(parse_format_args(&[]).unwrap().is_none());
    }

    #[test]
    fn format_args_without_a_name_are_rejected() {
        assert!(matches!(
            parse_format_args(&["=3".to_string()]),
            Err(CliError::InvalidFormatArg(_))
        ));
        assert!(matches!(
            parse_format_args(&["count".to_string()]),
            Err(CliError::InvalidFormatArg(_))
        ));
    }
}
