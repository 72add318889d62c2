//! CLI error types rendered as miette diagnostics.

// Fields in these structs are read by miette's Diagnostic derive macro
#![allow(unused)]

use locale_catalog::{I18nConfigError, LocalizationError};
use locale_catalog_embedded::EmbeddedError;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// The project directory has no `i18n.toml`.
#[derive(Debug, Diagnostic, Error)]
#[error("i18n.toml configuration file not found at {}", expected_path.display())]
#[diagnostic(
    code(locale_catalog::config::not_found),
    help(
        "Create an i18n.toml file in the project directory, for example:\n\n  \
          fallback_language = \"en-US\"\n  \
          supported_languages = [\"en-US\", \"zh-CN\"]\n  \
          assets_dir = \"locales\"\n"
    )
)]
pub struct ConfigNotFoundError {
    pub expected_path: PathBuf,
}

/// `i18n.toml` exists but cannot be used.
#[derive(Debug, Diagnostic, Error)]
#[error("invalid i18n.toml configuration")]
#[diagnostic(
    code(locale_catalog::config::invalid),
    help("Every language must be a BCP 47 tag listed in supported_languages")
)]
pub struct InvalidConfigError {
    #[source]
    pub source: I18nConfigError,
}

/// The configured assets directory does not exist.
#[derive(Debug, Diagnostic, Error)]
#[error("assets directory not found: {}", path.display())]
#[diagnostic(
    code(locale_catalog::config::assets_not_found),
    help("Create the assets directory or update assets_dir in i18n.toml")
)]
pub struct AssetsNotFoundError {
    pub path: PathBuf,
}

/// A resource file could not be read or parsed.
#[derive(Debug, Diagnostic, Error)]
#[error("failed to load translation resources")]
#[diagnostic(
    code(locale_catalog::assets::invalid),
    help("Resources live at <locale>.json or <locale>/<namespace>.json and hold string leaves")
)]
pub struct ResourceLoadError {
    #[source]
    pub source: EmbeddedError,
}

/// A locale given on the command line is not a supported language.
#[derive(Debug, Diagnostic, Error)]
#[error("locale '{locale}' is not supported")]
#[diagnostic(
    code(locale_catalog::locale::unsupported),
    help("Supported locales: {available}")
)]
pub struct LocaleNotFoundError {
    pub locale: String,
    pub available: String,
}

/// A `--arg` value is not of the form `name=value`.
#[derive(Debug, Diagnostic, Error)]
#[error("invalid format argument '{value}'")]
#[diagnostic(
    code(locale_catalog::lookup::invalid_argument),
    help("Pass format arguments as name=value, for example --arg count=3")
)]
pub struct InvalidFormatArgError {
    pub value: String,
}

/// `lookup --strict` found no message for the key.
#[derive(Debug, Diagnostic, Error)]
#[error("no message for key '{key}' in '{locale}' or the fallback locale")]
#[diagnostic(code(locale_catalog::lookup::missing))]
pub struct MissingTranslationError {
    pub key: String,
    pub locale: String,
}

/// `switch` could not write the preference file.
#[derive(Debug, Diagnostic, Error)]
#[error("failed to save the language preference to {}", path.display())]
#[diagnostic(
    code(locale_catalog::preferences::not_saved),
    help("Check that the file holds a JSON object and that its directory is writable")
)]
pub struct PreferenceNotSavedError {
    pub path: PathBuf,
}

/// A key defined by the fallback locale is absent from another locale.
#[derive(Debug, Diagnostic, Error)]
#[error("locale '{locale}' is missing key '{key}'")]
#[diagnostic(
    code(locale_catalog::check::missing_key),
    severity(Error),
    help("Add '{key}' to a resource under {locale}, or it will be served from {fallback}")
)]
pub struct MissingKeyError {
    pub key: String,
    pub locale: String,
    pub fallback: String,
}

/// A supported locale has no messages at all.
#[derive(Debug, Diagnostic, Error)]
#[error("supported locale '{locale}' has no resources")]
#[diagnostic(
    code(locale_catalog::check::empty_locale),
    severity(Warning),
    help("Every key of '{locale}' will be served from the fallback locale")
)]
pub struct EmptyLocaleWarning {
    pub locale: String,
}

/// Resources exist for a locale that is not in `supported_languages`.
#[derive(Debug, Diagnostic, Error)]
#[error("resources found for unsupported locale '{locale}'")]
#[diagnostic(
    code(locale_catalog::check::unsupported_locale),
    severity(Warning),
    help("Add '{locale}' to supported_languages or remove its resources")
)]
pub struct UnsupportedLocaleWarning {
    pub locale: String,
}

/// Aggregated result of `check`.
#[derive(Debug, Diagnostic, Error)]
#[error("check found {error_count} error(s) and {warning_count} warning(s)")]
#[diagnostic(code(locale_catalog::check::report))]
pub struct ValidationReport {
    pub error_count: usize,
    pub warning_count: usize,
    #[related]
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Diagnostic, Error)]
pub enum ValidationIssue {
    #[error(transparent)]
    #[diagnostic(transparent)]
    MissingKey(#[from] MissingKeyError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    EmptyLocale(#[from] EmptyLocaleWarning),

    #[error(transparent)]
    #[diagnostic(transparent)]
    UnsupportedLocale(#[from] UnsupportedLocaleWarning),
}

impl ValidationIssue {
    pub fn is_error(&self) -> bool {
        matches!(self, ValidationIssue::MissingKey(_))
    }
}

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigNotFound(#[from] ConfigNotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidConfig(#[from] InvalidConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    AssetsNotFound(#[from] AssetsNotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Resources(#[from] ResourceLoadError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    LocaleNotFound(#[from] LocaleNotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidFormatArg(#[from] InvalidFormatArgError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    MissingTranslation(#[from] MissingTranslationError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    PreferenceNotSaved(#[from] PreferenceNotSavedError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationReport),

    #[error(transparent)]
    #[diagnostic(code(locale_catalog::localization))]
    Localization(#[from] LocalizationError),

    #[error("JSON error: {0}")]
    #[diagnostic(code(locale_catalog::json))]
    Json(#[from] serde_json::Error),
}

impl From<I18nConfigError> for CliError {
    fn from(error: I18nConfigError) -> Self {
        match error {
            I18nConfigError::NotFound(expected_path) => {
                ConfigNotFoundError { expected_path }.into()
            },
            source => InvalidConfigError { source }.into(),
        }
    }
}

impl From<EmbeddedError> for CliError {
    fn from(error: EmbeddedError) -> Self {
        match error {
            EmbeddedError::Config(error) => error.into(),
            EmbeddedError::MissingAssetsDir(path) => AssetsNotFoundError { path }.into(),
            EmbeddedError::Localization(error) => error.into(),
            source => ResourceLoadError { source }.into(),
        }
    }
}
