//! `i18n.toml` configuration for locale-catalog projects.
//!
//! ```toml
//! fallback_language = "en-US"
//! supported_languages = ["en-US", "zh-CN"]
//! assets_dir = "locales"
//! ```

use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

/// Name of the configuration file looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "i18n.toml";

/// Query parameter consulted when no `query_parameter` is configured.
pub const DEFAULT_QUERY_PARAMETER: &str = "locale";

/// Preference record key used when no `preference_key` is configured.
pub const DEFAULT_PREFERENCE_KEY: &str = "app_options";

#[derive(Debug, Error)]
pub enum I18nConfigError {
    /// Configuration file not found.
    #[error("i18n.toml configuration file not found at {0}")]
    NotFound(PathBuf),
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A configured language is not a valid identifier.
    #[error("Invalid language identifier '{name}' in {field}")]
    InvalidLanguageIdentifier {
        /// The configuration field holding the identifier.
        field: &'static str,
        /// The invalid identifier.
        name: String,
        /// The parsing error produced by `unic-langid`.
        #[source]
        source: LanguageIdentifierError,
    },
    /// A configured language uses an unsupported subtag combination.
    #[error("Language identifier '{name}' is not supported: {reason}")]
    UnsupportedLanguageIdentifier {
        /// The rejected identifier.
        name: String,
        /// Explanation of why it is not supported.
        reason: String,
    },
    /// `supported_languages` is empty.
    #[error("supported_languages must list at least one language")]
    NoSupportedLanguages,
    /// The fallback or default language is missing from `supported_languages`.
    #[error("{field} '{name}' is not listed in supported_languages")]
    NotInSupportedLanguages {
        /// The configuration field holding the identifier.
        field: &'static str,
        /// The identifier.
        name: String,
    },
}

/// The configuration for a locale-catalog project.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct I18nConfig {
    /// Locale consulted when a key is missing from the active locale (e.g., "en-US").
    pub fallback_language: String,
    /// Locale chosen when no signal resolves. Defaults to `fallback_language`.
    #[serde(default)]
    pub default_language: Option<String>,
    /// Ordered set of locales that may become active.
    pub supported_languages: Vec<String>,
    /// Directory holding the JSON resource fragments.
    /// Expected structure: `{assets_dir}/{locale}.json` or `{assets_dir}/{locale}/{namespace}.json`.
    pub assets_dir: PathBuf,
    /// URL query parameter carrying a locale override.
    #[serde(default = "default_query_parameter")]
    pub query_parameter: String,
    /// Top-level preference record key whose `appearance.language` field holds the user's choice.
    #[serde(default = "default_preference_key")]
    pub preference_key: String,
}

fn default_query_parameter() -> String {
    DEFAULT_QUERY_PARAMETER.to_string()
}

fn default_preference_key() -> String {
    DEFAULT_PREFERENCE_KEY.to_string()
}

impl I18nConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, I18nConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(I18nConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: I18nConfig = toml::from_str(&content)?;

        Ok(config)
    }

    /// Reads `i18n.toml` from a project directory.
    pub fn from_dir(dir: &Path) -> Result<Self, I18nConfigError> {
        Self::read_from_path(dir.join(CONFIG_FILE_NAME))
    }

    /// Returns the assets directory joined onto `base_dir`.
    ///
    /// Absolute `assets_dir` values are returned unchanged.
    pub fn assets_dir_from_base(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.assets_dir)
    }

    /// Returns the configured fallback language as a `LanguageIdentifier`.
    pub fn fallback_language_identifier(&self) -> Result<LanguageIdentifier, I18nConfigError> {
        parse_language("fallback_language", &self.fallback_language)
    }

    /// Returns the default language, falling back to `fallback_language` when unset.
    pub fn default_language_identifier(&self) -> Result<LanguageIdentifier, I18nConfigError> {
        match &self.default_language {
            Some(name) => parse_language("default_language", name),
            None => self.fallback_language_identifier(),
        }
    }

    /// Returns the supported languages in configuration order, without duplicates.
    pub fn supported_language_identifiers(
        &self,
    ) -> Result<Vec<LanguageIdentifier>, I18nConfigError> {
        let mut languages: Vec<LanguageIdentifier> = Vec::new();
        for name in &self.supported_languages {
            let lang = parse_language("supported_languages", name)?;
            if !languages.contains(&lang) {
                languages.push(lang);
            }
        }
        Ok(languages)
    }

    /// Checks that every language parses and that fallback/default are supported.
    pub fn validate(&self) -> Result<(), I18nConfigError> {
        let supported = self.supported_language_identifiers()?;
        if supported.is_empty() {
            return Err(I18nConfigError::NoSupportedLanguages);
        }

        let fallback = self.fallback_language_identifier()?;
        if !supported.contains(&fallback) {
            return Err(I18nConfigError::NotInSupportedLanguages {
                field: "fallback_language",
                name: self.fallback_language.clone(),
            });
        }

        let default = self.default_language_identifier()?;
        if !supported.contains(&default) {
            return Err(I18nConfigError::NotInSupportedLanguages {
                field: "default_language",
                name: default.to_string(),
            });
        }

        Ok(())
    }
}

fn parse_language(field: &'static str, name: &str) -> Result<LanguageIdentifier, I18nConfigError> {
    let lang = name.parse::<LanguageIdentifier>().map_err(|source| {
        I18nConfigError::InvalidLanguageIdentifier {
            field,
            name: name.to_string(),
            source,
        }
    })?;

    if lang.variants().next().is_some() {
        return Err(I18nConfigError::UnsupportedLanguageIdentifier {
            name: name.to_string(),
            reason: "variants are not supported".to_string(),
        });
    }

    Ok(lang)
}
