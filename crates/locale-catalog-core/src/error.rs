use locale_catalog_toml::I18nConfigError;
use std::path::PathBuf;
use thiserror::Error;
use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("Language '{0}' is not supported")]
    LanguageNotSupported(LanguageIdentifier),
    #[error("'{tag}' is not a valid language tag")]
    InvalidLanguageTag {
        tag: String,
        #[source]
        source: LanguageIdentifierError,
    },
    #[error(transparent)]
    Config(#[from] I18nConfigError),
}

/// A resource fragment rejected at the boundary, before it reaches the builder.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Resource path '{path}' is malformed: {reason}")]
    MalformedPath { path: String, reason: &'static str },
    #[error("Resource path '{path}' names an invalid locale '{locale}'")]
    InvalidLocale {
        path: String,
        locale: String,
        #[source]
        source: LanguageIdentifierError,
    },
    #[error("Resource path '{path}' names an invalid namespace '{namespace}'")]
    InvalidNamespace { path: String, namespace: String },
    #[error("Resource '{path}' does not hold a message tree: {source}")]
    InvalidData {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Failed to access preference file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Preference file '{path}' is not a JSON object")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[source] serde_json::Error),
}
