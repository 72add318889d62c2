//! Locale resolution and JSON message catalogs.
//!
//! Build a [`TranslationService`] from a [`MessageCatalog`], then either keep
//! it as an explicit value or install it once with [`set_context`] and use the
//! [`t`] / [`t_with`] helpers.

pub use locale_catalog_core::{
    ActiveLocale, CatalogBuilder, FormatArgs, JsonFilePreferenceStore, LocaleObserver,
    LocaleResolver, LocaleSignals, LocaleSource, LocalizationError, MemoryPreferenceStore,
    MessageCatalog, MessageNode, MessageOrigin, MessageTree, ParsedResource, PreferenceError,
    PreferenceStore, Resolution, ResourceEntry, ResourceError, SupportedLocales, Translation,
    TranslationService, preferred_language,
};

pub use locale_catalog_toml::{I18nConfig, I18nConfigError};

pub use unic_langid::LanguageIdentifier;

use std::sync::{Arc, OnceLock};
use thiserror::Error;

static CONTEXT: OnceLock<Arc<TranslationService>> = OnceLock::new();

#[derive(Debug, Error)]
#[error("Translation context already set")]
pub struct ContextAlreadySet;

#[derive(Debug, Error)]
pub enum SetLocaleError {
    #[error("Translation context not initialized. Call set_context() first.")]
    ContextNotSet,
    #[error(transparent)]
    Localization(#[from] LocalizationError),
}

/// Installs the process-wide translation service.
///
/// Only the first call succeeds; the service cannot be replaced afterwards.
pub fn set_context(service: Arc<TranslationService>) -> Result<(), ContextAlreadySet> {
    CONTEXT.set(service).map_err(|_| ContextAlreadySet)
}

/// Returns the installed translation service, if any.
pub fn context() -> Option<Arc<TranslationService>> {
    CONTEXT.get().cloned()
}

/// Translates `key` with the installed service.
///
/// If the key is not found, or no service is installed, a warning is logged
/// and the key is returned.
pub fn t(key: &str) -> String {
    t_with(key, None)
}

/// Translates `key` with the installed service, substituting `args`.
pub fn t_with(key: &str, args: Option<&FormatArgs>) -> String {
    let Some(service) = CONTEXT.get() else {
        tracing::warn!("Translation for '{}' requested before the context was set.", key);
        return key.to_string();
    };

    let translation = service.translate_detailed(key, args);
    if translation.is_missing() {
        tracing::warn!("Translation for '{}' not found.", key);
    }
    translation.text
}

/// The installed service's active locale.
pub fn current_locale() -> Option<LanguageIdentifier> {
    CONTEXT.get().map(|service| service.current_locale())
}

/// Switches the installed service's active locale.
///
/// Fails with [`SetLocaleError::ContextNotSet`] if no service is installed.
pub fn set_locale(lang: &LanguageIdentifier) -> Result<(), SetLocaleError> {
    let Some(service) = CONTEXT.get() else {
        tracing::error!("Translation context not initialized. Call set_context() first.");
        return Err(SetLocaleError::ContextNotSet);
    };
    Ok(service.set_locale(lang)?)
}
