//! Resource discovery for locale-catalog.
//!
//! Translation fragments are JSON files laid out under an assets root as
//! `{locale}.json` or `{locale}/{namespace}.json`. They can be embedded into
//! the binary with [`rust_embed`] or read from a directory at runtime.
//!
//! ```ignore
//! #[derive(rust_embed::RustEmbed)]
//! #[folder = "locales/"]
//! struct Locales;
//!
//! let catalog = locale_catalog_embedded::embedded_catalog::<Locales>()?;
//! ```

mod directory;
mod error;

pub use directory::{ProjectCatalog, load_directory, load_project};
pub use error::EmbeddedError;

use locale_catalog::set_context;
use locale_catalog_core::{
    LocaleSignals, MessageCatalog, PreferenceStore, ResourceEntry, TranslationService,
};
use locale_catalog_toml::I18nConfig;
use rust_embed::RustEmbed;
use std::sync::Arc;

pub use rust_embed;

const RESOURCE_EXTENSION: &str = ".json";

/// Returns the logical resource path for an asset file, or `None` for non-JSON files.
pub(crate) fn logical_path(file_path: &str) -> Option<&str> {
    file_path
        .strip_suffix(RESOURCE_EXTENSION)
        .filter(|path| !path.is_empty())
}

/// Collects every JSON fragment of an embedded asset bundle, sorted by path.
pub fn embedded_resources<T: RustEmbed>() -> Result<Vec<ResourceEntry>, EmbeddedError> {
    let mut file_paths: Vec<String> = T::iter().map(|path| path.into_owned()).collect();
    file_paths.sort();

    let mut entries = Vec::new();
    for file_path in file_paths {
        let Some(path) = logical_path(&file_path) else {
            tracing::debug!("Skipping non-resource asset '{}'", file_path);
            continue;
        };

        let Some(file) = T::get(&file_path) else {
            continue;
        };
        let content = String::from_utf8(file.data.into_owned()).map_err(|source| {
            EmbeddedError::InvalidUtf8 {
                path: file_path.clone(),
                source,
            }
        })?;

        entries.push(ResourceEntry::from_json(path, &content)?);
    }

    tracing::debug!("Discovered {} embedded resources", entries.len());
    Ok(entries)
}

/// Builds a catalog from an embedded asset bundle.
pub fn embedded_catalog<T: RustEmbed>() -> Result<MessageCatalog, EmbeddedError> {
    Ok(MessageCatalog::from_entries(embedded_resources::<T>()?)?)
}

/// Builds a service from an embedded bundle and installs it as the process-wide context.
///
/// Calling this more than once logs a warning and returns the service that
/// is already installed.
pub fn init<T: RustEmbed>(
    config: &I18nConfig,
    signals: &LocaleSignals,
    preferences: Option<Arc<dyn PreferenceStore>>,
) -> Result<Arc<TranslationService>, EmbeddedError> {
    if let Some(existing) = locale_catalog::context() {
        tracing::warn!("Translation service already initialized.");
        return Ok(existing);
    }

    let catalog = embedded_catalog::<T>()?;
    let service = Arc::new(TranslationService::bootstrap(
        config,
        catalog,
        signals,
        preferences,
    )?);

    if set_context(Arc::clone(&service)).is_err() {
        tracing::warn!("Translation service already initialized.");
        if let Some(existing) = locale_catalog::context() {
            return Ok(existing);
        }
    }
    Ok(service)
}
