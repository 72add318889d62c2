//! Core functionality for locale-catalog.
//!
//! This crate resolves the active locale from the URL, the stored user
//! preference and the platform language, merges JSON resource fragments into
//! a single [`MessageCatalog`], and exposes lookups through a
//! [`TranslationService`].

pub mod catalog;
pub mod error;
pub mod format;
pub mod locale;
pub mod message;
pub mod preferences;
pub mod resolver;
pub mod resource;
pub mod service;

pub use catalog::{CatalogBuilder, MessageCatalog};
pub use error::{LocalizationError, PreferenceError, ResourceError};
pub use format::{FormatArgs, interpolate};
pub use locale::{SupportedLocales, normalize_platform_language};
pub use message::{MessageNode, MessageTree};
pub use preferences::{
    JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore, preferred_language,
    with_preferred_language,
};
pub use resolver::{LocaleResolver, LocaleSignals, LocaleSource, Resolution};
pub use resource::{ParsedResource, ResourceEntry};
pub use service::{
    ActiveLocale, LocaleObserver, MessageOrigin, Translation, TranslationService,
};

pub use unic_langid::{LanguageIdentifier, langid};
