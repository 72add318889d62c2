//! The translation service: active locale plus lookups against the catalog.

use crate::catalog::MessageCatalog;
use crate::error::LocalizationError;
use crate::format::{FormatArgs, interpolate};
use crate::locale::SupportedLocales;
use crate::preferences::{PreferenceStore, with_preferred_language};
use crate::resolver::{LocaleResolver, LocaleSignals};
use arc_swap::ArcSwap;
use bon::bon;
use locale_catalog_toml::{DEFAULT_PREFERENCE_KEY, I18nConfig};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use unic_langid::LanguageIdentifier;

/// The currently active locale.
///
/// Every change bumps a generation counter so observers can tell whether
/// they are looking at a stale value.
#[derive(Debug)]
pub struct ActiveLocale {
    current: ArcSwap<LanguageIdentifier>,
    generation: AtomicU64,
}

impl ActiveLocale {
    fn new(lang: LanguageIdentifier) -> Self {
        Self {
            current: ArcSwap::from_pointee(lang),
            generation: AtomicU64::new(0),
        }
    }

    pub fn get(&self) -> LanguageIdentifier {
        self.current.load().as_ref().clone()
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    fn set(&self, lang: LanguageIdentifier) {
        self.current.store(Arc::new(lang));
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

/// A read-only view of the active locale that remembers the last generation it saw.
#[derive(Clone, Debug)]
pub struct LocaleObserver {
    active: Arc<ActiveLocale>,
    seen: u64,
}

impl LocaleObserver {
    pub fn current(&self) -> LanguageIdentifier {
        self.active.get()
    }

    pub fn has_changed(&self) -> bool {
        self.active.generation() != self.seen
    }

    /// Returns the new locale if it changed since the last call, and marks it seen.
    pub fn changed(&mut self) -> Option<LanguageIdentifier> {
        let generation = self.active.generation();
        if generation == self.seen {
            return None;
        }
        self.seen = generation;
        Some(self.active.get())
    }
}

/// Where a translated string came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageOrigin {
    /// Found in the active locale.
    Active,
    /// Missing from the active locale, found in the fallback locale.
    Fallback,
    /// Missing from both; the text is the key itself.
    Missing,
}

/// A best-effort translation with the origin of its text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub origin: MessageOrigin,
}

impl Translation {
    pub fn used_fallback(&self) -> bool {
        self.origin == MessageOrigin::Fallback
    }

    pub fn is_missing(&self) -> bool {
        self.origin == MessageOrigin::Missing
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Holds the active locale and resolves keys against a shared [`MessageCatalog`].
pub struct TranslationService {
    catalog: Arc<MessageCatalog>,
    supported: SupportedLocales,
    fallback: LanguageIdentifier,
    active: Arc<ActiveLocale>,
    preferences: Option<Arc<dyn PreferenceStore>>,
    preference_key: String,
}

#[bon]
impl TranslationService {
    /// Creates a service.
    ///
    /// `initial` defaults to `fallback`. Both must be members of `supported`.
    /// When `preferences` is wired, [`set_locale`](Self::set_locale) persists
    /// the choice under `preference_key`.
    #[builder]
    pub fn new(
        #[builder(into)] catalog: Arc<MessageCatalog>,
        supported: SupportedLocales,
        fallback: LanguageIdentifier,
        initial: Option<LanguageIdentifier>,
        preferences: Option<Arc<dyn PreferenceStore>>,
        #[builder(into, default = DEFAULT_PREFERENCE_KEY.to_string())] preference_key: String,
    ) -> Result<Self, LocalizationError> {
        if !supported.contains(&fallback) {
            return Err(LocalizationError::LanguageNotSupported(fallback));
        }

        let initial = initial.unwrap_or_else(|| fallback.clone());
        if !supported.contains(&initial) {
            return Err(LocalizationError::LanguageNotSupported(initial));
        }

        for lang in supported.iter() {
            if !catalog.contains_locale(lang) {
                tracing::warn!("No messages loaded for supported language '{}'", lang);
            }
        }

        Ok(Self {
            catalog,
            supported,
            fallback,
            active: Arc::new(ActiveLocale::new(initial)),
            preferences,
            preference_key,
        })
    }
}

impl TranslationService {
    /// Validates `config`, resolves the initial locale from `signals`, and builds the service.
    pub fn bootstrap(
        config: &I18nConfig,
        catalog: impl Into<Arc<MessageCatalog>>,
        signals: &LocaleSignals,
        preferences: Option<Arc<dyn PreferenceStore>>,
    ) -> Result<Self, LocalizationError> {
        let resolver = LocaleResolver::from_config(config)?;
        let resolution = resolver.resolve(signals);
        tracing::info!(
            locale = %resolution.locale,
            source = %resolution.source,
            "Initial locale selected"
        );

        Self::builder()
            .catalog(catalog)
            .supported(resolver.supported().clone())
            .fallback(config.fallback_language_identifier()?)
            .initial(resolution.locale)
            .maybe_preferences(preferences)
            .preference_key(config.preference_key.clone())
            .build()
    }

    pub fn current_locale(&self) -> LanguageIdentifier {
        self.active.get()
    }

    pub fn observe(&self) -> LocaleObserver {
        LocaleObserver {
            active: Arc::clone(&self.active),
            seen: self.active.generation(),
        }
    }

    pub fn fallback_locale(&self) -> &LanguageIdentifier {
        &self.fallback
    }

    pub fn supported_locales(&self) -> &SupportedLocales {
        &self.supported
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Switches the active locale.
    ///
    /// Unsupported languages are rejected and leave the active locale unchanged.
    pub fn set_locale(&self, lang: &LanguageIdentifier) -> Result<(), LocalizationError> {
        if !self.supported.contains(lang) {
            tracing::warn!("Rejected unsupported language '{}'", lang);
            return Err(LocalizationError::LanguageNotSupported(lang.clone()));
        }

        if self.active.get() != *lang {
            self.active.set(lang.clone());
            tracing::info!(locale = %lang, "Active locale changed");
        }
        self.persist(lang);
        Ok(())
    }

    /// Parses `tag` and switches the active locale to it.
    pub fn set_locale_tag(&self, tag: &str) -> Result<(), LocalizationError> {
        let lang = tag
            .trim()
            .parse::<LanguageIdentifier>()
            .map_err(|source| LocalizationError::InvalidLanguageTag {
                tag: tag.to_string(),
                source,
            })?;
        self.set_locale(&lang)
    }

    pub fn translate(&self, key: &str, args: Option<&FormatArgs>) -> String {
        self.translate_detailed(key, args).text
    }

    /// Resolves `key` in the active locale, then in the fallback locale, then
    /// returns the key itself.
    pub fn translate_detailed(&self, key: &str, args: Option<&FormatArgs>) -> Translation {
        let active = self.active.get();

        let found = match self.catalog.lookup(&active, key) {
            Some(text) => Some((text, MessageOrigin::Active)),
            None if active != self.fallback => self
                .catalog
                .lookup(&self.fallback, key)
                .map(|text| (text, MessageOrigin::Fallback)),
            None => None,
        };

        match found {
            Some((text, origin)) => Translation {
                text: match args {
                    Some(args) => interpolate(text, args).into_owned(),
                    None => text.to_string(),
                },
                origin,
            },
            None => Translation {
                text: key.to_string(),
                origin: MessageOrigin::Missing,
            },
        }
    }

    fn persist(&self, lang: &LanguageIdentifier) {
        let Some(store) = &self.preferences else {
            return;
        };

        let record = with_preferred_language(store.load(&self.preference_key), &lang.to_string());
        if let Err(err) = store.store(&self.preference_key, record) {
            tracing::warn!("Failed to persist language preference '{}': {}", lang, err);
        }
    }
}

impl fmt::Debug for TranslationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationService")
            .field("active", &self.active.get())
            .field("fallback", &self.fallback)
            .field("supported", &self.supported)
            .field("persistent", &self.preferences.is_some())
            .finish_non_exhaustive()
    }
}
