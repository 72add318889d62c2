//! Picks the initial locale out of the URL, the stored preference and the platform language.

use crate::error::LocalizationError;
use crate::locale::{SupportedLocales, normalize_platform_language};
use crate::preferences::{PreferenceStore, preferred_language};
use locale_catalog_toml::{DEFAULT_QUERY_PARAMETER, I18nConfig};
use serde_json::Value;
use std::fmt;
use unic_langid::LanguageIdentifier;
use url::{Url, form_urlencoded};

/// The inputs locale resolution reads, captured from the host.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocaleSignals {
    /// The current page URL. Relative URLs (`/path?locale=zh-CN`) are accepted.
    pub url: Option<String>,
    /// The preference record whose `appearance.language` holds the user's choice.
    pub preferences: Option<Value>,
    /// The language reported by the platform.
    pub platform_language: Option<String>,
}

impl LocaleSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the signals from a preference store and the operating system locale.
    pub fn capture(url: Option<&str>, store: &dyn PreferenceStore, preference_key: &str) -> Self {
        Self {
            url: url.map(str::to_string),
            preferences: store.load(preference_key),
            platform_language: sys_locale::get_locale(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_preferences(mut self, record: Value) -> Self {
        self.preferences = Some(record);
        self
    }

    pub fn with_platform_language(mut self, tag: impl Into<String>) -> Self {
        self.platform_language = Some(tag.into());
        self
    }
}

/// Which signal produced a [`Resolution`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocaleSource {
    Query,
    Preference,
    Platform,
    Default,
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LocaleSource::Query => "query",
            LocaleSource::Preference => "preference",
            LocaleSource::Platform => "platform",
            LocaleSource::Default => "default",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub locale: LanguageIdentifier,
    pub source: LocaleSource,
}

/// Resolves the initial locale.
///
/// Signals are tried in order: URL query parameter, stored preference,
/// platform language. The first one naming a supported locale wins;
/// otherwise the default locale is used. Invalid signals are skipped
/// silently.
#[derive(Clone, Debug)]
pub struct LocaleResolver {
    supported: SupportedLocales,
    default: LanguageIdentifier,
    query_parameter: String,
}

impl LocaleResolver {
    /// Creates a resolver. `default` must be a member of `supported`.
    pub fn new(
        supported: SupportedLocales,
        default: LanguageIdentifier,
    ) -> Result<Self, LocalizationError> {
        if !supported.contains(&default) {
            return Err(LocalizationError::LanguageNotSupported(default));
        }

        Ok(Self {
            supported,
            default,
            query_parameter: DEFAULT_QUERY_PARAMETER.to_string(),
        })
    }

    pub fn with_query_parameter(mut self, name: impl Into<String>) -> Self {
        self.query_parameter = name.into();
        self
    }

    pub fn from_config(config: &I18nConfig) -> Result<Self, LocalizationError> {
        config.validate()?;
        let supported = SupportedLocales::new(config.supported_language_identifiers()?);
        let default = config.default_language_identifier()?;
        Ok(Self::new(supported, default)?.with_query_parameter(config.query_parameter.clone()))
    }

    pub fn supported(&self) -> &SupportedLocales {
        &self.supported
    }

    pub fn default_locale(&self) -> &LanguageIdentifier {
        &self.default
    }

    pub fn resolve(&self, signals: &LocaleSignals) -> Resolution {
        let candidates = [
            (
                LocaleSource::Query,
                signals.url.as_deref().and_then(|url| self.query_candidate(url)),
            ),
            (
                LocaleSource::Preference,
                signals.preferences.as_ref().and_then(|record| self.preference_candidate(record)),
            ),
            (
                LocaleSource::Platform,
                signals
                    .platform_language
                    .as_deref()
                    .and_then(|tag| self.platform_candidate(tag)),
            ),
        ];

        let resolution = candidates
            .into_iter()
            .find_map(|(source, locale)| locale.map(|locale| Resolution { locale, source }))
            .unwrap_or_else(|| Resolution {
                locale: self.default.clone(),
                source: LocaleSource::Default,
            });

        tracing::debug!(
            locale = %resolution.locale,
            source = %resolution.source,
            "Resolved locale"
        );
        resolution
    }

    fn query_candidate(&self, url: &str) -> Option<LanguageIdentifier> {
        let value = query_value(url, &self.query_parameter)?;
        self.supported.find(&value).cloned()
    }

    fn preference_candidate(&self, record: &Value) -> Option<LanguageIdentifier> {
        self.supported.find(preferred_language(record)?).cloned()
    }

    fn platform_candidate(&self, tag: &str) -> Option<LanguageIdentifier> {
        self.supported
            .find(normalize_platform_language(tag))
            .cloned()
    }
}

/// Returns the first value of query parameter `name` in `url`.
fn query_value(url: &str, name: &str) -> Option<String> {
    let query = match Url::parse(url) {
        Ok(parsed) => parsed.query().map(str::to_string)?,
        Err(_) => {
            let (_, query) = url.split_once('?')?;
            let query = query.split_once('#').map_or(query, |(query, _)| query);
            query.to_string()
        },
    };

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use unic_langid::langid;

    fn resolver() -> LocaleResolver {
        LocaleResolver::new(
            SupportedLocales::new([langid!("en-US"), langid!("zh-CN")]),
            langid!("en-US"),
        )
        .unwrap()
    }

    fn prefs(language: &str) -> Value {
        json!({"appearance": {"language": language}})
    }

    #[rstest]
    #[case("https://app.example.com/?locale=zh-CN", Some("zh-CN"))]
    #[case("https://app.example.com/db?tab=1&locale=en-US#top", Some("en-US"))]
    #[case("/relative/path?locale=zh-CN#frag", Some("zh-CN"))]
    #[case("https://app.example.com/?locale=zh-CN&locale=en-US", Some("zh-CN"))]
    #[case("https://app.example.com/?lang=zh-CN", None)]
    #[case("https://app.example.com/", None)]
    fn query_value_extraction(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(query_value(url, "locale").as_deref(), expected);
    }

    #[rstest]
    #[case::en("en-US")]
    #[case::zh("zh-CN")]
    fn query_wins_over_everything(#[case] code: &str) {
        let signals = LocaleSignals::new()
            .with_url(format!("https://app.example.com/?locale={code}"))
            .with_preferences(prefs("en-US"))
            .with_platform_language("zh-CN");

        let resolution = resolver().resolve(&signals);
        assert_eq!(resolution.locale.to_string(), code);
        assert_eq!(resolution.source, LocaleSource::Query);
    }

    #[test]
    fn invalid_query_falls_through_to_preference() {
        let signals = LocaleSignals::new()
            .with_url("https://app.example.com/?locale=fr-FR")
            .with_preferences(prefs("zh-CN"))
            .with_platform_language("en-US");

        assert_eq!(
            resolver().resolve(&signals),
            Resolution {
                locale: langid!("zh-CN"),
                source: LocaleSource::Preference,
            }
        );
    }

    #[test]
    fn legacy_platform_language_is_rewritten() {
        let signals = LocaleSignals::new()
            .with_preferences(prefs("de-DE"))
            .with_platform_language("en");

        assert_eq!(
            resolver().resolve(&signals),
            Resolution {
                locale: langid!("en-US"),
                source: LocaleSource::Platform,
            }
        );
    }

    #[test]
    fn platform_language_is_used_when_supported() {
        let signals = LocaleSignals::new().with_platform_language("zh-CN");

        assert_eq!(resolver().resolve(&signals).source, LocaleSource::Platform);
    }

    #[rstest]
    #[case::nothing(LocaleSignals::new())]
    #[case::all_invalid(
        LocaleSignals::new()
            .with_url("/?locale=xx")
            .with_preferences(json!({"appearance": "dark"}))
            .with_platform_language("fr")
    )]
    #[case::legacy_only_for_en(LocaleSignals::new().with_platform_language("zh"))]
    fn default_when_nothing_validates(#[case] signals: LocaleSignals) {
        let resolver =
            LocaleResolver::new(resolver().supported().clone(), langid!("zh-CN")).unwrap();

        assert_eq!(
            resolver.resolve(&signals),
            Resolution {
                locale: langid!("zh-CN"),
                source: LocaleSource::Default,
            }
        );
    }

    #[test]
    fn default_outside_supported_set_is_rejected() {
        let result = LocaleResolver::new(resolver().supported().clone(), langid!("fr-FR"));

        assert!(matches!(
            result,
            Err(LocalizationError::LanguageNotSupported(lang)) if lang == langid!("fr-FR")
        ));
    }

    #[test]
    fn custom_query_parameter() {
        let signals = LocaleSignals::new().with_url("/?lang=zh-CN&locale=en-US");
        let resolver = resolver().with_query_parameter("lang");

        assert_eq!(resolver.resolve(&signals).locale, langid!("zh-CN"));
    }

    #[test]
    fn from_config_uses_configured_values() {
        let config = I18nConfig {
            fallback_language: "en-US".to_string(),
            default_language: Some("zh-CN".to_string()),
            supported_languages: vec!["en-US".to_string(), "zh-CN".to_string()],
            assets_dir: "locales".into(),
            query_parameter: "lang".to_string(),
            preference_key: "options".to_string(),
        };

        let resolver = LocaleResolver::from_config(&config).unwrap();
        assert_eq!(resolver.default_locale(), &langid!("zh-CN"));
        assert_eq!(
            resolver
                .resolve(&LocaleSignals::new().with_url("/?lang=en-US"))
                .source,
            LocaleSource::Query
        );
    }
}
