use unic_langid::LanguageIdentifier;

/// Bare platform language kept by older stored preferences.
const LEGACY_LANGUAGE: &str = "en";
/// Regional variant the legacy language is rewritten to.
const LEGACY_LANGUAGE_REWRITE: &str = "en-US";

const UNDERSCORE: char = '_';

/// The ordered set of locales that may become active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupportedLocales(Vec<LanguageIdentifier>);

impl SupportedLocales {
    /// Builds the set, dropping duplicates while keeping the first occurrence.
    pub fn new(languages: impl IntoIterator<Item = LanguageIdentifier>) -> Self {
        let mut unique: Vec<LanguageIdentifier> = Vec::new();
        for lang in languages {
            if !unique.contains(&lang) {
                unique.push(lang);
            }
        }
        Self(unique)
    }

    pub fn contains(&self, lang: &LanguageIdentifier) -> bool {
        self.0.contains(lang)
    }

    /// Parses `candidate` and returns the matching member, if any.
    ///
    /// Surrounding whitespace is ignored and casing is canonicalized before
    /// comparison, so `zh-cn` matches `zh-CN`. Only `-` separates subtags.
    pub fn find(&self, candidate: &str) -> Option<&LanguageIdentifier> {
        let candidate = candidate.trim();
        if candidate.is_empty() || candidate.contains(UNDERSCORE) {
            return None;
        }
        let lang = candidate.parse::<LanguageIdentifier>().ok()?;
        self.0.iter().find(|supported| **supported == lang)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageIdentifier> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[LanguageIdentifier] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<LanguageIdentifier> for SupportedLocales {
    fn from_iter<I: IntoIterator<Item = LanguageIdentifier>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Rewrites the bare legacy `en` tag to `en-US`; every other tag is returned as is.
pub fn normalize_platform_language(tag: &str) -> &str {
    if tag.trim() == LEGACY_LANGUAGE {
        LEGACY_LANGUAGE_REWRITE
    } else {
        tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use unic_langid::langid;

    fn supported() -> SupportedLocales {
        SupportedLocales::new([langid!("en-US"), langid!("zh-CN")])
    }

    #[test]
    fn find_canonicalizes_casing() {
        assert_eq!(supported().find("zh-cn"), Some(&langid!("zh-CN")));
        assert_eq!(supported().find(" en-US "), Some(&langid!("en-US")));
    }

    #[rstest]
    #[case::unsupported("fr-FR")]
    #[case::bare_language("zh")]
    #[case::underscore("zh_cn")]
    #[case::underscore_canonical("en_US")]
    #[case::garbage("??")]
    #[case::empty("")]
    fn find_rejects(#[case] candidate: &str) {
        assert_eq!(supported().find(candidate), None);
    }

    #[test]
    fn duplicates_are_dropped() {
        let locales = SupportedLocales::new([langid!("en-US"), langid!("zh-CN"), langid!("en-US")]);
        assert_eq!(locales.as_slice(), &[langid!("en-US"), langid!("zh-CN")]);
    }

    #[rstest]
    #[case("en", "en-US")]
    #[case("en-GB", "en-GB")]
    #[case("zh", "zh")]
    #[case("EN", "EN")]
    fn legacy_language_rewrite(#[case] tag: &str, #[case] expected: &str) {
        assert_eq!(normalize_platform_language(tag), expected);
    }
}
