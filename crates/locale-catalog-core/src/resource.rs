//! Resource fragments and their boundary parse.
//!
//! A fragment's logical path decides where its data lands in the catalog:
//!
//! - `en-US` is a *flat* resource holding the whole `en-US` tree.
//! - `en-US/common` is a *sectioned* resource merged under the `common`
//!   namespace of `en-US`. When more than one segment precedes the namespace
//!   they are joined with `-` to form the locale (`zh/CN/common` targets `zh-CN`).

use crate::error::ResourceError;
use crate::message::{KEY_SEPARATOR, MessageTree};
use unic_langid::LanguageIdentifier;

const PATH_SEPARATOR: char = '/';

/// One independently authored file of translation data, identified by a logical path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceEntry {
    pub path: String,
    pub data: MessageTree,
}

impl ResourceEntry {
    pub fn new(path: impl Into<String>, data: MessageTree) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }

    /// Deserializes a JSON message tree for `path`.
    pub fn from_json(path: impl Into<String>, json: &str) -> Result<Self, ResourceError> {
        let path = path.into();
        let data = serde_json::from_str(json).map_err(|source| ResourceError::InvalidData {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, data })
    }

    /// Decides the resource shape from the path arity.
    pub fn parse(self) -> Result<ParsedResource, ResourceError> {
        let path = self.path.trim_matches(PATH_SEPARATOR);
        let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(ResourceError::MalformedPath {
                path: self.path.clone(),
                reason: "path contains an empty segment",
            });
        }

        let Some((last, leading)) = segments.split_last() else {
            return Err(ResourceError::MalformedPath {
                path: self.path.clone(),
                reason: "path is empty",
            });
        };

        if leading.is_empty() {
            let locale = parse_locale(&self.path, last)?;
            return Ok(ParsedResource::Flat {
                locale,
                tree: self.data,
            });
        }

        if !is_namespace(last) {
            return Err(ResourceError::InvalidNamespace {
                path: self.path.clone(),
                namespace: last.to_string(),
            });
        }
        let locale = parse_locale(&self.path, &leading.join("-"))?;
        Ok(ParsedResource::Sectioned {
            locale,
            namespace: last.to_string(),
            tree: self.data,
        })
    }
}

/// A resource fragment whose target in the catalog has been decided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedResource {
    /// Replaces the locale's whole tree.
    Flat {
        locale: LanguageIdentifier,
        tree: MessageTree,
    },
    /// Merges into one namespace of the locale's tree.
    Sectioned {
        locale: LanguageIdentifier,
        namespace: String,
        tree: MessageTree,
    },
}

impl ParsedResource {
    pub fn locale(&self) -> &LanguageIdentifier {
        match self {
            ParsedResource::Flat { locale, .. } | ParsedResource::Sectioned { locale, .. } => {
                locale
            },
        }
    }
}

impl TryFrom<ResourceEntry> for ParsedResource {
    type Error = ResourceError;

    fn try_from(entry: ResourceEntry) -> Result<Self, Self::Error> {
        entry.parse()
    }
}

/// Parses a locale segment. Variant subtags are rejected, so a nested
/// directory such as `en-US/database/tables` never becomes `en-US-database`.
fn parse_locale(path: &str, locale: &str) -> Result<LanguageIdentifier, ResourceError> {
    let lang = locale
        .parse::<LanguageIdentifier>()
        .map_err(|source| ResourceError::InvalidLocale {
            path: path.to_string(),
            locale: locale.to_string(),
            source,
        })?;
    if lang.variants().next().is_some() {
        return Err(ResourceError::MalformedPath {
            path: path.to_string(),
            reason: "locale must not carry variant subtags",
        });
    }
    Ok(lang)
}

fn is_namespace(segment: &str) -> bool {
    !segment.contains(KEY_SEPARATOR)
        && segment
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use unic_langid::langid;

    fn entry(path: &str) -> ResourceEntry {
        ResourceEntry::from_json(path, r#"{"hello": "Hi"}"#).unwrap()
    }

    #[test]
    fn single_segment_is_flat() {
        let parsed = entry("en-US").parse().unwrap();

        assert!(matches!(
            parsed,
            ParsedResource::Flat { ref locale, .. } if *locale == langid!("en-US")
        ));
    }

    #[test]
    fn trailing_segment_is_namespace() {
        let parsed = entry("zh-CN/common").parse().unwrap();

        assert_eq!(
            parsed,
            ParsedResource::Sectioned {
                locale: langid!("zh-CN"),
                namespace: "common".to_string(),
                tree: entry("x").data,
            }
        );
    }

    #[test]
    fn leading_segments_form_the_locale() {
        let parsed = entry("zh/CN/dbSchema").parse().unwrap();

        assert_eq!(parsed.locale(), &langid!("zh-CN"));
        assert!(matches!(
            parsed,
            ParsedResource::Sectioned { ref namespace, .. } if namespace == "dbSchema"
        ));
    }

    #[rstest]
    #[case::empty("")]
    #[case::slashes_only("//")]
    #[case::empty_segment("en-US//common")]
    fn malformed_paths_are_rejected(#[case] path: &str) {
        assert!(matches!(
            entry(path).parse(),
            Err(ResourceError::MalformedPath { .. })
        ));
    }

    #[rstest]
    #[case::nested_namespace("en-US/database/tables")]
    #[case::flat_variant("en-US-database")]
    fn variant_locales_are_rejected(#[case] path: &str) {
        assert!(matches!(
            entry(path).parse(),
            Err(ResourceError::MalformedPath { .. })
        ));
    }

    #[test]
    fn invalid_locale_is_rejected() {
        assert!(matches!(
            entry("not a locale!/common").parse(),
            Err(ResourceError::InvalidLocale { .. })
        ));
    }

    #[test]
    fn dotted_namespace_is_rejected() {
        assert!(matches!(
            entry("en-US/common.v2").parse(),
            Err(ResourceError::InvalidNamespace { .. })
        ));
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(matches!(
            ResourceEntry::from_json("en-US", "[1, 2]"),
            Err(ResourceError::InvalidData { .. })
        ));
    }
}
