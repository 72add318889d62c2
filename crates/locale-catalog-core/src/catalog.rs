//! Aggregation of resource fragments into a single locale → namespace → tree catalog.

use crate::error::ResourceError;
use crate::message::MessageTree;
use crate::resource::{ParsedResource, ResourceEntry};
use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::{Map, Value};
use unic_langid::LanguageIdentifier;

/// Translation trees for every locale. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    locales: FxHashMap<LanguageIdentifier, MessageTree>,
}

impl MessageCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Parses raw entries at the boundary and builds the catalog.
    ///
    /// Entries are applied in lexicographic path order, so the result does not
    /// depend on the order in which the host enumerated its files. Entries with
    /// equal paths keep their relative order.
    pub fn from_entries(
        entries: impl IntoIterator<Item = ResourceEntry>,
    ) -> Result<Self, ResourceError> {
        let mut entries: Vec<ResourceEntry> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        let mut builder = CatalogBuilder::new();
        for entry in entries {
            builder.push(entry.parse()?);
        }
        Ok(builder.build())
    }

    /// Locales present in the catalog, sorted by tag.
    pub fn locales(&self) -> Vec<&LanguageIdentifier> {
        let mut locales: Vec<&LanguageIdentifier> = self.locales.keys().collect();
        locales.sort_by_cached_key(|lang| lang.to_string());
        locales
    }

    pub fn contains_locale(&self, locale: &LanguageIdentifier) -> bool {
        self.locales.contains_key(locale)
    }

    pub fn tree(&self, locale: &LanguageIdentifier) -> Option<&MessageTree> {
        self.locales.get(locale)
    }

    /// Resolves a dotted key in one locale's tree.
    pub fn lookup(&self, locale: &LanguageIdentifier, key: &str) -> Option<&str> {
        self.tree(locale)?.lookup(key)
    }

    /// Dotted keys that `reference` defines and `locale` does not.
    pub fn missing_keys(
        &self,
        locale: &LanguageIdentifier,
        reference: &LanguageIdentifier,
    ) -> Vec<String> {
        let Some(reference_tree) = self.tree(reference) else {
            return Vec::new();
        };
        let present: FxHashSet<String> = self
            .tree(locale)
            .map(|tree| tree.leaf_keys().into_iter().collect())
            .unwrap_or_default();

        reference_tree
            .leaf_keys()
            .into_iter()
            .filter(|key| !present.contains(key))
            .collect()
    }

    /// The whole catalog as a JSON object keyed by locale tag.
    pub fn to_json(&self) -> Value {
        let mut root = Map::new();
        for locale in self.locales() {
            if let Some(tree) = self.tree(locale)
                && let Ok(value) = serde_json::to_value(tree)
            {
                root.insert(locale.to_string(), value);
            }
        }
        Value::Object(root)
    }
}

/// Builds a [`MessageCatalog`] from parsed resources.
///
/// Flat resources are applied first, in push order, each replacing any earlier
/// flat resource for its locale. Sectioned resources are then merged under
/// their namespace: keys they define win, every other key and namespace stays.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    flat: Vec<(LanguageIdentifier, MessageTree)>,
    sectioned: Vec<(LanguageIdentifier, String, MessageTree)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, resource: ParsedResource) -> &mut Self {
        match resource {
            ParsedResource::Flat { locale, tree } => self.flat.push((locale, tree)),
            ParsedResource::Sectioned {
                locale,
                namespace,
                tree,
            } => self.sectioned.push((locale, namespace, tree)),
        }
        self
    }

    pub fn build(self) -> MessageCatalog {
        let mut locales: FxHashMap<LanguageIdentifier, MessageTree> = FxHashMap::default();

        for (locale, tree) in self.flat {
            locales.insert(locale, tree);
        }

        for (locale, namespace, tree) in self.sectioned {
            locales
                .entry(locale)
                .or_default()
                .merge_namespace(&namespace, tree);
        }

        tracing::debug!(locales = locales.len(), "Built message catalog");
        MessageCatalog { locales }
    }
}

impl Extend<ParsedResource> for CatalogBuilder {
    fn extend<I: IntoIterator<Item = ParsedResource>>(&mut self, iter: I) {
        for resource in iter {
            self.push(resource);
        }
    }
}

impl FromIterator<ParsedResource> for MessageCatalog {
    fn from_iter<I: IntoIterator<Item = ParsedResource>>(iter: I) -> Self {
        let mut builder = CatalogBuilder::new();
        builder.extend(iter);
        builder.build()
    }
}
