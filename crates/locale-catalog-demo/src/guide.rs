//! Guide steps and hints.
//!
//! Titles and descriptions are either a plain string or a map from locale tag
//! to string:
//!
//! ```json
//! {
//!   "type": "click",
//!   "title": { "en-US": "Create an instance", "zh-CN": "创建实例" },
//!   "description": "Click the button.",
//!   "selectors": [["#add-instance"]]
//! }
//! ```

use indexmap::IndexMap;
use locale_catalog::{LanguageIdentifier, TranslationService};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    Click,
    Change,
}

/// Where the guide dialog is placed relative to its target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogPosition {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
    TopRight,
}

/// Text shown to the user, either shared by every locale or given per locale.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    PerLocale(IndexMap<String, String>),
}

impl LocalizedText {
    /// The text for `locale`, then for `fallback`.
    ///
    /// Map keys are compared as parsed language identifiers, so `zh-cn`
    /// matches `zh-CN`. Keys that do not parse are ignored.
    pub fn resolve(
        &self,
        locale: &LanguageIdentifier,
        fallback: &LanguageIdentifier,
    ) -> Option<&str> {
        match self {
            LocalizedText::Plain(text) => Some(text),
            LocalizedText::PerLocale(texts) => {
                Self::find(texts, locale).or_else(|| Self::find(texts, fallback))
            },
        }
    }

    /// Resolves against the service's active and fallback locales.
    pub fn localize(&self, service: &TranslationService) -> Option<&str> {
        self.resolve(&service.current_locale(), service.fallback_locale())
    }

    fn find<'a>(texts: &'a IndexMap<String, String>, lang: &LanguageIdentifier) -> Option<&'a str> {
        texts
            .iter()
            .find(|(tag, _)| {
                tag.parse::<LanguageIdentifier>()
                    .is_ok_and(|candidate| candidate == *lang)
            })
            .map(|(_, text)| text.as_str())
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        LocalizedText::Plain(text.to_string())
    }
}

impl From<String> for LocalizedText {
    fn from(text: String) -> Self {
        LocalizedText::Plain(text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepData {
    #[serde(rename = "type")]
    pub step_type: StepType,
    pub title: LocalizedText,
    pub description: LocalizedText,
    /// Candidate selector paths for the step's target element.
    pub selectors: Vec<Vec<String>>,
    /// URL a change step expects after it completes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Pattern the target's content must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<DialogPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_next_button: Option<bool>,
}

impl StepData {
    pub fn position(&self) -> DialogPosition {
        self.position.unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GuideData {
    pub name: String,
    pub steps: Vec<StepData>,
}

impl GuideData {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HintType {
    Hint,
    Shield,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HintDialog {
    pub title: LocalizedText,
    pub description: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<DialogPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_once: Option<bool>,
}

impl HintDialog {
    pub fn position(&self) -> DialogPosition {
        self.position.unwrap_or_default()
    }
}

/// A guide without a next button that stays visible on its page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HintData {
    pub selector: String,
    #[serde(rename = "type")]
    pub hint_type: HintType,
    /// Pathname pattern of the page the hint belongs to.
    pub pathname: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<bool>,
    /// No dialog is shown when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog: Option<HintDialog>,
    /// Extra CSS declarations for the hint element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addition_style: Option<IndexMap<String, String>>,
}

impl HintData {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
