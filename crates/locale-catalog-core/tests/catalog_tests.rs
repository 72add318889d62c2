use locale_catalog_core::{
    FormatArgs, LocaleResolver, LocaleSignals, LocaleSource, MessageCatalog, MessageOrigin,
    ResourceEntry, SupportedLocales, TranslationService,
};
use serde_json::{Value, json};
use unic_langid::langid;

fn entry(path: &str, data: Value) -> ResourceEntry {
    ResourceEntry::new(path, serde_json::from_value(data).unwrap())
}

#[test]
fn namespaces_of_one_locale_are_combined() {
    let catalog = MessageCatalog::from_entries([
        entry("en-US/common", json!({"hello": "Hi"})),
        entry("en-US/shop", json!({"buy": "Buy"})),
    ])
    .unwrap();

    let tree = serde_json::to_value(catalog.tree(&langid!("en-US")).unwrap()).unwrap();
    assert_eq!(
        tree,
        json!({"common": {"hello": "Hi"}, "shop": {"buy": "Buy"}})
    );
}

#[test]
fn same_namespace_merges_with_later_entry_winning() {
    let catalog = MessageCatalog::from_entries([
        entry("en-US/common", json!({"hello": "Hi", "bye": "Bye"})),
        entry("en-US/common", json!({"hello": "Hello", "thanks": "Thanks"})),
    ])
    .unwrap();

    let en = langid!("en-US");
    assert_eq!(catalog.lookup(&en, "common.hello"), Some("Hello"));
    assert_eq!(catalog.lookup(&en, "common.bye"), Some("Bye"));
    assert_eq!(catalog.lookup(&en, "common.thanks"), Some("Thanks"));
}

#[test]
fn enumeration_order_of_distinct_targets_does_not_matter() {
    let forward = vec![
        entry("en-US", json!({"title": "Home"})),
        entry("en-US/common", json!({"hello": "Hi"})),
        entry("zh-CN/common", json!({"hello": "你好"})),
        entry("zh-CN/shop", json!({"buy": "购买"})),
    ];
    let mut backward = forward.clone();
    backward.reverse();

    assert_eq!(
        MessageCatalog::from_entries(forward).unwrap(),
        MessageCatalog::from_entries(backward).unwrap()
    );
}

#[test]
fn flat_locale_merges_with_sectioned_namespaces() {
    let catalog = MessageCatalog::from_entries([
        entry("en-US/common", json!({"hello": "Hi"})),
        entry("en-US", json!({"common": {"cancel": "Cancel"}, "title": "Home"})),
    ])
    .unwrap();

    let en = langid!("en-US");
    assert_eq!(catalog.lookup(&en, "common.hello"), Some("Hi"));
    assert_eq!(catalog.lookup(&en, "common.cancel"), Some("Cancel"));
    assert_eq!(catalog.lookup(&en, "title"), Some("Home"));
}

#[test]
fn resolved_locale_drives_translation_with_fallback() {
    let catalog = MessageCatalog::from_entries([
        entry("en-US/common", json!({"hello": "Hi", "instances": "{0} instances"})),
        entry("zh-CN/common", json!({"hello": "你好"})),
    ])
    .unwrap();
    let supported = SupportedLocales::new([langid!("en-US"), langid!("zh-CN")]);

    let resolver = LocaleResolver::new(supported.clone(), langid!("en-US")).unwrap();
    let resolution = resolver.resolve(
        &LocaleSignals::new().with_preferences(json!({"appearance": {"language": "zh-CN"}})),
    );
    assert_eq!(resolution.source, LocaleSource::Preference);

    let service = TranslationService::builder()
        .catalog(catalog)
        .supported(supported)
        .fallback(langid!("en-US"))
        .initial(resolution.locale)
        .build()
        .unwrap();

    assert_eq!(service.translate("common.hello", None), "你好");

    let fallback = service.translate_detailed("common.instances", Some(&FormatArgs::list([3])));
    assert_eq!(fallback.text, "3 instances");
    assert_eq!(fallback.origin, MessageOrigin::Fallback);

    assert_eq!(service.translate("common.unknown", None), "common.unknown");
}
