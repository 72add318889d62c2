use locale_catalog::{
    FormatArgs, LocalizationError, MessageCatalog, ResourceEntry, SetLocaleError,
    SupportedLocales, TranslationService, context, current_locale, set_context, set_locale, t,
    t_with,
};
use serial_test::serial;
use std::sync::Arc;
use unic_langid::langid;

fn service() -> TranslationService {
    let catalog = MessageCatalog::from_entries([
        ResourceEntry::from_json(
            "en-US/instance",
            r#"{"name": "Instance", "count": "{count} instances"}"#,
        )
        .unwrap(),
        ResourceEntry::from_json("zh-CN/instance", r#"{"name": "实例"}"#).unwrap(),
    ])
    .unwrap();

    TranslationService::builder()
        .catalog(catalog)
        .supported(SupportedLocales::new([langid!("en-US"), langid!("zh-CN")]))
        .fallback(langid!("en-US"))
        .build()
        .unwrap()
}

#[test]
#[serial]
fn process_wide_context_lifecycle() {
    assert!(context().is_none());
    assert_eq!(current_locale(), None);
    assert_eq!(t("instance.name"), "instance.name");
    assert!(matches!(
        set_locale(&langid!("zh-CN")),
        Err(SetLocaleError::ContextNotSet)
    ));

    set_context(Arc::new(service())).unwrap();
    assert!(set_context(Arc::new(service())).is_err());

    assert_eq!(current_locale(), Some(langid!("en-US")));
    assert_eq!(t("instance.name"), "Instance");

    set_locale(&langid!("zh-CN")).unwrap();
    assert_eq!(t("instance.name"), "实例");
    assert_eq!(
        t_with("instance.count", Some(&FormatArgs::new().with("count", 2))),
        "2 instances"
    );
    assert_eq!(t("instance.missing"), "instance.missing");

    assert!(matches!(
        set_locale(&langid!("ja-JP")),
        Err(SetLocaleError::Localization(
            LocalizationError::LanguageNotSupported(_)
        ))
    ));
    assert_eq!(current_locale(), Some(langid!("zh-CN")));
}
