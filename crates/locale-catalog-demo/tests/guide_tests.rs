use locale_catalog::{MessageCatalog, SupportedLocales, TranslationService};
use locale_catalog_demo::{DialogPosition, GuideData, StepType};
use unic_langid::langid;

const GUIDE: &str = r##"{
    "name": "add-instance",
    "steps": [
        {
            "type": "click",
            "title": {"en-US": "Add an instance", "zh-CN": "添加实例"},
            "description": {"en-US": "Click the button to begin."},
            "selectors": [["#add-instance"]],
            "position": "right"
        },
        {
            "type": "change",
            "title": "Host",
            "description": {"en-US": "Type the host", "zh-CN": "填写主机"},
            "selectors": [["#host", "input"]],
            "url": "/instance/new",
            "value": "^.+$",
            "hideNextButton": true
        }
    ]
}"##;

fn service() -> TranslationService {
    TranslationService::builder()
        .catalog(MessageCatalog::default())
        .supported(SupportedLocales::new([langid!("en-US"), langid!("zh-CN")]))
        .fallback(langid!("en-US"))
        .build()
        .unwrap()
}

#[test]
fn guide_text_follows_the_active_locale() {
    let guide = GuideData::from_json(GUIDE).unwrap();
    let service = service();
    let [first, second] = guide.steps.as_slice() else {
        panic!("expected two steps");
    };

    assert_eq!(first.step_type, StepType::Click);
    assert_eq!(first.position(), DialogPosition::Right);
    assert_eq!(first.title.localize(&service), Some("Add an instance"));

    service.set_locale(&langid!("zh-CN")).unwrap();
    assert_eq!(first.title.localize(&service), Some("添加实例"));
    assert_eq!(
        first.description.localize(&service),
        Some("Click the button to begin.")
    );
    assert_eq!(second.title.localize(&service), Some("Host"));
    assert_eq!(second.description.localize(&service), Some("填写主机"));
    assert_eq!(second.hide_next_button, Some(true));
}
