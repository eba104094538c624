use image_contents::caption::caption_model::CaptionRecord;
use image_contents::caption::loader::{load_caption_seeds, seeded_cache};
use image_contents::caption::storage::{CaptionCache, LruCaptionCache};
use image_contents::contents::error::ContentsError;
use image_contents::element::element_model::{ElementNode, ResourceId};
use image_contents::element::identity::element_key;
use image_contents::element::snapshot::load_snapshot;
use image_contents::label::label_model::Label;
use image_contents::label::loader::{load_label_store, load_labels};
use image_contents::label::store::{InMemoryLabelStore, LabelStore};
use image_contents::Locale;

use crate::common::fixtures::{image_button, locale, temp_file};

mod common;

// =========================================================================
// Locale parsing
// =========================================================================

#[test]
fn locale_normalizes_tags() {
    assert_eq!(Locale::parse("en").unwrap().as_str(), "en");
    assert_eq!(Locale::parse("en_us").unwrap().as_str(), "en-US");
    assert_eq!(Locale::parse("EN-gb").unwrap().as_str(), "en-GB");
    assert_eq!(Locale::parse("zh-hant-tw").unwrap().as_str(), "zh-Hant-TW");
    assert_eq!(Locale::parse("es-419").unwrap().as_str(), "es-419");
    assert_eq!(Locale::parse("pt_BR").unwrap().language(), "pt");
}

#[test]
fn locale_rejects_garbage() {
    assert_eq!(Locale::parse(""), None, "Empty");
    assert_eq!(Locale::parse("e"), None, "Too short");
    assert_eq!(Locale::parse("en-"), None, "Trailing separator");
    assert_eq!(Locale::parse("12"), None, "Digits");
    assert!("en US".parse::<Locale>().is_err(), "Space in tag");
}

// =========================================================================
// Resource ids and element identity
// =========================================================================

#[test]
fn resource_id_parsing() {
    let id = ResourceId::parse("com.example:id/play").unwrap();
    assert_eq!(id.package_name, "com.example");
    assert_eq!(id.view_name, "play");
    assert_eq!(id.to_string(), "com.example:id/play");

    assert_eq!(ResourceId::parse("play"), None, "Bare name");
    assert_eq!(ResourceId::parse("com.example:string/play"), None, "Not an id");
    assert_eq!(ResourceId::parse(":id/play"), None, "No package");
    assert_eq!(ResourceId::parse("com.example:id/"), None, "No name");
}

#[test]
fn element_key_depends_on_identity_not_text() {
    let a = image_button(1, "play");
    let b = image_button(1, "play").with_text("changed");
    let c = image_button(2, "play");

    assert_eq!(element_key(&a), element_key(&b), "Text does not affect identity");
    assert_ne!(element_key(&a), element_key(&c), "Node id does");
    assert_eq!(element_key(&a).0.len(), 40, "SHA-1 hex digest");
}

// =========================================================================
// InMemoryLabelStore
// =========================================================================

#[test]
fn label_store_lookup_and_ids() {
    let mut store = InMemoryLabelStore::new();
    store.insert(Label::new("com.example", "play", "Play"));
    store.insert(Label::new("com.example", "stop", "Stop"));

    let play = store.find_label_by_element_id("com.example:id/play").unwrap();
    let stop = store.find_label_by_element_id("com.example:id/stop").unwrap();
    assert_eq!(play.text.as_deref(), Some("Play"));
    assert_ne!(play.id, stop.id, "Ids are assigned");

    assert!(store.find_label_by_element_id("play").is_none(), "Unparseable id");
    assert!(store.find_label_by_element_id("other.app:id/play").is_none(), "Other package");
}

#[test]
fn label_store_replace_and_remove() {
    let mut store = InMemoryLabelStore::new();
    store.insert(Label::new("com.example", "play", "Play"));
    let old = store.insert(Label::new("com.example", "play", "Start"));

    assert_eq!(old.and_then(|l| l.text), Some("Play".into()));
    assert_eq!(store.len(), 1);

    let id = ResourceId::parse("com.example:id/play").unwrap();
    assert!(store.remove(&id).is_some());
    assert!(store.is_empty());
}

#[test]
fn element_needs_label_rules() {
    let store = InMemoryLabelStore::from_labels(vec![Label::new("com.example.player", "play", "Play")]);

    assert!(store.element_needs_label(&image_button(1, "shuffle")), "Unlabeled image button");
    assert!(!store.element_needs_label(&image_button(2, "play")), "Has a label");
    assert!(
        !store.element_needs_label(&image_button(3, "shuffle").with_content_description("Shuffle")),
        "Has its own description"
    );
    assert!(
        !store.element_needs_label(&image_button(4, "shuffle").with_text("Shuffle")),
        "Has its own text"
    );
    assert!(
        store.element_needs_label(&image_button(5, "shuffle").with_text("   ")),
        "Whitespace text does not count"
    );
    assert!(
        !store.element_needs_label(&ElementNode::new(1, 6).with_class_name("android.widget.ImageView")),
        "No view id, cannot be labeled"
    );
}

#[test]
fn load_labels_from_yaml_and_json() {
    let yaml = temp_file(
        "labels.yaml",
        "labels:\n  - package_name: com.example\n    view_name: play\n    text: Play\n  - package_name: com.example\n    view_name: stop\n    text: Stop\n    locale: en\n",
    );
    let labels = load_labels(&yaml).unwrap();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[1].locale.as_deref(), Some("en"));

    let json = temp_file(
        "labels.json",
        r#"[{"package_name": "com.example", "view_name": "play", "text": "Play", "id": 7}]"#,
    );
    let store = load_label_store(&json).unwrap();
    let label = store.find_label_by_element_id("com.example:id/play").unwrap();
    assert_eq!(label.id, 7);
}

#[test]
fn loaders_report_errors() {
    match load_labels("/nonexistent/labels.json") {
        Err(ContentsError::Io { path, .. }) => assert_eq!(path, "/nonexistent/labels.json"),
        other => panic!("Expected Io error, got {:?}", other),
    }

    assert!(matches!(
        load_labels("labels.txt"),
        Err(ContentsError::UnsupportedFormat(_))
    ));

    let bad = temp_file("bad.json", "{ not json");
    assert!(matches!(load_snapshot(&bad), Err(ContentsError::JsonParse { .. })));
}

// =========================================================================
// LruCaptionCache
// =========================================================================

#[test]
fn caption_cache_lookups() {
    let el = image_button(1, "gear");
    let mut cache = LruCaptionCache::default();
    cache.put_ocr_text(&el, "CFG");
    cache.put_localized_icon_label(&el, locale("de"), "Einstellungen");

    let record = cache.lookup_caption(&el).unwrap();
    assert_eq!(record.ocr_text.as_deref(), Some("CFG"));
    assert_eq!(record.detected_icon_label, None);
    assert_eq!(
        cache.lookup_icon_label_for_locale(&locale("de"), &el),
        Some("Einstellungen".into())
    );
    assert_eq!(cache.lookup_icon_label_for_locale(&locale("de-AT"), &el), None, "Exact locale only");
    assert_eq!(cache.len(), 1);
}

#[test]
fn caption_cache_refresh_creates_record() {
    let el = image_button(1, "gear");
    let mut cache = LruCaptionCache::default();
    cache.refresh_icon_label(&el, "Settings");

    assert!(cache.contains(&el));
    assert_eq!(
        cache.lookup_caption(&el).and_then(|r| r.detected_icon_label),
        Some("Settings".into())
    );
}

#[test]
fn caption_cache_evicts_least_recent() {
    let a = image_button(1, "a");
    let b = image_button(2, "b");
    let c = image_button(3, "c");
    let mut cache = LruCaptionCache::new(2);
    cache.insert(&a, CaptionRecord::default().with_ocr_text("A"));
    cache.insert(&b, CaptionRecord::default().with_ocr_text("B"));

    // Refresh promotes `a`, so `b` is evicted next.
    cache.refresh_icon_label(&a, "Alpha");
    cache.insert(&c, CaptionRecord::default().with_ocr_text("C"));

    assert!(cache.contains(&a));
    assert!(!cache.contains(&b));
    assert!(cache.contains(&c));
}

#[test]
fn caption_cache_lookups_keep_recency() {
    let a = image_button(1, "a");
    let b = image_button(2, "b");
    let c = image_button(3, "c");
    let mut cache = LruCaptionCache::new(2);
    cache.insert(&a, CaptionRecord::default().with_localized_icon_label(locale("en"), "Alpha"));
    cache.insert(&b, CaptionRecord::default().with_ocr_text("B"));

    // Reads of `a` must not save it from eviction.
    assert!(cache.lookup_caption(&a).is_some());
    assert_eq!(cache.lookup_icon_label_for_locale(&locale("en"), &a), Some("Alpha".into()));
    cache.insert(&c, CaptionRecord::default().with_ocr_text("C"));

    assert!(!cache.contains(&a), "Least recently written entry is evicted");
    assert!(cache.contains(&b));
    assert!(cache.contains(&c));
}

#[test]
fn caption_cache_zero_capacity_holds_one() {
    let mut cache = LruCaptionCache::new(0);
    assert_eq!(cache.capacity(), 1);
    cache.put_ocr_text(&image_button(1, "a"), "A");
    cache.put_ocr_text(&image_button(2, "b"), "B");
    assert_eq!(cache.len(), 1);
}

#[test]
fn caption_cache_clear_all() {
    let mut cache = LruCaptionCache::default();
    cache.put_ocr_text(&image_button(1, "a"), "A");
    cache.put_ocr_text(&image_button(2, "b"), "B");
    cache.clear_all();
    assert!(cache.is_empty());
}

#[test]
fn caption_seeds_load_into_cache() {
    let path = temp_file(
        "captions.json",
        r#"{"captions": [
            {"element": {"windowId": 1, "nodeId": 3, "viewId": "com.example.player:id/sign"},
             "ocrText": "STOP"},
            {"element": {"windowId": 1, "nodeId": 4, "viewId": "com.example.player:id/gear"},
             "detectedIconLabel": "Settings",
             "localizedIconLabels": {"fr_FR": "Paramètres"}}
        ]}"#,
    );
    let seeds = load_caption_seeds(&path).unwrap();
    assert_eq!(seeds.len(), 2);

    let cache = seeded_cache(seeds, 10);
    let sign = ElementNode::new(1, 3).with_view_id("com.example.player:id/sign");
    let gear = ElementNode::new(1, 4).with_view_id("com.example.player:id/gear");

    assert_eq!(cache.lookup_caption(&sign).and_then(|r| r.ocr_text), Some("STOP".into()));
    assert_eq!(
        cache.lookup_icon_label_for_locale(&locale("fr-FR"), &gear),
        Some("Paramètres".into()),
        "Seed locale keys are normalized"
    );
}

#[test]
fn snapshot_loads_elements() {
    let path = temp_file(
        "snapshot.json",
        r#"[
            {"windowId": 1, "nodeId": 1, "viewId": "com.example:id/play",
             "className": "android.widget.ImageButton", "clickable": true,
             "bounds": {"left": 0, "top": 0, "right": 48, "bottom": 48}},
            {"nodeId": 2, "text": "Now playing"}
        ]"#,
    );
    let elements = load_snapshot(&path).unwrap();
    assert_eq!(elements.len(), 2);
    assert!(elements[0].clickable);
    assert_eq!(elements[0].bounds.right, 48);
    assert_eq!(elements[1].window_id, 0, "Defaults apply");
    assert_eq!(elements[1].view_id, None);
}
