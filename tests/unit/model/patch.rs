use super::*;
use serde_json::json;

#[test]
fn empty_patch_is_identity() {
    let s = DocumentState::default();
    assert!(DocumentPatch::new().is_empty());
    assert_eq!(s.apply(&DocumentPatch::new()), s);
}

#[test]
fn len_counts_set_fields() {
    let p = DocumentPatch::new().shadow(0).rotation(4.0).image(None);
    assert_eq!(p.len(), 3);
}

#[test]
fn json_null_image_clears_and_missing_image_keeps() {
    let clear: DocumentPatch = serde_json::from_value(json!({ "image": null })).unwrap();
    assert_eq!(clear.image, Some(None));

    let keep: DocumentPatch = serde_json::from_value(json!({ "padding": 3 })).unwrap();
    assert_eq!(keep.image, None);
    assert_eq!(keep.padding, Some(3));

    let with_image = DocumentState::default()
        .apply(&DocumentPatch::new().image(Some(ImageRef::from("x"))));
    assert!(with_image.apply(&keep).image.is_some());
    assert!(with_image.apply(&clear).image.is_none());
}

#[test]
fn serialization_skips_unset_fields() {
    let p = DocumentPatch::new().frame(Frame::Phone).bg_pattern(BgPattern::Cross);
    assert_eq!(
        serde_json::to_value(&p).unwrap(),
        json!({ "frame": "phone", "bgPattern": "cross" })
    );
}
