use super::*;
use crate::model::{DocumentPatch, Frame};

fn with_image(patch: DocumentPatch) -> DocumentState {
    DocumentState::default()
        .apply(&DocumentPatch::new().image(Some(ImageRef::from("data:image/png;base64,AAAA"))))
        .apply(&patch)
}

#[test]
fn no_image_no_tree() {
    assert!(render_tree(&DocumentState::default()).is_none());
}

#[test]
fn default_tree_has_image_shadow_and_watermark() {
    let tree = render_tree(&with_image(DocumentPatch::new())).unwrap();
    assert_eq!(
        tree.canvas.background,
        "linear-gradient(135deg, #667eea 0%, #764ba2 100%)"
    );
    assert_eq!(tree.canvas.padding, 64);
    assert_eq!(tree.canvas.size, None);
    assert_eq!(tree.image.radius, 12);
    assert!(tree.image.shadow.is_some());
    assert!(tree.wrapper_shadow.is_none());
    assert!(tree.image.filter.is_none());
    assert!(tree.transform.is_none());
    assert!(!tree.has_text());
    assert!(tree.reflection.is_none());
    assert_eq!(tree.watermark.unwrap().label, "SnapFrame");
}

#[test]
fn framed_image_moves_shadow_to_wrapper() {
    let tree = render_tree(&with_image(DocumentPatch::new().frame(Frame::Macos))).unwrap();
    assert_eq!(tree.image.radius, 0);
    assert!(tree.image.shadow.is_none());
    assert!(tree.wrapper_shadow.is_some());
}

#[test]
fn empty_text_is_omitted_and_non_empty_text_rendered() {
    let tree = render_tree(&with_image(
        DocumentPatch::new().subtitle_text("made with rust".to_string()),
    ))
    .unwrap();
    assert!(tree.title.is_none());
    let sub = tree.subtitle.unwrap();
    assert_eq!(sub.size_px, 16);
    assert_eq!(sub.weight, 400);
    assert_eq!(sub.font_family, "Inter");
}

#[test]
fn pro_document_has_no_watermark() {
    let tree = render_tree(&with_image(DocumentPatch::new().is_pro(true))).unwrap();
    assert!(tree.watermark.is_none());
}

#[test]
fn aspect_ratio_fixes_canvas_size() {
    let tree = render_tree(&with_image(
        DocumentPatch::new().aspect_ratio(crate::model::AspectRatio::Square),
    ))
    .unwrap();
    assert_eq!(tree.canvas.size, Some(Size::new(1080.0, 1080.0)));
}

#[test]
fn tree_serializes_css_strings() {
    let tree = render_tree(&with_image(DocumentPatch::new().reflection(true))).unwrap();
    let v = serde_json::to_value(&tree).unwrap();
    assert_eq!(
        v["image"]["shadow"],
        serde_json::json!("0 40px 80px rgba(0,0,0,0.5), 0 20px 40px rgba(0,0,0,0.25)")
    );
    assert_eq!(v["frame"]["wrapperRadius"], serde_json::json!(12));
    assert!(v["reflection"].is_object());
}

#[test]
fn derivation_is_deterministic() {
    let s = with_image(DocumentPatch::new().tilt_x(3.0).brightness(80).shadow(12));
    assert_eq!(render_tree(&s), render_tree(&s));
}
