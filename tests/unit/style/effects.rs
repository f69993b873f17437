use super::*;
use crate::model::DocumentPatch;

fn state(patch: DocumentPatch) -> DocumentState {
    DocumentState::default().apply(&patch)
}

#[test]
fn default_shadow_uses_two_layers() {
    let shadow = box_shadow(&DocumentState::default()).unwrap();
    assert_eq!(
        shadow.to_string(),
        "0 40px 80px rgba(0,0,0,0.5), 0 20px 40px rgba(0,0,0,0.25)"
    );
}

#[test]
fn odd_shadow_keeps_half_pixel_offset() {
    let shadow = box_shadow(&state(
        DocumentPatch::new()
            .shadow(25)
            .shadow_color(Color::rgba(139, 92, 246, 0.4)),
    ))
    .unwrap();
    assert_eq!(
        shadow.to_string(),
        "0 25px 50px rgba(139,92,246,0.4), 0 12.5px 25px rgba(139,92,246,0.2)"
    );
}

#[test]
fn zero_shadow_is_suppressed_for_any_color() {
    for color in [Color::BLACK, Color::rgba(236, 72, 153, 0.4), Color::TRANSPARENT] {
        let s = state(DocumentPatch::new().shadow(0).shadow_color(color));
        assert!(box_shadow(&s).is_none());
    }
}

#[test]
fn neutral_adjustments_produce_no_filter() {
    assert!(filter(&DocumentState::default()).is_none());
}

#[test]
fn each_adjustment_yields_exactly_one_term() {
    let cases = [
        (DocumentPatch::new().brightness(120), "brightness(120%)"),
        (DocumentPatch::new().contrast(80), "contrast(80%)"),
        (DocumentPatch::new().saturation(0), "saturate(0%)"),
        (DocumentPatch::new().blur(3), "blur(3px)"),
    ];
    for (patch, expected) in cases {
        let chain = filter(&state(patch)).unwrap();
        assert_eq!(chain.terms.len(), 1);
        assert_eq!(chain.to_string(), expected);
    }
}

#[test]
fn filter_terms_keep_fixed_order() {
    let chain = filter(&state(
        DocumentPatch::new().blur(2).saturation(150).brightness(90),
    ))
    .unwrap();
    assert_eq!(chain.to_string(), "brightness(90%) saturate(150%) blur(2px)");
}

#[test]
fn identity_transform_is_absent() {
    assert!(transform(&DocumentState::default()).is_none());
}

#[test]
fn transform_orders_tilt_scale_rotate() {
    let chain = transform(&state(
        DocumentPatch::new()
            .rotation(-5.0)
            .scale(0.9)
            .tilt_x(8.0)
            .tilt_y(-6.0),
    ))
    .unwrap();
    assert_eq!(
        chain.to_string(),
        "perspective(1000px) rotateX(8deg) rotateY(-6deg) scale(0.9) rotate(-5deg)"
    );
    assert!(chain.has_tilt());
}

#[test]
fn tilt_on_one_axis_still_emits_tilt_term() {
    let chain = transform(&state(DocumentPatch::new().tilt_y(12.0))).unwrap();
    assert_eq!(chain.terms.len(), 1);
    assert_eq!(
        chain.to_string(),
        "perspective(1000px) rotateX(0deg) rotateY(12deg)"
    );
}

#[test]
fn planar_affine_ignores_tilt() {
    let chain = transform(&state(DocumentPatch::new().tilt_x(10.0).scale(2.0))).unwrap();
    assert_eq!(chain.planar_affine(), Affine::scale(2.0));

    let chain = transform(&state(DocumentPatch::new().tilt_x(10.0))).unwrap();
    assert_eq!(chain.planar_affine(), Affine::IDENTITY);
}

#[test]
fn border_only_when_width_positive() {
    assert!(border(&DocumentState::default()).is_none());
    let b = border(&state(
        DocumentPatch::new()
            .border_width(2)
            .border_color(Color::from_hex(0xec4899)),
    ))
    .unwrap();
    assert_eq!(b.to_string(), "2px solid #ec4899");
}

#[test]
fn css_styles_serialize_as_strings() {
    let v = serde_json::to_value(filter(&state(DocumentPatch::new().blur(1))).unwrap()).unwrap();
    assert_eq!(v, serde_json::json!("blur(1px)"));
}
