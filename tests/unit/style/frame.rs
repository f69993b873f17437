use super::*;
use crate::model::DocumentPatch;

fn geometry(frame: Frame, radius: u32) -> FrameGeometry {
    frame_geometry(
        &DocumentState::default().apply(&DocumentPatch::new().frame(frame).border_radius(radius)),
    )
}

#[test]
fn phone_radius_is_floored() {
    let g = geometry(Frame::Phone, 4);
    assert_eq!(g.wrapper_radius, 36);
    assert_eq!(g.screen_radius, 24);
    assert_eq!(g.image_radius, 0);
    assert_eq!(g.max_content_width, Some(320));

    assert_eq!(geometry(Frame::Phone, 0).wrapper_radius, 36);
    assert_eq!(geometry(Frame::Phone, 40).wrapper_radius, 48);
    assert_eq!(geometry(Frame::Phone, 40).screen_radius, 40);
}

#[test]
fn window_frames_add_four() {
    for frame in [Frame::Browser, Frame::Macos] {
        let g = geometry(frame, 12);
        assert_eq!(g.wrapper_radius, 16);
        assert_eq!(g.image_radius, 0);
        assert!(g.shadow_on_wrapper());
    }
}

#[test]
fn unframed_image_keeps_user_radius() {
    let g = geometry(Frame::None, 9);
    assert_eq!(g.image_radius, 9);
    assert!(g.chrome.is_none());
    assert!(!g.shadow_on_wrapper());
}

#[test]
fn chrome_is_fixed_per_frame() {
    let Some(FrameChrome::TitleBar(browser)) = geometry(Frame::Browser, 0).chrome else {
        panic!("browser frame should have a title bar");
    };
    assert!(browser.address_bar);
    assert_eq!(browser.dots, TRAFFIC_LIGHTS);

    let Some(FrameChrome::TitleBar(mac)) = geometry(Frame::Macos, 30).chrome else {
        panic!("macos frame should have a title bar");
    };
    assert!(!mac.address_bar);
    assert_eq!(mac.dots, TRAFFIC_LIGHTS);

    assert_eq!(
        geometry(Frame::Phone, 1).chrome,
        geometry(Frame::Phone, 44).chrome
    );
}
