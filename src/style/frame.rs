use kurbo::Size;
use serde::Serialize;

use crate::foundation::color::Color;
use crate::model::{DocumentState, Frame};

/// macOS-style close / minimize / zoom dots.
pub const TRAFFIC_LIGHTS: [Color; 3] = [
    Color::from_hex(0xff5f56),
    Color::from_hex(0xffbd2e),
    Color::from_hex(0x27c93f),
];

pub const PHONE_MIN_RADIUS: u32 = 28;
pub const PHONE_SCREEN_MIN_RADIUS: u32 = 24;
pub const PHONE_BEZEL_PX: u32 = 8;
pub const PHONE_MAX_CONTENT_WIDTH: u32 = 320;
const WINDOW_RADIUS_EXTRA: u32 = 4;

/// Window title bar drawn above the screenshot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleBar {
    pub background: Color,
    pub dots: [Color; 3],
    /// Fake URL field with a `https://` hint.
    pub address_bar: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneChrome {
    pub body: Color,
    pub bezel_px: u32,
    pub notch: Size,
    pub home_indicator: Size,
}

/// Fixed decoration per frame kind; it never depends on the document.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FrameChrome {
    TitleBar(TitleBar),
    Phone(PhoneChrome),
}

impl FrameChrome {
    pub fn for_frame(frame: Frame) -> Option<Self> {
        match frame {
            Frame::None => None,
            Frame::Browser => Some(Self::TitleBar(TitleBar {
                background: Color::from_hex(0x1e1e2e),
                dots: TRAFFIC_LIGHTS,
                address_bar: true,
            })),
            Frame::Macos => Some(Self::TitleBar(TitleBar {
                background: Color::from_hex(0xe8e8e8),
                dots: TRAFFIC_LIGHTS,
                address_bar: false,
            })),
            Frame::Phone => Some(Self::Phone(PhoneChrome {
                body: Color::from_hex(0x1a1a2e),
                bezel_px: PHONE_BEZEL_PX,
                notch: Size::new(96.0, 20.0),
                home_indicator: Size::new(112.0, 4.0),
            })),
        }
    }
}

/// Corner radii and decoration for the element wrapping the screenshot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameGeometry {
    pub frame: Frame,
    /// Radius of the outermost element, the one that carries the shadow.
    pub wrapper_radius: u32,
    /// Radius of the area the screenshot is clipped to.
    pub screen_radius: u32,
    /// Radius applied to the image element itself; zero inside a frame.
    pub image_radius: u32,
    pub max_content_width: Option<u32>,
    pub chrome: Option<FrameChrome>,
}

impl FrameGeometry {
    /// Unframed screenshots carry their own shadow.
    pub fn shadow_on_wrapper(&self) -> bool {
        self.frame != Frame::None
    }
}

pub fn frame_geometry(state: &DocumentState) -> FrameGeometry {
    let r = state.border_radius;
    let chrome = FrameChrome::for_frame(state.frame);
    match state.frame {
        Frame::None => FrameGeometry {
            frame: Frame::None,
            wrapper_radius: r,
            screen_radius: r,
            image_radius: r,
            max_content_width: None,
            chrome,
        },
        Frame::Browser | Frame::Macos => FrameGeometry {
            frame: state.frame,
            wrapper_radius: r.saturating_add(WINDOW_RADIUS_EXTRA),
            screen_radius: r.saturating_add(WINDOW_RADIUS_EXTRA),
            image_radius: 0,
            max_content_width: None,
            chrome,
        },
        Frame::Phone => FrameGeometry {
            frame: Frame::Phone,
            wrapper_radius: r.max(PHONE_MIN_RADIUS).saturating_add(PHONE_BEZEL_PX),
            screen_radius: r.max(PHONE_SCREEN_MIN_RADIUS),
            image_radius: 0,
            max_content_width: Some(PHONE_MAX_CONTENT_WIDTH),
            chrome,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/frame.rs"]
mod tests;
