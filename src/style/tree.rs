use kurbo::Size;
use serde::Serialize;

use crate::foundation::color::Color;
use crate::model::{DocumentState, ImageRef, TitlePosition};
use crate::presets;
use crate::style::{
    BorderStyle, BoxShadow, FilterChain, FrameGeometry, NoiseOverlay, PatternFill, TransformChain,
    border, box_shadow, filter, frame_geometry, noise, pattern, transform,
};

pub const WATERMARK_LABEL: &str = "SnapFrame";
const TITLE_WEIGHT: u16 = 700;
const SUBTITLE_WEIGHT: u16 = 400;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasStyle {
    /// CSS `background` value.
    pub background: String,
    pub padding: u32,
    /// Fixed output size, `None` when the canvas hugs its content.
    pub size: Option<Size>,
    pub pattern: Option<PatternFill>,
    pub noise: Option<NoiseOverlay>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    pub text: String,
    pub size_px: u32,
    pub color: Color,
    pub font_family: &'static str,
    pub weight: u16,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    pub source: ImageRef,
    pub radius: u32,
    pub shadow: Option<BoxShadow>,
    pub filter: Option<FilterChain>,
    pub border: Option<BorderStyle>,
}

/// Mirrored copy under the screenshot, faded towards the bottom.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    pub opacity: f64,
    pub mask: &'static str,
}

impl Default for Reflection {
    fn default() -> Self {
        Self {
            opacity: 0.3,
            mask: "linear-gradient(to bottom, rgba(0,0,0,0.4), transparent 60%)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Watermark {
    pub label: &'static str,
    pub badge_from: Color,
    pub badge_to: Color,
}

impl Default for Watermark {
    fn default() -> Self {
        Self {
            label: WATERMARK_LABEL,
            badge_from: Color::from_hex(0x8b5cf6),
            badge_to: Color::from_hex(0xec4899),
        }
    }
}

/// Everything a compositor needs to draw one document, from back to front.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualTree {
    pub canvas: CanvasStyle,
    pub title: Option<TextBlock>,
    pub subtitle: Option<TextBlock>,
    pub text_position: TitlePosition,
    pub frame: FrameGeometry,
    /// Shadow on the frame wrapper; unframed images carry theirs in [`ImageNode::shadow`].
    pub wrapper_shadow: Option<BoxShadow>,
    pub transform: Option<TransformChain>,
    pub image: ImageNode,
    pub reflection: Option<Reflection>,
    pub watermark: Option<Watermark>,
}

impl VisualTree {
    pub fn has_text(&self) -> bool {
        self.title.is_some() || self.subtitle.is_some()
    }
}

/// `None` until an image is loaded.
pub fn render_tree(state: &DocumentState) -> Option<VisualTree> {
    let source = state.image.clone()?;

    let frame = frame_geometry(state);
    let shadow = box_shadow(state);
    let (wrapper_shadow, image_shadow) = if frame.shadow_on_wrapper() {
        (shadow, None)
    } else {
        (None, shadow)
    };

    Some(VisualTree {
        canvas: CanvasStyle {
            background: state.background.paint.to_css(),
            padding: state.padding,
            size: presets::aspect(state.aspect_ratio).size(),
            pattern: pattern(state),
            noise: noise(state),
        },
        title: text_block(
            &state.title_text,
            state.title_size,
            state.title_color,
            state.title_font.css_family(),
            TITLE_WEIGHT,
        ),
        subtitle: text_block(
            &state.subtitle_text,
            state.subtitle_size,
            state.subtitle_color,
            state.title_font.css_family(),
            SUBTITLE_WEIGHT,
        ),
        text_position: state.title_position,
        frame,
        wrapper_shadow,
        transform: transform(state),
        image: ImageNode {
            source,
            radius: frame.image_radius,
            shadow: image_shadow,
            filter: filter(state),
            border: border(state),
        },
        reflection: state.reflection.then(Reflection::default),
        watermark: state.watermark.then(Watermark::default),
    })
}

fn text_block(
    text: &str,
    size_px: u32,
    color: Color,
    font_family: &'static str,
    weight: u16,
) -> Option<TextBlock> {
    (!text.is_empty()).then(|| TextBlock {
        text: text.to_owned(),
        size_px,
        color,
        font_family,
        weight,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/style/tree.rs"]
mod tests;
