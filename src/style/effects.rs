use std::fmt;

use kurbo::Affine;

use crate::foundation::color::Color;
use crate::model::DocumentState;

/// Distance from the viewer used by the tilt term.
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowLayer {
    pub offset_y: f64,
    pub blur: f64,
    pub color: Color,
}

impl fmt::Display for ShadowLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0 {}px {}px {}", self.offset_y, self.blur, self.color)
    }
}

/// Two stacked drop shadows: a wide one and a tighter, lighter one underneath.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxShadow {
    pub layers: [ShadowLayer; 2],
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.layers[0], self.layers[1])
    }
}

/// `None` when the shadow intensity is zero, whatever the color.
pub fn box_shadow(state: &DocumentState) -> Option<BoxShadow> {
    if state.shadow == 0 {
        return None;
    }
    let s = f64::from(state.shadow);
    Some(BoxShadow {
        layers: [
            ShadowLayer {
                offset_y: s,
                blur: s * 2.0,
                color: state.shadow_color,
            },
            ShadowLayer {
                offset_y: s / 2.0,
                blur: s,
                color: state.shadow_color.with_alpha_scaled(0.5),
            },
        ],
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterTerm {
    Brightness(u32),
    Contrast(u32),
    Saturate(u32),
    Blur(u32),
}

impl fmt::Display for FilterTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brightness(v) => write!(f, "brightness({v}%)"),
            Self::Contrast(v) => write!(f, "contrast({v}%)"),
            Self::Saturate(v) => write!(f, "saturate({v}%)"),
            Self::Blur(v) => write!(f, "blur({v}px)"),
        }
    }
}

/// Image adjustments in application order. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterChain {
    pub terms: Vec<FilterTerm>,
}

impl fmt::Display for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.terms)
    }
}

/// Only adjustments away from neutral (100% / 0px) produce a term.
pub fn filter(state: &DocumentState) -> Option<FilterChain> {
    let candidates = [
        (state.brightness != 100).then_some(FilterTerm::Brightness(state.brightness)),
        (state.contrast != 100).then_some(FilterTerm::Contrast(state.contrast)),
        (state.saturation != 100).then_some(FilterTerm::Saturate(state.saturation)),
        (state.blur != 0).then_some(FilterTerm::Blur(state.blur)),
    ];
    let terms: Vec<FilterTerm> = candidates.into_iter().flatten().collect();
    (!terms.is_empty()).then_some(FilterChain { terms })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformTerm {
    Tilt {
        perspective_px: f64,
        x_deg: f64,
        y_deg: f64,
    },
    Scale(f64),
    Rotate(f64),
}

impl fmt::Display for TransformTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tilt {
                perspective_px,
                x_deg,
                y_deg,
            } => write!(
                f,
                "perspective({perspective_px}px) rotateX({x_deg}deg) rotateY({y_deg}deg)"
            ),
            Self::Scale(k) => write!(f, "scale({k})"),
            Self::Rotate(deg) => write!(f, "rotate({deg}deg)"),
        }
    }
}

/// Transform terms, always ordered tilt, scale, rotate.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformChain {
    pub terms: Vec<TransformTerm>,
}

impl TransformChain {
    /// The in-plane part (scale then rotate) for raster backends without perspective support.
    pub fn planar_affine(&self) -> Affine {
        self.terms
            .iter()
            .fold(Affine::IDENTITY, |acc, term| match *term {
                TransformTerm::Tilt { .. } => acc,
                TransformTerm::Scale(k) => acc * Affine::scale(k),
                TransformTerm::Rotate(deg) => acc * Affine::rotate(deg.to_radians()),
            })
    }

    pub fn has_tilt(&self) -> bool {
        self.terms
            .iter()
            .any(|t| matches!(t, TransformTerm::Tilt { .. }))
    }
}

impl fmt::Display for TransformChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.terms)
    }
}

pub fn transform(state: &DocumentState) -> Option<TransformChain> {
    let mut terms = Vec::with_capacity(3);
    if state.tilt_x != 0.0 || state.tilt_y != 0.0 {
        terms.push(TransformTerm::Tilt {
            perspective_px: TILT_PERSPECTIVE_PX,
            x_deg: state.tilt_x,
            y_deg: state.tilt_y,
        });
    }
    if state.scale != 1.0 {
        terms.push(TransformTerm::Scale(state.scale));
    }
    if state.rotation != 0.0 {
        terms.push(TransformTerm::Rotate(state.rotation));
    }
    (!terms.is_empty()).then_some(TransformChain { terms })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderStyle {
    pub width: u32,
    pub color: Color,
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px solid {}", self.width, self.color)
    }
}

pub fn border(state: &DocumentState) -> Option<BorderStyle> {
    (state.border_width > 0).then_some(BorderStyle {
        width: state.border_width,
        color: state.border_color,
    })
}

super::serialize_as_css!(BoxShadow, FilterChain, TransformChain, BorderStyle);

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/style/effects.rs"]
mod tests;
