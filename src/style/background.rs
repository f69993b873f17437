use serde::Serialize;

use crate::foundation::color::Color;
use crate::model::{BgPattern, DocumentState};

/// Repeating decoration laid over the background paint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternFill {
    pub kind: BgPattern,
    pub opacity: f64,
}

impl PatternFill {
    fn ink(&self) -> Color {
        Color::WHITE.with_alpha_scaled(self.opacity)
    }

    /// CSS `background-image` layers.
    pub fn background_image(&self) -> String {
        let c = self.ink();
        match self.kind {
            BgPattern::None => "none".to_owned(),
            BgPattern::Dots => format!("radial-gradient(circle, {c} 1px, transparent 1px)"),
            BgPattern::Grid => format!(
                "linear-gradient({c} 1px, transparent 1px), \
                 linear-gradient(90deg, {c} 1px, transparent 1px)"
            ),
            BgPattern::Lines => format!(
                "repeating-linear-gradient(0deg, {c} 0px, {c} 1px, \
                 transparent 1px, transparent 16px)"
            ),
            BgPattern::Cross => format!(
                "linear-gradient(0deg, transparent 45%, {c} 45%, {c} 55%, transparent 55%), \
                 linear-gradient(90deg, transparent 45%, {c} 45%, {c} 55%, transparent 55%)"
            ),
            BgPattern::Diagonal => format!(
                "repeating-linear-gradient(45deg, {c} 0px, {c} 1px, \
                 transparent 1px, transparent 12px)"
            ),
        }
    }

    /// CSS `background-size` for one tile.
    pub fn background_size(&self) -> &'static str {
        match self.kind {
            BgPattern::Dots => "20px 20px",
            BgPattern::Grid => "24px 24px",
            BgPattern::Cross => "32px 32px",
            BgPattern::None | BgPattern::Lines | BgPattern::Diagonal => "auto",
        }
    }
}

pub fn pattern(state: &DocumentState) -> Option<PatternFill> {
    (state.bg_pattern != BgPattern::None).then_some(PatternFill {
        kind: state.bg_pattern,
        opacity: state.bg_pattern_opacity,
    })
}

/// Film-grain overlay; `bg_noise` is a percentage.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NoiseOverlay {
    pub opacity: f64,
}

pub fn noise(state: &DocumentState) -> Option<NoiseOverlay> {
    (state.bg_noise > 0).then(|| NoiseOverlay {
        opacity: f64::from(state.bg_noise) / 100.0,
    })
}
