pub mod paint;
pub mod patch;

use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;

pub use paint::{Background, BackgroundId, GradientStop, ImageRef, Paint};
pub use patch::DocumentPatch;

/// Device chrome drawn around the screenshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frame {
    #[default]
    None,
    Browser,
    Macos,
    Phone,
}

impl Frame {
    pub const ALL: [Self; 4] = [Self::None, Self::Browser, Self::Macos, Self::Phone];

    pub fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Browser => "browser",
            Self::Macos => "macos",
            Self::Phone => "phone",
        }
    }
}

/// Output canvas shape. `Auto` sizes the canvas to its content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "9:16")]
    Story,
    #[serde(rename = "og")]
    OpenGraph,
    #[serde(rename = "twitter")]
    Twitter,
    #[serde(rename = "linkedin")]
    LinkedIn,
    #[serde(rename = "ph")]
    ProductHunt,
}

impl AspectRatio {
    pub fn id(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Widescreen => "16:9",
            Self::Standard => "4:3",
            Self::Square => "1:1",
            Self::Story => "9:16",
            Self::OpenGraph => "og",
            Self::Twitter => "twitter",
            Self::LinkedIn => "linkedin",
            Self::ProductHunt => "ph",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BgPattern {
    #[default]
    None,
    Dots,
    Grid,
    Lines,
    Cross,
    Diagonal,
}

impl BgPattern {
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Dots,
        Self::Grid,
        Self::Lines,
        Self::Cross,
        Self::Diagonal,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Dots => "dots",
            Self::Grid => "grid",
            Self::Lines => "lines",
            Self::Cross => "cross",
            Self::Diagonal => "diagonal",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitlePosition {
    #[default]
    Above,
    Below,
    Center,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TitleFont {
    #[default]
    Inter,
    Georgia,
    #[serde(rename = "monospace")]
    Monospace,
    #[serde(rename = "system-ui")]
    SystemUi,
}

impl TitleFont {
    pub fn css_family(self) -> &'static str {
        match self {
            Self::Inter => "Inter",
            Self::Georgia => "Georgia",
            Self::Monospace => "monospace",
            Self::SystemUi => "system-ui",
        }
    }
}

/// One complete, immutable snapshot of the editor document.
///
/// Field ranges (shadow 0..=100, tilt within ±30, rotation within ±15, ...) are what the
/// controls produce; the model stores whatever it is given and leaves clamping to renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentState {
    pub image: Option<ImageRef>,
    pub file_name: String,

    // background
    pub background: Background,
    pub custom_bg_color1: Color,
    pub custom_bg_color2: Color,
    pub bg_angle: f64,
    pub bg_pattern: BgPattern,
    pub bg_pattern_opacity: f64,
    pub bg_noise: u32,

    // layout
    pub padding: u32,
    pub border_radius: u32,
    pub aspect_ratio: AspectRatio,

    // effects
    pub shadow: u32,
    pub shadow_color: Color,
    pub frame: Frame,
    pub tilt_x: f64,
    pub tilt_y: f64,
    pub scale: f64,
    pub rotation: f64,
    pub reflection: bool,

    // adjustments, percentages except blur (px)
    pub brightness: u32,
    pub contrast: u32,
    pub saturation: u32,
    pub blur: u32,

    pub border_width: u32,
    pub border_color: Color,

    // text overlay
    pub title_text: String,
    pub title_size: u32,
    pub title_color: Color,
    pub title_font: TitleFont,
    pub title_position: TitlePosition,
    pub subtitle_text: String,
    pub subtitle_size: u32,
    pub subtitle_color: Color,

    pub watermark: bool,
    pub is_pro: bool,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self {
            image: None,
            file_name: String::new(),
            background: crate::presets::default_background(),
            custom_bg_color1: Color::from_hex(0x667eea),
            custom_bg_color2: Color::from_hex(0x764ba2),
            bg_angle: 135.0,
            bg_pattern: BgPattern::None,
            bg_pattern_opacity: 0.1,
            bg_noise: 0,
            padding: 64,
            border_radius: 12,
            aspect_ratio: AspectRatio::Auto,
            shadow: 40,
            shadow_color: Color::rgba(0, 0, 0, 0.5),
            frame: Frame::None,
            tilt_x: 0.0,
            tilt_y: 0.0,
            scale: 1.0,
            rotation: 0.0,
            reflection: false,
            brightness: 100,
            contrast: 100,
            saturation: 100,
            blur: 0,
            border_width: 0,
            border_color: Color::rgba(255, 255, 255, 0.2),
            title_text: String::new(),
            title_size: 32,
            title_color: Color::WHITE,
            title_font: TitleFont::Inter,
            title_position: TitlePosition::Above,
            subtitle_text: String::new(),
            subtitle_size: 16,
            subtitle_color: Color::rgba(255, 255, 255, 0.6),
            watermark: true,
            is_pro: false,
        }
    }
}

impl DocumentState {
    /// Default document for a session whose pro status is already known.
    pub fn with_entitlement(is_pro: bool) -> Self {
        let mut state = Self::default();
        state.is_pro = is_pro;
        state.enforce_entitlement();
        state
    }

    /// Merge `patch` over this snapshot, producing the next snapshot.
    pub fn apply(&self, patch: &DocumentPatch) -> Self {
        let mut next = self.clone();
        patch.merge_into(&mut next);
        next.enforce_entitlement();
        next
    }

    /// Defaults, keeping the loaded image and the pro status.
    pub fn reset(&self) -> Self {
        Self {
            image: self.image.clone(),
            file_name: self.file_name.clone(),
            is_pro: self.is_pro,
            watermark: !self.is_pro,
            ..Self::default()
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub(crate) fn grant_pro(&mut self) {
        self.is_pro = true;
        self.enforce_entitlement();
    }

    // Pro documents never carry the watermark. The inverse is not enforced: turning pro off
    // leaves the watermark wherever it was.
    fn enforce_entitlement(&mut self) {
        if self.is_pro {
            self.watermark = false;
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/model/state.rs"]
mod tests;
