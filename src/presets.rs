//! Curated catalogs: background swatches, shadow tints, canvas sizes, patterns, fonts and the
//! one-click style templates.

use kurbo::Size;

use crate::foundation::color::Color;
use crate::model::{
    AspectRatio, Background, BackgroundId, BgPattern, DocumentPatch, Frame, GradientStop, Paint,
    TitleFont,
};

pub const DEFAULT_BACKGROUND_ID: &str = "sunset";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PresetFill {
    Gradient {
        angle_deg: f64,
        stops: &'static [(u32, f64)],
    },
    Solid(u32),
    Transparent,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub fill: PresetFill,
}

impl BackgroundPreset {
    pub fn paint(&self) -> Paint {
        match self.fill {
            PresetFill::Gradient { angle_deg, stops } => Paint::LinearGradient {
                angle_deg,
                stops: stops
                    .iter()
                    .map(|&(rgb, offset_pct)| GradientStop {
                        color: Color::from_hex(rgb),
                        offset_pct,
                    })
                    .collect(),
            },
            PresetFill::Solid(rgb) => Paint::Solid {
                color: Color::from_hex(rgb),
            },
            PresetFill::Transparent => Paint::Transparent,
        }
    }

    pub fn background(&self) -> Background {
        Background::new(self.paint(), BackgroundId::Preset(self.id.to_owned()))
    }
}

macro_rules! gradient {
    ($($rgb:literal @ $pct:literal),+ $(,)?) => {
        PresetFill::Gradient {
            angle_deg: 135.0,
            stops: &[$(($rgb, $pct)),+],
        }
    };
}

const fn bg(id: &'static str, name: &'static str, fill: PresetFill) -> BackgroundPreset {
    BackgroundPreset { id, name, fill }
}

pub const BACKGROUNDS: &[BackgroundPreset] = &[
    bg("sunset", "Sunset", gradient!(0x667eea @ 0.0, 0x764ba2 @ 100.0)),
    bg("ocean", "Ocean", gradient!(0x0093e9 @ 0.0, 0x80d0c7 @ 100.0)),
    bg("candy", "Candy", gradient!(0xff9a9e @ 0.0, 0xfecfef @ 100.0)),
    bg("aurora", "Aurora", gradient!(0xa8edea @ 0.0, 0xfed6e3 @ 100.0)),
    bg("midnight", "Midnight", gradient!(0x0c0c1d @ 0.0, 0x1a1a3e @ 50.0, 0x2d1b69 @ 100.0)),
    bg("fire", "Fire", gradient!(0xf093fb @ 0.0, 0xf5576c @ 100.0)),
    bg("mint", "Mint", gradient!(0x4facfe @ 0.0, 0x00f2fe @ 100.0)),
    bg("lavender", "Lavender", gradient!(0xa18cd1 @ 0.0, 0xfbc2eb @ 100.0)),
    bg("peach", "Peach", gradient!(0xffecd2 @ 0.0, 0xfcb69f @ 100.0)),
    bg("forest", "Forest", gradient!(0x11998e @ 0.0, 0x38ef7d @ 100.0)),
    bg("cosmic", "Cosmic", gradient!(0x8e2de2 @ 0.0, 0x4a00e0 @ 100.0)),
    bg("mango", "Mango", gradient!(0xe8a87c @ 0.0, 0xd76d77 @ 50.0, 0x85144b @ 100.0)),
    bg("royal", "Royal", gradient!(0x141e30 @ 0.0, 0x243b55 @ 100.0)),
    bg("neon", "Neon", gradient!(0x00f260 @ 0.0, 0x0575e6 @ 100.0)),
    bg("cherry", "Cherry", gradient!(0xeb3349 @ 0.0, 0xf45c43 @ 100.0)),
    bg("slate", "Slate", gradient!(0x334155 @ 0.0, 0x1e293b @ 100.0)),
    bg("warmth", "Warmth", gradient!(0xfeb692 @ 0.0, 0xea5455 @ 100.0)),
    bg("deep-sea", "Deep Sea", gradient!(0x1cb5e0 @ 0.0, 0x000851 @ 100.0)),
    bg("cotton", "Cotton Candy", gradient!(0xe0c3fc @ 0.0, 0x8ec5fc @ 100.0)),
    bg("ember", "Ember", gradient!(0xff512f @ 0.0, 0xdd2476 @ 100.0)),
    bg("solid-black", "Black", PresetFill::Solid(0x000000)),
    bg("solid-white", "White", PresetFill::Solid(0xffffff)),
    bg("solid-dark", "Dark", PresetFill::Solid(0x18181b)),
    bg("transparent", "None", PresetFill::Transparent),
];

pub fn background(id: &str) -> Option<&'static BackgroundPreset> {
    BACKGROUNDS.iter().find(|p| p.id == id)
}

pub(crate) fn default_background() -> Background {
    BACKGROUNDS[0].background()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowTint {
    pub id: &'static str,
    pub name: &'static str,
    pub color: Color,
}

pub const SHADOW_TINTS: &[ShadowTint] = &[
    ShadowTint { id: "black", name: "Black", color: Color::rgba(0, 0, 0, 0.5) },
    ShadowTint { id: "purple", name: "Purple", color: Color::rgba(139, 92, 246, 0.4) },
    ShadowTint { id: "blue", name: "Blue", color: Color::rgba(59, 130, 246, 0.4) },
    ShadowTint { id: "pink", name: "Pink", color: Color::rgba(236, 72, 153, 0.4) },
    ShadowTint { id: "green", name: "Green", color: Color::rgba(16, 185, 129, 0.4) },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AspectPreset {
    pub ratio: AspectRatio,
    pub name: &'static str,
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
}

impl AspectPreset {
    /// Fixed canvas size, `None` for `auto`.
    pub fn size(&self) -> Option<Size> {
        (self.width > 0 && self.height > 0)
            .then(|| Size::new(f64::from(self.width), f64::from(self.height)))
    }
}

const fn sized(
    ratio: AspectRatio,
    name: &'static str,
    label: &'static str,
    width: u32,
    height: u32,
) -> AspectPreset {
    AspectPreset { ratio, name, label, width, height }
}

pub const ASPECTS: &[AspectPreset] = &[
    sized(AspectRatio::Auto, "Auto", "Auto", 0, 0),
    sized(AspectRatio::Widescreen, "16:9", "Widescreen", 1920, 1080),
    sized(AspectRatio::Standard, "4:3", "Standard", 1600, 1200),
    sized(AspectRatio::Square, "1:1", "Square", 1080, 1080),
    sized(AspectRatio::Story, "9:16", "Story", 1080, 1920),
    sized(AspectRatio::OpenGraph, "OG", "Open Graph", 1200, 630),
    sized(AspectRatio::Twitter, "Twitter", "Twitter Card", 1600, 900),
    sized(AspectRatio::LinkedIn, "LinkedIn", "LinkedIn Post", 1200, 627),
    sized(AspectRatio::ProductHunt, "PH", "Product Hunt", 1270, 760),
];

pub fn aspect(ratio: AspectRatio) -> &'static AspectPreset {
    ASPECTS
        .iter()
        .find(|p| p.ratio == ratio)
        .unwrap_or(&ASPECTS[0])
}

pub fn pattern_name(pattern: BgPattern) -> &'static str {
    match pattern {
        BgPattern::None => "None",
        BgPattern::Dots => "Dots",
        BgPattern::Grid => "Grid",
        BgPattern::Lines => "Lines",
        BgPattern::Cross => "Cross",
        BgPattern::Diagonal => "Diagonal",
    }
}

pub const TITLE_FONTS: &[(TitleFont, &str)] = &[
    (TitleFont::Inter, "Inter"),
    (TitleFont::Georgia, "Georgia"),
    (TitleFont::Monospace, "Mono"),
    (TitleFont::SystemUi, "System"),
];

/// A named bundle of field values applied in one edit.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub overrides: DocumentPatch,
}

pub fn template(id: &str) -> Option<StyleTemplate> {
    templates().into_iter().find(|t| t.id == id)
}

pub fn template_ids() -> Vec<&'static str> {
    templates().iter().map(|t| t.id).collect()
}

/// Straight, unscaled placement shared by most templates.
fn flat(patch: DocumentPatch) -> DocumentPatch {
    patch.tilt_x(0.0).tilt_y(0.0).scale(1.0).rotation(0.0)
}

fn preset_patch(background_id: &str) -> DocumentPatch {
    let patch = DocumentPatch::new();
    match background(background_id) {
        Some(p) => patch.background(p.background()),
        None => patch,
    }
}

pub fn templates() -> Vec<StyleTemplate> {
    let black = Color::rgba(0, 0, 0, 0.5);
    let purple = Color::rgba(139, 92, 246, 0.4);
    let pink = Color::rgba(236, 72, 153, 0.4);

    vec![
        StyleTemplate {
            id: "clean",
            name: "Clean",
            overrides: flat(preset_patch("sunset"))
                .padding(64)
                .border_radius(12)
                .shadow(40)
                .shadow_color(black)
                .frame(Frame::None)
                .bg_pattern(BgPattern::None)
                .bg_noise(0)
                .border_width(0),
        },
        StyleTemplate {
            id: "browser-mockup",
            name: "Browser",
            overrides: flat(preset_patch("slate"))
                .padding(48)
                .border_radius(12)
                .shadow(60)
                .shadow_color(black)
                .frame(Frame::Browser)
                .bg_pattern(BgPattern::None)
                .bg_noise(0)
                .border_width(0),
        },
        StyleTemplate {
            id: "3d-pop",
            name: "3D Pop",
            overrides: preset_patch("midnight")
                .padding(80)
                .border_radius(16)
                .shadow(80)
                .shadow_color(purple)
                .frame(Frame::None)
                .tilt_x(8.0)
                .tilt_y(-6.0)
                .scale(0.9)
                .rotation(0.0)
                .bg_pattern(BgPattern::Dots)
                .bg_pattern_opacity(0.08)
                .bg_noise(5)
                .border_width(1)
                .border_color(Color::rgba(255, 255, 255, 0.2)),
        },
        StyleTemplate {
            id: "social",
            name: "Social",
            overrides: flat(preset_patch("fire"))
                .padding(48)
                .border_radius(20)
                .shadow(50)
                .shadow_color(black)
                .frame(Frame::None)
                .aspect_ratio(AspectRatio::Square)
                .bg_pattern(BgPattern::None)
                .bg_noise(0)
                .border_width(0),
        },
        StyleTemplate {
            id: "minimal",
            name: "Minimal",
            overrides: flat(preset_patch("solid-white"))
                .padding(48)
                .border_radius(8)
                .shadow(20)
                .shadow_color(black)
                .frame(Frame::None)
                .bg_pattern(BgPattern::None)
                .bg_noise(0)
                .border_width(1)
                .border_color(Color::rgba(0, 0, 0, 0.08)),
        },
        StyleTemplate {
            id: "macos-dark",
            name: "macOS",
            overrides: flat(preset_patch("royal"))
                .padding(64)
                .border_radius(12)
                .shadow(70)
                .shadow_color(black)
                .frame(Frame::Macos)
                .bg_pattern(BgPattern::None)
                .bg_noise(0)
                .border_width(0),
        },
        StyleTemplate {
            id: "phone-hero",
            name: "Phone",
            overrides: flat(preset_patch("cosmic"))
                .padding(64)
                .border_radius(12)
                .shadow(60)
                .shadow_color(purple)
                .frame(Frame::Phone)
                .bg_pattern(BgPattern::None)
                .bg_noise(0)
                .border_width(0),
        },
        StyleTemplate {
            id: "neon-glow",
            name: "Neon",
            overrides: preset_patch("midnight")
                .padding(80)
                .border_radius(16)
                .shadow(90)
                .shadow_color(pink)
                .frame(Frame::None)
                .tilt_x(0.0)
                .tilt_y(0.0)
                .scale(0.95)
                .rotation(0.0)
                .bg_pattern(BgPattern::Grid)
                .bg_pattern_opacity(0.05)
                .bg_noise(8)
                .border_width(2)
                .border_color(Color::from_hex(0xec4899)),
        },
    ]
}
