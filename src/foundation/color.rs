use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{SnapframeError, SnapframeResult};

/// An sRGB color with straight (non-premultiplied) fractional alpha.
///
/// Colors travel through documents as CSS strings: opaque colors print as `#rrggbb`, translucent
/// ones as `rgba(r,g,b,a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `0.0..=1.0`.
    pub a: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0.0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a packed `0xRRGGBB` literal.
    pub const fn from_hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn parse(s: &str) -> SnapframeResult<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            let body = body
                .strip_suffix(')')
                .ok_or_else(|| SnapframeError::validation(format!("unterminated color \"{s}\"")))?;
            return parse_functional(body);
        }
        Err(SnapframeError::validation(format!(
            "unsupported color \"{s}\" (expected #hex, rgb(), rgba() or transparent)"
        )))
    }

    /// Same color with alpha multiplied by `factor`.
    pub fn with_alpha_scaled(self, factor: f64) -> Self {
        Self {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            // float noise from scaling (0.4 * 0.5) prints short; any other alpha prints exactly
            let a = self.a.clamp(0.0, 1.0);
            let short = (a * 1000.0).round() / 1000.0;
            let a = if (short - a).abs() < 1e-9 { short } else { a };
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, a)
        }
    }
}

impl FromStr for Color {
    type Err = SnapframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

fn parse_hex(s: &str) -> SnapframeResult<Color> {
    fn hex_byte(pair: &str) -> SnapframeResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| SnapframeError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    if !s.is_ascii() {
        return Err(SnapframeError::validation("hex color must be ASCII"));
    }

    match s.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, ch) in rgb.iter_mut().zip(s.chars()) {
                let v = hex_byte(&ch.to_string())?;
                *slot = v * 16 + v;
            }
            Ok(Color::rgb(rgb[0], rgb[1], rgb[2]))
        }
        6 => Ok(Color::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => {
            let a = hex_byte(&s[6..8])?;
            Ok(Color::rgba(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
                f64::from(a) / 255.0,
            ))
        }
        _ => Err(SnapframeError::validation(
            "hex color must be #RGB, #RRGGBB or #RRGGBBAA (case-insensitive)",
        )),
    }
}

fn parse_functional(body: &str) -> SnapframeResult<Color> {
    let parts = body
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<f64>()
                .map_err(|_| SnapframeError::validation(format!("invalid color component \"{p}\"")))
        })
        .collect::<SnapframeResult<Vec<f64>>>()?;

    fn channel(v: f64) -> u8 {
        v.round().clamp(0.0, 255.0) as u8
    }

    match parts.as_slice() {
        [r, g, b] => Ok(Color::rgb(channel(*r), channel(*g), channel(*b))),
        [r, g, b, a] => Ok(Color::rgba(
            channel(*r),
            channel(*g),
            channel(*b),
            a.clamp(0.0, 1.0),
        )),
        _ => Err(SnapframeError::validation(
            "rgb()/rgba() take 3 or 4 comma-separated components",
        )),
    }
}
