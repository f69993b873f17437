use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;

/// Opaque reference to an encoded image held in memory (a `data:` URI in practice).
///
/// Cloning shares the underlying buffer, so snapshots that carry the same image stay cheap.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(Arc<str>);

impl ImageRef {
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ImageRef {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientStop {
    pub color: Color,
    /// Stop position in percent along the gradient line.
    pub offset_pct: f64,
}

/// A resolved background fill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Paint {
    #[serde(rename_all = "camelCase")]
    LinearGradient {
        angle_deg: f64,
        stops: Vec<GradientStop>,
    },
    Solid {
        color: Color,
    },
    Transparent,
    Image {
        image: ImageRef,
    },
}

impl Paint {
    /// Two-stop gradient from the custom background builder.
    pub fn two_stop(from: Color, to: Color, angle_deg: f64) -> Self {
        Self::LinearGradient {
            angle_deg,
            stops: vec![
                GradientStop {
                    color: from,
                    offset_pct: 0.0,
                },
                GradientStop {
                    color: to,
                    offset_pct: 100.0,
                },
            ],
        }
    }

    /// CSS `background` shorthand value.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LinearGradient { angle_deg, stops } => {
                write!(f, "linear-gradient({angle_deg}deg")?;
                for stop in stops {
                    write!(f, ", {} {}%", stop.color, stop.offset_pct)?;
                }
                f.write_str(")")
            }
            Self::Solid { color } => write!(f, "{color}"),
            Self::Transparent => f.write_str("transparent"),
            Self::Image { image } => {
                write!(f, "url(\"{}\") center / cover no-repeat", image.as_str())
            }
        }
    }
}

/// Which catalog entry a background came from, or `custom` for anything hand-built.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BackgroundId {
    Preset(String),
    Custom,
}

impl BackgroundId {
    pub const CUSTOM: &'static str = "custom";

    pub fn as_str(&self) -> &str {
        match self {
            Self::Preset(id) => id,
            Self::Custom => Self::CUSTOM,
        }
    }
}

impl From<String> for BackgroundId {
    fn from(s: String) -> Self {
        if s == Self::CUSTOM {
            Self::Custom
        } else {
            Self::Preset(s)
        }
    }
}

impl From<BackgroundId> for String {
    fn from(id: BackgroundId) -> Self {
        match id {
            BackgroundId::Preset(id) => id,
            BackgroundId::Custom => BackgroundId::CUSTOM.to_owned(),
        }
    }
}

/// Paint plus the catalog id it corresponds to.
///
/// The two halves only change together, which keeps the selected swatch in the UI in step with
/// what is actually painted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub paint: Paint,
    pub id: BackgroundId,
}

impl Background {
    pub fn new(paint: Paint, id: BackgroundId) -> Self {
        Self { paint, id }
    }

    pub fn custom(paint: Paint) -> Self {
        Self {
            paint,
            id: BackgroundId::Custom,
        }
    }

    /// Background for a catalog preset, `None` when the id is unknown.
    pub fn preset(id: &str) -> Option<Self> {
        crate::presets::background(id).map(|p| Self {
            paint: p.paint(),
            id: BackgroundId::Preset(p.id.to_owned()),
        })
    }

    pub fn is_custom(&self) -> bool {
        self.id == BackgroundId::Custom
    }
}
