use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::export::DEFAULT_JPEG_QUALITY;
use crate::foundation::error::{SnapframeError, SnapframeResult};
use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::license::MIN_KEY_LEN;

/// Editor settings. Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EditorConfig {
    pub history_capacity: usize,
    pub export: ExportConfig,
    pub clipboard: ClipboardConfig,
    pub license: LicenseConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            export: ExportConfig::default(),
            clipboard: ClipboardConfig::default(),
            license: LicenseConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ExportConfig {
    pub jpeg_quality: u8,
    /// Device pixel ratio used when rasterizing.
    pub pixel_ratio: f32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            pixel_ratio: 2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClipboardConfig {
    pub feedback_ms: u64,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self { feedback_ms: 2000 }
    }
}

impl ClipboardConfig {
    pub fn feedback(&self) -> Duration {
        Duration::from_millis(self.feedback_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LicenseConfig {
    pub min_key_len: usize,
}

impl Default for LicenseConfig {
    fn default() -> Self {
        Self {
            min_key_len: MIN_KEY_LEN,
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(s: &str) -> SnapframeResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> SnapframeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> SnapframeResult<()> {
        if self.history_capacity == 0 {
            return Err(SnapframeError::validation(
                "historyCapacity must be at least 1",
            ));
        }
        if !(1..=100).contains(&self.export.jpeg_quality) {
            return Err(SnapframeError::validation(
                "export.jpegQuality must be in 1..=100",
            ));
        }
        if !self.export.pixel_ratio.is_finite() || self.export.pixel_ratio <= 0.0 {
            return Err(SnapframeError::validation(
                "export.pixelRatio must be finite and > 0",
            ));
        }
        if self.license.min_key_len == 0 {
            return Err(SnapframeError::validation(
                "license.minKeyLen must be at least 1",
            ));
        }
        Ok(())
    }
}
