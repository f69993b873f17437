use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::foundation::error::{SnapframeError, SnapframeResult};
use crate::style::VisualTree;

pub const FILE_SUFFIX: &str = "snapframe";
pub const FALLBACK_BASE_NAME: &str = "screenshot";
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
    Webp,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Webp => "webp",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
        }
    }

    /// Only JPEG is lossy; PNG and (lossless) WebP ignore the quality setting.
    pub fn uses_quality(self) -> bool {
        matches!(self, Self::Jpeg)
    }
}

/// `{base}-snapframe.{ext}`, where `base` is `file_name` minus its last extension.
pub fn export_file_name(file_name: &str, format: ExportFormat) -> String {
    let base = strip_extension(file_name);
    let base = if base.is_empty() {
        FALLBACK_BASE_NAME
    } else {
        base
    };
    format!("{base}-{FILE_SUFFIX}.{}", format.extension())
}

fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() => &name[..dot],
        _ => name,
    }
}

/// Straight-alpha RGBA8 pixels, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RasterFrame {
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut data = Vec::with_capacity((width as usize) * (height as usize) * 4);
        for _ in 0..(width as usize) * (height as usize) {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            data,
        }
    }
}

/// Turns a visual tree into pixels. Implemented outside this crate (DOM snapshotter, GPU
/// compositor, ...).
pub trait CompositeRenderer {
    fn rasterize(&mut self, tree: &VisualTree, pixel_ratio: f32) -> SnapframeResult<RasterFrame>;
}

pub fn encode_raster(
    frame: &RasterFrame,
    format: ExportFormat,
    jpeg_quality: u8,
) -> SnapframeResult<Vec<u8>> {
    let img = RgbaImage::from_raw(frame.width, frame.height, frame.data.clone()).ok_or_else(|| {
        SnapframeError::encode(format!(
            "frame buffer of {} bytes does not match {}x{} RGBA",
            frame.data.len(),
            frame.width,
            frame.height
        ))
    })?;

    let mut out = Cursor::new(Vec::new());
    let written = match format {
        ExportFormat::Png => img.write_with_encoder(PngEncoder::new(&mut out)),
        ExportFormat::Jpeg => {
            // JPEG has no alpha channel
            let rgb = DynamicImage::ImageRgba8(img).to_rgb8();
            rgb.write_with_encoder(JpegEncoder::new_with_quality(
                &mut out,
                jpeg_quality.clamp(1, 100),
            ))
        }
        ExportFormat::Webp => img.write_with_encoder(WebPEncoder::new_lossless(&mut out)),
    };
    written.map_err(|e| {
        SnapframeError::encode(format!("{} encode failed: {e}", format.extension()))
    })?;
    Ok(out.into_inner())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// One export request, detached from the session so it can complete at any time.
#[derive(Clone, Debug)]
pub struct ExportJob {
    pub id: u64,
    pub format: ExportFormat,
    pub file_name: String,
    pub tree: VisualTree,
    pub pixel_ratio: f32,
    pub jpeg_quality: u8,
}

impl ExportJob {
    pub fn run(&self, renderer: &mut dyn CompositeRenderer) -> SnapframeResult<ExportedFile> {
        let frame = renderer.rasterize(&self.tree, self.pixel_ratio)?;
        let bytes = encode_raster(&frame, self.format, self.jpeg_quality)?;
        Ok(ExportedFile {
            file_name: self.file_name.clone(),
            mime_type: self.format.mime_type(),
            bytes,
        })
    }
}

/// Where finished exports go (a browser download, a directory, ...).
pub trait DownloadSink {
    fn deliver(&mut self, file: &ExportedFile) -> SnapframeResult<()>;
}

/// Writes exports into a directory, replacing files with the same name.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, file: &ExportedFile) -> SnapframeResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            SnapframeError::delivery(format!("create {}: {e}", self.dir.display()))
        })?;
        let path = self.dir.join(&file.file_name);
        std::fs::write(&path, &file.bytes)
            .map_err(|e| SnapframeError::delivery(format!("write {}: {e}", path.display())))?;
        tracing::info!(path = %path.display(), bytes = file.bytes.len(), "export written");
        Ok(())
    }
}

/// Keeps exports in memory. Handy for tests and previews.
#[derive(Debug, Default)]
pub struct InMemorySink {
    pub files: Vec<ExportedFile>,
}

impl DownloadSink for InMemorySink {
    fn deliver(&mut self, file: &ExportedFile) -> SnapframeResult<()> {
        self.files.push(file.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/export.rs"]
mod tests;
