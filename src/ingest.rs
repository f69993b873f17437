use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::model::ImageRef;

pub const CLIPBOARD_IMAGE_NAME: &str = "clipboard-image.png";
const UNNAMED_IMAGE: &str = "image";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// File picker.
    File,
    /// Drag-and-drop payload.
    Drop,
    /// Paste from the system clipboard.
    Clipboard,
}

/// Raw bytes handed over by the host, plus whatever metadata it had.
#[derive(Clone, Debug)]
pub struct ImageSource {
    pub origin: SourceKind,
    pub bytes: Vec<u8>,
    /// Declared MIME type; sniffed from the bytes when absent.
    pub mime: Option<String>,
    pub name: Option<String>,
}

impl ImageSource {
    pub fn file(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            origin: SourceKind::File,
            bytes,
            mime: None,
            name: Some(name.into()),
        }
    }

    pub fn clipboard(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            origin: SourceKind::Clipboard,
            bytes,
            mime: Some(mime.into()),
            name: None,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub fn with_origin(mut self, origin: SourceKind) -> Self {
        self.origin = origin;
        self
    }

    fn declares_image(&self) -> Option<bool> {
        self.mime.as_deref().map(|m| m.starts_with("image/"))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedImage {
    pub image: ImageRef,
    pub file_name: String,
    pub mime: String,
}

/// Encodes `source` as a data URI. Non-image input yields `None`, never an error.
pub fn ingest(source: &ImageSource) -> Option<LoadedImage> {
    if source.bytes.is_empty() {
        tracing::warn!(origin = ?source.origin, "ignoring empty image source");
        return None;
    }

    let mime = match (&source.mime, source.declares_image()) {
        (Some(mime), Some(true)) => mime.clone(),
        (Some(mime), _) => {
            tracing::warn!(origin = ?source.origin, %mime, "ignoring non-image source");
            return None;
        }
        (None, _) => match image::guess_format(&source.bytes) {
            Ok(fmt) => fmt.to_mime_type().to_owned(),
            Err(err) => {
                tracing::warn!(origin = ?source.origin, error = %err, "could not sniff image type");
                return None;
            }
        },
    };

    let file_name = match source.origin {
        SourceKind::Clipboard => CLIPBOARD_IMAGE_NAME.to_owned(),
        SourceKind::File | SourceKind::Drop => source
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNNAMED_IMAGE.to_owned()),
    };

    let uri = format!("data:{mime};base64,{}", STANDARD.encode(&source.bytes));
    tracing::debug!(
        origin = ?source.origin,
        %file_name,
        bytes = source.bytes.len(),
        "image ingested"
    );
    Some(LoadedImage {
        image: ImageRef::new(uri),
        file_name,
        mime,
    })
}

/// Drops and pastes may carry several items; only the first image one is used. If that item
/// turns out unusable the whole batch is ignored, later items are not tried.
pub fn ingest_first_image<'a>(
    items: impl IntoIterator<Item = &'a ImageSource>,
) -> Option<LoadedImage> {
    let candidate = items
        .into_iter()
        .find(|item| item.declares_image() != Some(false))?;
    ingest(candidate)
}
