use std::sync::Arc;

use crate::foundation::color::Color;
use crate::model::{Background, BackgroundId, DocumentPatch, DocumentState, ImageRef, Paint};

/// The live document of one editor session.
///
/// Every mutation replaces the current snapshot with a new one; snapshots themselves are never
/// edited in place, so handing out an `Arc<DocumentState>` is safe.
#[derive(Clone, Debug, Default)]
pub struct EditorDocument {
    current: Arc<DocumentState>,
}

impl EditorDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an arbitrary snapshot (e.g. one read from JSON), normalized like any update.
    pub fn from_state(state: DocumentState) -> Self {
        Self {
            current: Arc::new(state.apply(&DocumentPatch::new())),
        }
    }

    pub fn with_entitlement(is_pro: bool) -> Self {
        Self::from_state(DocumentState::with_entitlement(is_pro))
    }

    pub fn state(&self) -> &DocumentState {
        &self.current
    }

    pub fn snapshot(&self) -> Arc<DocumentState> {
        Arc::clone(&self.current)
    }

    pub fn update(&mut self, patch: &DocumentPatch) -> Arc<DocumentState> {
        let next = self.current.apply(patch);
        self.replace(Arc::new(next))
    }

    pub fn reset(&mut self) -> Arc<DocumentState> {
        let next = self.current.reset();
        self.replace(Arc::new(next))
    }

    /// Adopt `next` wholesale, returning it. Used by history restores.
    pub(crate) fn replace(&mut self, next: Arc<DocumentState>) -> Arc<DocumentState> {
        self.current = next;
        Arc::clone(&self.current)
    }
}

// Named edits. Each is a single patch, so history treats it like any other update.

pub fn set_background(paint: Paint, id: BackgroundId) -> DocumentPatch {
    DocumentPatch::new().background(Background::new(paint, id))
}

/// `None` for an unknown preset id.
pub fn set_preset_background(id: &str) -> Option<DocumentPatch> {
    Background::preset(id).map(|bg| DocumentPatch::new().background(bg))
}

/// Custom two-stop gradient; also remembers the builder inputs.
pub fn set_custom_gradient(from: Color, to: Color, angle_deg: f64) -> DocumentPatch {
    DocumentPatch::new()
        .background(Background::custom(Paint::two_stop(from, to, angle_deg)))
        .custom_bg_color1(from)
        .custom_bg_color2(to)
        .bg_angle(angle_deg)
}

pub fn set_background_image(image: ImageRef) -> DocumentPatch {
    DocumentPatch::new().background(Background::custom(Paint::Image { image }))
}

pub fn load_image(image: ImageRef, file_name: impl Into<String>) -> DocumentPatch {
    DocumentPatch::new()
        .image(Some(image))
        .file_name(file_name.into())
}

pub fn remove_image() -> DocumentPatch {
    DocumentPatch::new().image(None).file_name(String::new())
}

/// Turning pro on also drops the watermark; turning it off leaves the watermark alone.
pub fn set_pro(is_pro: bool) -> DocumentPatch {
    let patch = DocumentPatch::new().is_pro(is_pro);
    if is_pro { patch.watermark(false) } else { patch }
}
