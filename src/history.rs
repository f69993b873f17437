//! Bounded, linear undo/redo over document snapshots.
//!
//! ```text
//! update(p)   past: [s0, s1]       current: s2   future: []
//! undo()      past: [s0]           current: s1   future: [s2]
//! update(q)   past: [s0, s1]       current: s3   future: []      (s2 is gone)
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use crate::document::{self, EditorDocument};
use crate::model::{BackgroundId, DocumentPatch, DocumentState, Paint};
use crate::presets;

pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Wraps an [`EditorDocument`] and records the pre-edit snapshot of every tracked update.
///
/// Invariants:
/// 1. `past.len() <= capacity` after every operation; the oldest entry is evicted first.
/// 2. Any tracked update clears `future`.
/// 3. `undo` / `redo` at an empty boundary are no-ops returning `None`.
/// 4. Recorded snapshots come back exactly as they were, unless the session holds an
///    activated entitlement, in which case they come back pro.
#[derive(Debug)]
pub struct HistoryManager {
    document: EditorDocument,
    past: VecDeque<Arc<DocumentState>>,
    future: Vec<Arc<DocumentState>>,
    capacity: usize,
    // Pro granted outside history (license activation, or a pro starting document).
    entitled: bool,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(EditorDocument::new(), DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryManager {
    pub fn new(document: EditorDocument, capacity: usize) -> Self {
        Self {
            entitled: document.state().is_pro,
            document,
            past: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            future: Vec::new(),
            capacity,
        }
    }

    pub fn state(&self) -> &DocumentState {
        self.document.state()
    }

    pub fn snapshot(&self) -> Arc<DocumentState> {
        self.document.snapshot()
    }

    pub fn document(&self) -> &EditorDocument {
        &self.document
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Tracked update.
    pub fn update(&mut self, patch: &DocumentPatch) -> Arc<DocumentState> {
        self.record();
        let next = self.document.update(patch);
        tracing::debug!(
            fields = patch.len(),
            undo_depth = self.past.len(),
            "document updated"
        );
        next
    }

    /// Update that leaves both sequences alone.
    pub fn update_untracked(&mut self, patch: &DocumentPatch) -> Arc<DocumentState> {
        self.document.update(patch)
    }

    /// Tracked reset to defaults (image, file name and pro status survive).
    pub fn reset(&mut self) -> Arc<DocumentState> {
        self.record();
        tracing::debug!("document reset");
        self.document.reset()
    }

    pub fn set_background(&mut self, paint: Paint, id: BackgroundId) -> Arc<DocumentState> {
        self.update(&document::set_background(paint, id))
    }

    /// Apply a catalog template as one tracked edit. Unknown ids change nothing.
    pub fn apply_template(&mut self, id: &str) -> Option<Arc<DocumentState>> {
        let Some(template) = presets::template(id) else {
            tracing::warn!(template = id, "unknown style template ignored");
            return None;
        };
        Some(self.update(&template.overrides))
    }

    /// Entitlement change; never recorded. While on, undo and redo keep the document pro.
    pub fn set_pro(&mut self, is_pro: bool) -> Arc<DocumentState> {
        self.entitled = is_pro;
        self.update_untracked(&document::set_pro(is_pro))
    }

    pub fn is_entitled(&self) -> bool {
        self.entitled
    }

    /// Switch to pro after a verified license; drops the watermark.
    pub fn activate_pro(&mut self) -> Arc<DocumentState> {
        self.set_pro(true)
    }

    pub fn undo(&mut self) -> Option<Arc<DocumentState>> {
        let previous = self.past.pop_back()?;
        let current = self.document.snapshot();
        let restored = carry_entitlement(previous, self.entitled);
        self.future.push(current);
        tracing::debug!(
            undo_depth = self.past.len(),
            redo_depth = self.future.len(),
            "undo"
        );
        Some(self.document.replace(restored))
    }

    pub fn redo(&mut self) -> Option<Arc<DocumentState>> {
        let next = self.future.pop()?;
        let current = self.document.snapshot();
        let restored = carry_entitlement(next, self.entitled);
        self.past.push_back(current);
        self.enforce_capacity();
        tracing::debug!(
            undo_depth = self.past.len(),
            redo_depth = self.future.len(),
            "redo"
        );
        Some(self.document.replace(restored))
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Past snapshots, oldest first.
    pub fn past(&self) -> impl ExactSizeIterator<Item = &DocumentState> {
        self.past.iter().map(Arc::as_ref)
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    fn record(&mut self) {
        self.future.clear();
        self.past.push_back(self.document.snapshot());
        self.enforce_capacity();
    }

    fn enforce_capacity(&mut self) {
        while self.past.len() > self.capacity {
            self.past.pop_front();
        }
    }
}

// Tracked snapshots are restored verbatim; only an activated entitlement is layered on top.
fn carry_entitlement(restored: Arc<DocumentState>, entitled: bool) -> Arc<DocumentState> {
    if entitled && (!restored.is_pro || restored.watermark) {
        let mut state = (*restored).clone();
        state.grant_pro();
        Arc::new(state)
    } else {
        restored
    }
}

#[cfg(test)]
#[path = "../tests/unit/history.rs"]
mod tests;
