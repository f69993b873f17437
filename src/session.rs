use std::sync::Arc;
use std::time::Instant;

use crate::clipboard::{ClipboardSink, CopyFeedback};
use crate::config::EditorConfig;
use crate::document::{self, EditorDocument};
use crate::export::{
    CompositeRenderer, DownloadSink, ExportFormat, ExportJob, ExportedFile, encode_raster,
    export_file_name,
};
use crate::foundation::error::{SnapframeError, SnapframeResult};
use crate::history::HistoryManager;
use crate::ingest::{self, ImageSource};
use crate::keyboard::{EditorCommand, FocusTarget, KeyChord, resolve_shortcut};
use crate::license::{self, LicenseError, LicenseGateway, LicenseKey, LicenseStore};
use crate::model::{DocumentPatch, DocumentState};
use crate::style::{VisualTree, render_tree};

/// One open editor: document history plus the transient UI flags around it.
///
/// Collaborators (renderer, clipboard, download target, license service) are passed per call, so
/// the session itself never blocks or owns I/O handles.
#[derive(Debug)]
pub struct EditorSession {
    history: HistoryManager,
    config: EditorConfig,
    exporting: bool,
    next_job_id: u64,
    copy_feedback: CopyFeedback,
    license: Option<LicenseKey>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_license(config, None)
    }

    /// Starts from defaults; a key already in `store` makes the session pro from the outset.
    pub fn open(config: EditorConfig, store: &dyn LicenseStore) -> Self {
        let license = match store.load() {
            Ok(key) => key,
            Err(err) => {
                tracing::warn!(error = %err, "stored license unreadable, starting unlicensed");
                None
            }
        };
        Self::with_license(config, license)
    }

    fn with_license(config: EditorConfig, license: Option<LicenseKey>) -> Self {
        let document = EditorDocument::with_entitlement(license.is_some());
        Self {
            history: HistoryManager::new(document, config.history_capacity),
            copy_feedback: CopyFeedback::new(config.clipboard.feedback()),
            config,
            exporting: false,
            next_job_id: 1,
            license,
        }
    }

    pub fn state(&self) -> &DocumentState {
        self.history.state()
    }

    pub fn snapshot(&self) -> Arc<DocumentState> {
        self.history.snapshot()
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryManager {
        &mut self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn license(&self) -> Option<&LicenseKey> {
        self.license.as_ref()
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    pub fn update(&mut self, patch: &DocumentPatch) -> Arc<DocumentState> {
        self.history.update(patch)
    }

    pub fn undo(&mut self) -> Option<Arc<DocumentState>> {
        self.history.undo()
    }

    pub fn redo(&mut self) -> Option<Arc<DocumentState>> {
        self.history.redo()
    }

    pub fn reset(&mut self) -> Arc<DocumentState> {
        self.history.reset()
    }

    pub fn apply_template(&mut self, id: &str) -> Option<Arc<DocumentState>> {
        self.history.apply_template(id)
    }

    pub fn remove_image(&mut self) -> Arc<DocumentState> {
        self.history.update(&document::remove_image())
    }

    /// Loads the first usable image among `items`. Anything else is ignored without error.
    pub fn ingest<'a>(
        &mut self,
        items: impl IntoIterator<Item = &'a ImageSource>,
    ) -> Option<Arc<DocumentState>> {
        let loaded = ingest::ingest_first_image(items)?;
        Some(
            self.history
                .update(&document::load_image(loaded.image, loaded.file_name)),
        )
    }

    /// Uses an uploaded image as the canvas background. Non-images are ignored like any ingest.
    pub fn set_background_image(&mut self, source: &ImageSource) -> Option<Arc<DocumentState>> {
        let loaded = ingest::ingest(source)?;
        Some(
            self.history
                .update(&document::set_background_image(loaded.image)),
        )
    }

    pub fn visual_tree(&self) -> Option<VisualTree> {
        render_tree(self.state())
    }

    /// Captures everything an export needs and raises the exporting flag. `None` without an
    /// image. Overlapping requests are not serialized; each job completes on its own.
    pub fn start_export(&mut self, format: ExportFormat) -> Option<ExportJob> {
        let Some(tree) = self.visual_tree() else {
            tracing::warn!(?format, "export requested without an image");
            return None;
        };
        let id = self.next_job_id;
        self.next_job_id += 1;
        self.exporting = true;
        Some(ExportJob {
            id,
            format,
            file_name: export_file_name(&self.state().file_name, format),
            tree,
            pixel_ratio: self.config.export.pixel_ratio,
            jpeg_quality: self.config.export.jpeg_quality,
        })
    }

    /// Hands a finished job to `sink`. Failures are logged, never retried; the exporting flag
    /// drops either way.
    pub fn complete_export(
        &mut self,
        job: &ExportJob,
        result: SnapframeResult<ExportedFile>,
        sink: &mut dyn DownloadSink,
    ) -> bool {
        self.exporting = false;
        let delivered = result.and_then(|file| sink.deliver(&file));
        match delivered {
            Ok(()) => {
                tracing::info!(job = job.id, file = %job.file_name, "export delivered");
                true
            }
            Err(err) => {
                tracing::error!(job = job.id, error = %err, "export failed");
                false
            }
        }
    }

    #[tracing::instrument(skip(self, renderer, sink))]
    pub fn export_with(
        &mut self,
        format: ExportFormat,
        renderer: &mut dyn CompositeRenderer,
        sink: &mut dyn DownloadSink,
    ) -> bool {
        let Some(job) = self.start_export(format) else {
            return false;
        };
        let result = job.run(renderer);
        self.complete_export(&job, result, sink)
    }

    /// Rasterizes as PNG and writes to the clipboard; success raises the copy indicator.
    #[tracing::instrument(skip(self, renderer, clipboard))]
    pub fn copy_to_clipboard(
        &mut self,
        renderer: &mut dyn CompositeRenderer,
        clipboard: &mut dyn ClipboardSink,
        now: Instant,
    ) -> bool {
        let copied = self.copy_png(renderer, clipboard);
        match copied {
            Ok(()) => {
                self.copy_feedback.raise(now);
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "copy to clipboard failed");
                false
            }
        }
    }

    fn copy_png(
        &self,
        renderer: &mut dyn CompositeRenderer,
        clipboard: &mut dyn ClipboardSink,
    ) -> SnapframeResult<()> {
        let tree = self
            .visual_tree()
            .ok_or_else(|| SnapframeError::render("nothing to copy without an image"))?;
        let frame = renderer.rasterize(&tree, self.config.export.pixel_ratio)?;
        let png = encode_raster(&frame, ExportFormat::Png, self.config.export.jpeg_quality)?;
        clipboard.write_png(&png)
    }

    pub fn copy_feedback_active(&self, now: Instant) -> bool {
        self.copy_feedback.is_active(now)
    }

    /// Verifies and stores `raw`, then switches the document to pro. On any error the document
    /// and store are left as they were.
    #[tracing::instrument(skip_all)]
    pub fn activate_license(
        &mut self,
        raw: &str,
        gateway: &mut dyn LicenseGateway,
        store: &mut dyn LicenseStore,
    ) -> Result<(), LicenseError> {
        let (key, response) =
            license::verify_and_store(raw, self.config.license.min_key_len, gateway, store)
                .inspect_err(|err| tracing::warn!(error = %err, "license activation failed"))?;
        tracing::info!(uses = ?response.uses, "license activated");
        self.license = Some(key);
        self.history.activate_pro();
        Ok(())
    }

    /// Runs undo/redo directly. Export and copy need collaborators, so they are only returned
    /// for the host to carry out.
    pub fn handle_shortcut(
        &mut self,
        chord: KeyChord,
        focus: FocusTarget,
    ) -> Option<EditorCommand> {
        let command = resolve_shortcut(chord, focus)?;
        match command {
            EditorCommand::Undo => {
                self.undo();
            }
            EditorCommand::Redo => {
                self.redo();
            }
            EditorCommand::ExportPng | EditorCommand::CopyToClipboard => {}
        }
        Some(command)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
