use std::time::Duration;

use super::*;
use crate::clipboard::MemoryClipboard;
use crate::export::{InMemorySink, RasterFrame};
use crate::license::{MemoryLicenseStore, VerifyRequest, VerifyResponse};
use crate::model::Frame;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

struct Flat;

impl CompositeRenderer for Flat {
    fn rasterize(&mut self, _tree: &VisualTree, _pixel_ratio: f32) -> SnapframeResult<RasterFrame> {
        Ok(RasterFrame::solid(2, 2, [0, 0, 0, 255]))
    }
}

struct Broken;

impl CompositeRenderer for Broken {
    fn rasterize(&mut self, _tree: &VisualTree, _pixel_ratio: f32) -> SnapframeResult<RasterFrame> {
        Err(SnapframeError::render("canvas tainted"))
    }
}

struct Gateway(bool);

impl LicenseGateway for Gateway {
    fn verify(&mut self, _request: &VerifyRequest) -> Result<VerifyResponse, LicenseError> {
        Ok(VerifyResponse {
            success: self.0,
            ..VerifyResponse::default()
        })
    }
}

fn with_image() -> EditorSession {
    let mut s = EditorSession::default();
    s.ingest(&[ImageSource::file("shot.png", PNG_MAGIC.to_vec())])
        .unwrap();
    s
}

#[test]
fn open_without_key_is_free_tier() {
    let s = EditorSession::open(EditorConfig::default(), &MemoryLicenseStore::default());
    assert!(!s.state().is_pro);
    assert!(s.state().watermark);
    assert!(s.license().is_none());
}

#[test]
fn open_with_stored_key_is_pro() {
    let store = MemoryLicenseStore::with_key(LicenseKey::parse("STORED-KEY").unwrap());
    let s = EditorSession::open(EditorConfig::default(), &store);
    assert!(s.state().is_pro);
    assert!(!s.state().watermark);
}

#[test]
fn ingest_is_an_undoable_edit() {
    let mut s = with_image();
    assert_eq!(s.state().file_name, "shot.png");
    assert!(s.state().has_image());
    s.undo().unwrap();
    assert!(!s.state().has_image());
}

#[test]
fn non_image_ingest_changes_nothing() {
    let mut s = EditorSession::default();
    let txt = ImageSource::file("a.txt", b"hi".to_vec()).with_mime("text/plain");
    assert!(s.ingest(&[txt]).is_none());
    assert!(!s.history().can_undo());
}

#[test]
fn background_image_upload_is_an_undoable_edit() {
    let mut s = with_image();
    let before = s.snapshot();

    let after = s
        .set_background_image(&ImageSource::file("bg.png", PNG_MAGIC.to_vec()))
        .unwrap();
    assert!(after.background.is_custom());
    let css = after.background.paint.to_css();
    assert!(css.starts_with("url(\"data:image/png;base64,"), "{css}");
    assert_eq!(after.image, before.image);

    assert_eq!(*s.undo().unwrap(), *before);
    let text = ImageSource::file("bg.txt", b"x".to_vec()).with_mime("text/plain");
    assert!(s.set_background_image(&text).is_none());
}

#[test]
fn export_without_image_is_refused() {
    let mut s = EditorSession::default();
    assert!(s.start_export(ExportFormat::Png).is_none());
    assert!(!s.is_exporting());
}

#[test]
fn export_flag_tracks_job_lifecycle() {
    let mut s = with_image();
    let job = s.start_export(ExportFormat::Webp).unwrap();
    assert!(s.is_exporting());
    assert_eq!(job.file_name, "shot-snapframe.webp");
    assert_eq!(job.pixel_ratio, 2.0);

    let mut sink = InMemorySink::default();
    let result = job.run(&mut Flat);
    assert!(s.complete_export(&job, result, &mut sink));
    assert!(!s.is_exporting());
    assert_eq!(sink.files[0].mime_type, "image/webp");
}

#[test]
fn overlapping_exports_get_distinct_ids() {
    let mut s = with_image();
    let a = s.start_export(ExportFormat::Png).unwrap();
    let b = s.start_export(ExportFormat::Jpeg).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn failed_export_clears_flag_and_keeps_state() {
    let mut s = with_image();
    let before = s.snapshot();
    let mut sink = InMemorySink::default();
    assert!(!s.export_with(ExportFormat::Png, &mut Broken, &mut sink));
    assert!(!s.is_exporting());
    assert!(sink.files.is_empty());
    assert_eq!(*s.snapshot(), *before);
}

#[test]
fn copy_raises_feedback_only_on_success() {
    let t0 = Instant::now();
    let mut s = with_image();
    let mut clip = MemoryClipboard::default();

    assert!(!s.copy_to_clipboard(&mut Broken, &mut clip, t0));
    assert!(!s.copy_feedback_active(t0));
    assert!(clip.contents.is_none());

    assert!(s.copy_to_clipboard(&mut Flat, &mut clip, t0));
    assert!(s.copy_feedback_active(t0 + Duration::from_millis(500)));
    assert!(!s.copy_feedback_active(t0 + Duration::from_secs(2)));
    assert!(clip.contents.unwrap().starts_with(b"\x89PNG"));
}

#[test]
fn activation_sets_pro_without_touching_history() {
    let mut s = with_image();
    s.update(&DocumentPatch::new().frame(Frame::Macos));
    let depth = s.history().undo_depth();

    let mut store = MemoryLicenseStore::default();
    s.activate_license("  GOOD-LICENSE  ", &mut Gateway(true), &mut store)
        .unwrap();
    assert!(s.state().is_pro);
    assert!(!s.state().watermark);
    assert_eq!(s.history().undo_depth(), depth);
    assert_eq!(store.load().unwrap().unwrap().as_str(), "GOOD-LICENSE");

    // undo must not bring the watermark back
    s.undo().unwrap();
    assert!(s.state().is_pro);
    assert!(!s.state().watermark);
}

#[test]
fn rejected_activation_leaves_everything_alone() {
    let mut s = with_image();
    let before = s.snapshot();
    let mut store = MemoryLicenseStore::default();
    let err = s
        .activate_license("BAD-LICENSE", &mut Gateway(false), &mut store)
        .unwrap_err();
    assert!(matches!(err, LicenseError::Rejected(_)));
    assert_eq!(*s.snapshot(), *before);
    assert!(s.license().is_none());
}

#[test]
fn shortcuts_drive_history() {
    let mut s = with_image();
    s.update(&DocumentPatch::new().padding(10));

    let undo = KeyChord::new('z').with_ctrl();
    assert_eq!(s.handle_shortcut(undo, FocusTarget::TextInput), None);
    assert_eq!(s.state().padding, 10);

    assert_eq!(s.handle_shortcut(undo, FocusTarget::Canvas), Some(EditorCommand::Undo));
    assert_eq!(s.state().padding, DocumentState::default().padding);

    let redo = KeyChord::new('y').with_meta();
    assert_eq!(s.handle_shortcut(redo, FocusTarget::Canvas), Some(EditorCommand::Redo));
    assert_eq!(s.state().padding, 10);

    let save = KeyChord::new('s').with_ctrl();
    assert_eq!(
        s.handle_shortcut(save, FocusTarget::Canvas),
        Some(EditorCommand::ExportPng)
    );
}

#[test]
fn configured_capacity_bounds_history() {
    let cfg = EditorConfig {
        history_capacity: 3,
        ..EditorConfig::default()
    };
    let mut s = EditorSession::new(cfg);
    for p in 0..10 {
        s.update(&DocumentPatch::new().padding(p));
    }
    assert_eq!(s.history().undo_depth(), 3);
}
