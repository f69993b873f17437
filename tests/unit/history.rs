use super::*;
use crate::model::{Frame, ImageRef};

fn pad(v: u32) -> DocumentPatch {
    DocumentPatch::new().padding(v)
}

#[test]
fn undo_returns_to_state_after_first_update() {
    let mut h = HistoryManager::default();
    let first = h.update(&pad(10));
    let second = h.update(&pad(20));

    let undone = h.undo().unwrap();
    assert_eq!(undone, first);

    let redone = h.redo().unwrap();
    assert_eq!(redone, second);
    assert_eq!(h.state().padding, 20);
}

#[test]
fn new_update_after_undo_clears_future() {
    let mut h = HistoryManager::default();
    h.update(&pad(10));
    h.update(&pad(20));
    h.undo();
    assert!(h.can_redo());

    h.update(&pad(30));
    assert!(!h.can_redo());
    assert!(h.redo().is_none());
    assert_eq!(h.state().padding, 30);
}

#[test]
fn boundaries_are_noops() {
    let mut h = HistoryManager::default();
    assert!(h.undo().is_none());
    assert!(h.redo().is_none());
    assert_eq!(h.state(), &DocumentState::default());

    h.update(&pad(1));
    h.undo();
    assert!(h.undo().is_none());
    assert_eq!(h.state().padding, 64);
}

#[test]
fn past_is_bounded_and_evicts_oldest() {
    let mut h = HistoryManager::new(EditorDocument::new(), 3);
    for v in 1..=5 {
        h.update(&pad(v));
    }
    assert_eq!(h.undo_depth(), 3);
    let kept: Vec<u32> = h.past().map(|s| s.padding).collect();
    assert_eq!(kept, vec![2, 3, 4]);

    while h.undo().is_some() {}
    assert_eq!(h.state().padding, 2);
}

#[test]
fn redo_respects_capacity() {
    let mut h = HistoryManager::new(EditorDocument::new(), 2);
    h.update(&pad(1));
    h.update(&pad(2));
    h.undo();
    h.undo();
    assert_eq!(h.redo_depth(), 2);
    h.redo();
    h.redo();
    assert_eq!(h.undo_depth(), 2);
    assert_eq!(h.state().padding, 2);
}

#[test]
fn untracked_updates_do_not_touch_history() {
    let mut h = HistoryManager::default();
    h.update(&pad(10));
    h.undo();
    h.update_untracked(&pad(99));
    assert_eq!(h.undo_depth(), 0);
    assert_eq!(h.redo_depth(), 1);
}

#[test]
fn reset_and_templates_are_tracked() {
    let mut h = HistoryManager::default();
    h.update(&DocumentPatch::new().image(Some(ImageRef::from("img"))));
    h.apply_template("phone-hero").unwrap();
    assert_eq!(h.state().frame, Frame::Phone);
    assert_eq!(h.state().background.id.as_str(), "cosmic");

    h.reset();
    assert_eq!(h.state().frame, Frame::None);
    assert!(h.state().has_image());

    h.undo();
    assert_eq!(h.state().frame, Frame::Phone);
    h.undo();
    assert_eq!(h.state().frame, Frame::None);
}

#[test]
fn unknown_template_changes_nothing() {
    let mut h = HistoryManager::default();
    assert!(h.apply_template("vaporwave").is_none());
    assert!(!h.can_undo());
}

#[test]
fn undo_never_brings_back_watermark_for_pro_session() {
    let mut h = HistoryManager::default();
    h.update(&pad(10));
    h.update(&pad(20));
    h.set_pro(true);
    assert!(!h.state().watermark);

    h.undo();
    assert_eq!(h.state().padding, 10);
    assert!(h.state().is_pro);
    assert!(!h.state().watermark);

    h.redo();
    assert_eq!(h.state().padding, 20);
    assert!(h.state().is_pro);
}

#[test]
fn set_background_is_tracked() {
    let mut h = HistoryManager::default();
    h.set_background(Paint::Transparent, BackgroundId::Custom);
    assert!(h.state().background.is_custom());
    h.undo();
    assert_eq!(h.state().background.id.as_str(), "sunset");
}

#[test]
fn tracked_pro_update_is_undone_literally() {
    let mut h = HistoryManager::default();
    let after_first = h.update(&pad(10));
    let after_pro = h.update(&DocumentPatch::new().is_pro(true));
    assert!(after_pro.is_pro);
    assert!(!after_pro.watermark);
    assert!(!h.is_entitled());

    let undone = h.undo().unwrap();
    assert_eq!(*undone, *after_first);
    assert!(!undone.is_pro);
    assert!(undone.watermark);

    let redone = h.redo().unwrap();
    assert_eq!(*redone, *after_pro);
}

#[test]
fn pro_start_document_counts_as_entitled() {
    let mut h = HistoryManager::new(EditorDocument::with_entitlement(true), 10);
    assert!(h.is_entitled());
    h.update(&pad(5));
    h.undo();
    assert!(h.state().is_pro);
    assert!(!h.state().watermark);
}

#[test]
fn revoking_pro_stops_carrying_it() {
    let mut h = HistoryManager::default();
    h.update(&pad(10));
    h.set_pro(true);
    h.set_pro(false);
    assert!(!h.is_entitled());

    let undone = h.undo().unwrap();
    assert!(!undone.is_pro);
    assert!(undone.watermark);
}
