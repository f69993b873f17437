//! Snapframe is the editing core of a screenshot beautifier.
//!
//! A loaded screenshot is described by one immutable [`DocumentState`] snapshot. Edits are
//! partial [`DocumentPatch`]es merged into a new snapshot, recorded by a bounded linear
//! [`HistoryManager`] and turned into a renderer-agnostic [`VisualTree`] by pure derivation.
//! The session-oriented API is [`EditorSession`]:
//!
//! - Ingest an image from a file, drop or paste
//! - Apply patches, templates, undo and redo
//! - Export through a [`CompositeRenderer`] into a [`DownloadSink`] or the clipboard
#![forbid(unsafe_code)]

mod foundation;

/// Clipboard collaborator and the transient "copied" indicator.
pub mod clipboard;
/// Editor settings loaded from JSON.
pub mod config;
/// The current snapshot and the patch builders that edit it.
pub mod document;
/// Raster export: file naming, encoding, renderer and sink boundaries.
pub mod export;
/// Undo/redo over document snapshots.
pub mod history;
/// Turning raw files, drops and pastes into loadable images.
pub mod ingest;
/// Keyboard shortcut resolution.
pub mod keyboard;
/// License key validation, verification and persistence.
pub mod license;
/// Document snapshot and patch types.
pub mod model;
/// Built-in backgrounds, aspect ratios, tints and style templates.
pub mod presets;
/// One open editor with its collaborators.
pub mod session;
/// Pure style derivation.
pub mod style;

pub use crate::foundation::color::Color;
pub use crate::foundation::error::{SnapframeError, SnapframeResult};

pub use crate::config::EditorConfig;
pub use crate::document::EditorDocument;
pub use crate::export::{
    CompositeRenderer, DirectorySink, DownloadSink, ExportFormat, ExportJob, ExportedFile,
    InMemorySink, RasterFrame, export_file_name,
};
pub use crate::history::HistoryManager;
pub use crate::model::{
    AspectRatio, Background, BackgroundId, BgPattern, DocumentPatch, DocumentState, Frame,
    ImageRef, Paint, TitleFont, TitlePosition,
};
pub use crate::session::EditorSession;
pub use crate::style::{VisualTree, render_tree};
