use serde::{Deserialize, Serialize};

/// One key press with its modifiers. `key` is compared case-insensitively, so hosts may pass
/// either `'z'` or `'Z'` for a shifted press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub key: char,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyChord {
    pub const fn new(key: char) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            shift: false,
            alt: false,
        }
    }

    pub const fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub const fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub const fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub const fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Ctrl on Linux/Windows, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusTarget {
    #[default]
    Canvas,
    /// Typing into a title, license key or similar field.
    TextInput,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditorCommand {
    Undo,
    Redo,
    ExportPng,
    CopyToClipboard,
}

pub fn resolve_shortcut(chord: KeyChord, focus: FocusTarget) -> Option<EditorCommand> {
    if focus == FocusTarget::TextInput || !chord.command() || chord.alt {
        return None;
    }
    match (chord.key.to_ascii_lowercase(), chord.shift) {
        ('z', false) => Some(EditorCommand::Undo),
        ('z', true) | ('y', false) => Some(EditorCommand::Redo),
        ('s', false) => Some(EditorCommand::ExportPng),
        ('c', true) => Some(EditorCommand::CopyToClipboard),
        _ => None,
    }
}
