use std::time::{Duration, Instant};

use crate::foundation::error::SnapframeResult;

pub const DEFAULT_FEEDBACK: Duration = Duration::from_secs(2);

/// System clipboard that accepts an image payload.
pub trait ClipboardSink {
    fn write_png(&mut self, png: &[u8]) -> SnapframeResult<()>;
}

/// The "copied!" indicator: raised on a successful copy, reads as cleared once its duration has
/// elapsed.
#[derive(Clone, Copy, Debug)]
pub struct CopyFeedback {
    raised_at: Option<Instant>,
    duration: Duration,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK)
    }
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            raised_at: None,
            duration,
        }
    }

    pub fn raise(&mut self, now: Instant) {
        self.raised_at = Some(now);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.raised_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.duration)
    }

    pub fn clear(&mut self) {
        self.raised_at = None;
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Keeps the last payload. Handy for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<Vec<u8>>,
}

impl ClipboardSink for MemoryClipboard {
    fn write_png(&mut self, png: &[u8]) -> SnapframeResult<()> {
        self.contents = Some(png.to_vec());
        Ok(())
    }
}
