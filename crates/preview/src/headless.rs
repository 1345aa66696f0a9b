//! Headless preview for tests.

use airmouse_capture::Frame;
use airmouse_common::error::AirmouseResult;

use crate::{Overlay, PreviewSink};

/// Preview sink that renders nothing and optionally requests exit after a
/// fixed number of presented frames.
#[derive(Debug, Default)]
pub struct HeadlessPreview {
    presented: usize,
    overlays_with_markers: usize,
    exit_after: Option<usize>,
}

impl HeadlessPreview {
    /// A preview that never requests exit.
    pub fn new() -> Self {
        Self::default()
    }

    /// A preview that requests exit after presenting `frames` frames,
    /// simulating the user pressing the exit key.
    pub fn exit_after(frames: usize) -> Self {
        Self {
            exit_after: Some(frames),
            ..Self::default()
        }
    }

    /// Frames presented so far.
    pub fn presented(&self) -> usize {
        self.presented
    }

    /// Frames presented with at least one overlay marker.
    pub fn overlays_with_markers(&self) -> usize {
        self.overlays_with_markers
    }
}

impl PreviewSink for HeadlessPreview {
    fn present(&mut self, _frame: &Frame, overlay: &Overlay) -> AirmouseResult<()> {
        self.presented += 1;
        if overlay.index_tip.is_some() || overlay.thumb_tip.is_some() {
            self.overlays_with_markers += 1;
        }
        Ok(())
    }

    fn exit_requested(&mut self) -> bool {
        match self.exit_after {
            Some(limit) => self.presented >= limit,
            None => false,
        }
    }

    fn name(&self) -> &str {
        "headless"
    }
}
