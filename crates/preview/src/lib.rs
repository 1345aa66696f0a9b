//! Airmouse Preview
//!
//! Presents each processed frame in a window with overlay markers at the
//! two tracked landmarks, and polls for the exit key. Rendering is
//! software-only; the window doubles as the keyboard surface for quitting.

pub mod headless;
pub mod window;

use airmouse_capture::Frame;
use airmouse_common::error::AirmouseResult;
use airmouse_hand_model::Point2D;

pub use headless::HeadlessPreview;
pub use window::WindowPreview;

/// Overlay markers for one frame, in frame-pixel coordinates.
///
/// Both markers are absent when no hand was detected this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay {
    /// Index fingertip position.
    pub index_tip: Option<Point2D>,
    /// Thumb tip position.
    pub thumb_tip: Option<Point2D>,
}

impl Overlay {
    /// Overlay with both tracked points set.
    pub fn tips(index_tip: Point2D, thumb_tip: Point2D) -> Self {
        Self {
            index_tip: Some(index_tip),
            thumb_tip: Some(thumb_tip),
        }
    }

    /// Overlay with no markers (no hand this frame).
    pub fn none() -> Self {
        Self::default()
    }
}

/// Trait for preview display sinks.
pub trait PreviewSink {
    /// Present one frame with its overlay.
    fn present(&mut self, frame: &Frame, overlay: &Overlay) -> AirmouseResult<()>;

    /// Whether the user asked to quit (exit key or window closed).
    /// Checked once per loop iteration, after presenting.
    fn exit_requested(&mut self) -> bool;

    /// Backend name for logging.
    fn name(&self) -> &str;
}
