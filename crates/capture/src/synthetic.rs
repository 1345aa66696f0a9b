//! Synthetic frame source for tests.

use std::collections::VecDeque;

use airmouse_common::error::{AirmouseError, AirmouseResult};
use airmouse_hand_model::FrameSize;

use crate::{Frame, FrameSource};

/// Frame source backed by a pre-loaded frame queue.
///
/// Once the queue runs dry, `next_frame` fails with `CaptureFrame`, which
/// ends the control loop the same way a real camera read failure would.
pub struct SyntheticSource {
    frames: VecDeque<Frame>,
    size: FrameSize,
}

impl SyntheticSource {
    /// Create a source that yields the given frames in order.
    pub fn new(size: FrameSize, frames: Vec<Frame>) -> Self {
        Self {
            frames: frames.into(),
            size,
        }
    }

    /// Create a source yielding `count` identical blank frames.
    pub fn blank(size: FrameSize, count: usize) -> Self {
        let frames = (0..count)
            .map(|_| Frame::solid(size.width, size.height, [0, 0, 0]))
            .collect();
        Self::new(size, frames)
    }

    /// Frames still queued.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl FrameSource for SyntheticSource {
    fn next_frame(&mut self) -> AirmouseResult<Frame> {
        self.frames
            .pop_front()
            .ok_or_else(|| AirmouseError::capture_frame("synthetic frame source exhausted"))
    }

    fn frame_size(&self) -> FrameSize {
        self.size
    }

    fn name(&self) -> &str {
        "synthetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_frames_then_fails() {
        let size = FrameSize::new(4, 4);
        let mut source = SyntheticSource::blank(size, 2);

        assert!(source.next_frame().is_ok());
        assert!(source.next_frame().is_ok());

        let err = source.next_frame().unwrap_err();
        assert!(err.is_fatal_capture());
    }

    #[test]
    fn test_reports_size() {
        let size = FrameSize::new(640, 480);
        let source = SyntheticSource::blank(size, 1);
        assert_eq!(source.frame_size(), size);
    }
}
