//! Scripted detector for tests.

use std::collections::VecDeque;

use airmouse_capture::Frame;
use airmouse_common::error::AirmouseResult;
use airmouse_hand_model::landmark::{landmark_index, LANDMARK_COUNT};
use airmouse_hand_model::{HandLandmarks, Handedness, Landmark};

use crate::HandDetector;

/// Detector that replays a pre-loaded per-frame landmark script.
///
/// Each script entry is the full detection result for one frame; an empty
/// entry means no hand was visible. Once the script is exhausted every
/// further frame detects nothing.
pub struct ScriptedDetector {
    script: VecDeque<Vec<HandLandmarks>>,
}

impl ScriptedDetector {
    /// Create a detector from explicit per-frame results.
    pub fn new(script: Vec<Vec<HandLandmarks>>) -> Self {
        Self {
            script: script.into(),
        }
    }

    /// Create a detector that never sees a hand.
    pub fn empty() -> Self {
        Self {
            script: VecDeque::new(),
        }
    }

    /// Build a single-hand frame result from normalized fingertip and
    /// thumb-tip positions; all other landmarks sit at the origin.
    pub fn hand_with_tips(index_tip: (f32, f32), thumb_tip: (f32, f32)) -> Vec<HandLandmarks> {
        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        landmarks[landmark_index::INDEX_FINGER_TIP] = Landmark::new(index_tip.0, index_tip.1);
        landmarks[landmark_index::THUMB_TIP] = Landmark::new(thumb_tip.0, thumb_tip.1);
        vec![HandLandmarks {
            landmarks,
            confidence: 0.99,
            handedness: Handedness::Right,
        }]
    }
}

impl HandDetector for ScriptedDetector {
    fn detect(&mut self, _frame: &Frame) -> AirmouseResult<Vec<HandLandmarks>> {
        Ok(self.script.pop_front().unwrap_or_default())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airmouse_hand_model::FrameSize;

    #[test]
    fn test_replays_script_then_sees_nothing() {
        let frame = Frame::solid(4, 4, [0, 0, 0]);
        let mut detector = ScriptedDetector::new(vec![
            ScriptedDetector::hand_with_tips((0.5, 0.5), (0.5, 0.5)),
            Vec::new(),
        ]);

        assert_eq!(detector.detect(&frame).unwrap().len(), 1);
        assert!(detector.detect(&frame).unwrap().is_empty());
        assert!(detector.detect(&frame).unwrap().is_empty());
    }

    #[test]
    fn test_hand_with_tips_places_landmarks() {
        let hands = ScriptedDetector::hand_with_tips((0.5, 0.25), (0.75, 0.5));
        let hand = &hands[0];
        let frame = FrameSize::new(640, 480);

        let index = hand.index_finger_tip_pixels(frame);
        assert!((index.x - 320.0).abs() < 1e-6);
        assert!((index.y - 120.0).abs() < 1e-6);

        let thumb = hand.thumb_tip_pixels(frame);
        assert!((thumb.x - 480.0).abs() < 1e-6);
        assert!((thumb.y - 240.0).abs() < 1e-6);
    }
}
