//! Hand landmark types.
//!
//! The detection collaborator returns, per frame, zero or more sets of 21
//! normalized landmark positions following the MediaPipe hand landmark
//! model convention. Positions are per-frame independent; nothing here is
//! retained across frames.

use serde::{Deserialize, Serialize};

use crate::geometry::{FrameSize, Point2D};

/// Number of landmarks in one hand set.
pub const LANDMARK_COUNT: usize = 21;

/// Landmark indices (MediaPipe hand landmark model convention).
pub mod landmark_index {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_FINGER_MCP: usize = 5;
    pub const INDEX_FINGER_PIP: usize = 6;
    pub const INDEX_FINGER_DIP: usize = 7;
    pub const INDEX_FINGER_TIP: usize = 8;
    pub const MIDDLE_FINGER_MCP: usize = 9;
    pub const MIDDLE_FINGER_PIP: usize = 10;
    pub const MIDDLE_FINGER_DIP: usize = 11;
    pub const MIDDLE_FINGER_TIP: usize = 12;
    pub const RING_FINGER_MCP: usize = 13;
    pub const RING_FINGER_PIP: usize = 14;
    pub const RING_FINGER_DIP: usize = 15;
    pub const RING_FINGER_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;
}

/// A single landmark in normalized image coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// X coordinate, normalized to [0.0, 1.0] of image width.
    pub x: f32,
    /// Y coordinate, normalized to [0.0, 1.0] of image height.
    pub y: f32,
    /// Depth relative to the wrist (model-defined units).
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Convert to frame-pixel coordinates.
    pub fn to_pixels(&self, frame: FrameSize) -> Point2D {
        Point2D::new(
            self.x as f64 * frame.width as f64,
            self.y as f64 * frame.height as f64,
        )
    }
}

/// Which hand the landmark set belongs to, as reported by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Handedness {
    Left,
    Right,
    #[default]
    Unknown,
}

/// One detected hand: an ordered set of 21 normalized landmarks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandLandmarks {
    /// All 21 landmarks, indexed per `landmark_index`.
    pub landmarks: [Landmark; LANDMARK_COUNT],

    /// Detection confidence score in [0.0, 1.0].
    pub confidence: f32,

    /// Reported handedness.
    #[serde(default)]
    pub handedness: Handedness,
}

impl HandLandmarks {
    /// Build a hand set from a full slice of landmarks.
    ///
    /// Returns `None` when the slice does not contain exactly 21 entries.
    pub fn from_slice(landmarks: &[Landmark], confidence: f32, handedness: Handedness) -> Option<Self> {
        let landmarks: [Landmark; LANDMARK_COUNT] = landmarks.try_into().ok()?;
        Some(Self {
            landmarks,
            confidence,
            handedness,
        })
    }

    /// The index fingertip landmark.
    pub fn index_finger_tip(&self) -> Landmark {
        self.landmarks[landmark_index::INDEX_FINGER_TIP]
    }

    /// The thumb tip landmark.
    pub fn thumb_tip(&self) -> Landmark {
        self.landmarks[landmark_index::THUMB_TIP]
    }

    /// Index fingertip in frame-pixel coordinates.
    pub fn index_finger_tip_pixels(&self, frame: FrameSize) -> Point2D {
        self.index_finger_tip().to_pixels(frame)
    }

    /// Thumb tip in frame-pixel coordinates.
    pub fn thumb_tip_pixels(&self, frame: FrameSize) -> Point2D {
        self.thumb_tip().to_pixels(frame)
    }
}
