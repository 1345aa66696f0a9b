//! Airmouse Hand Tracker
//!
//! The landmark detection collaborator. The model itself is external;
//! this crate only defines the boundary and ships two backends:
//!
//! - **Subprocess:** MediaPipe hand landmarker running in a helper
//!   process, frames in / JSON landmark sets out
//! - **Scripted:** pre-loaded landmark sequences for tests
//!
//! Detection is per-frame independent: no inter-frame state is guaranteed
//! by the collaborator, and "no hand found" is a normal result, never an
//! error.

pub mod scripted;
pub mod subprocess;

use airmouse_capture::Frame;
use airmouse_common::error::AirmouseResult;
use airmouse_hand_model::HandLandmarks;

pub use scripted::ScriptedDetector;
pub use subprocess::SubprocessDetector;

/// Trait for hand landmark detection backends.
pub trait HandDetector: Send {
    /// Detect hands in the given frame.
    ///
    /// Returns zero or more landmark sets in the order the collaborator
    /// enumerates them. An empty vec means no hand was visible.
    fn detect(&mut self, frame: &Frame) -> AirmouseResult<Vec<HandLandmarks>>;

    /// Backend name for logging.
    fn name(&self) -> &str;
}
