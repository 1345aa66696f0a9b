//! Airmouse Capture
//!
//! Acquires webcam frames for the control loop. The camera is an opaque
//! frame source: it yields frames or signals unavailability, nothing more.
//!
//! - **V4L2:** memory-mapped capture from a `/dev/video*` device (Linux)
//! - **Synthetic:** pre-loaded frames for tests

pub mod frame;
pub mod synthetic;
#[cfg(target_os = "linux")]
pub mod v4l2;

use airmouse_common::error::AirmouseResult;
use airmouse_hand_model::FrameSize;

pub use frame::Frame;
pub use synthetic::SyntheticSource;
#[cfg(target_os = "linux")]
pub use v4l2::V4l2Source;

/// Trait for camera frame sources.
///
/// Opening the device happens in the backend constructor and fails with
/// `AirmouseError::CaptureInit`. A failed read mid-run yields
/// `AirmouseError::CaptureFrame`; both are fatal to the control loop.
pub trait FrameSource: Send {
    /// Block until the next frame is available and return it.
    fn next_frame(&mut self) -> AirmouseResult<Frame>;

    /// The frame dimensions this source produces.
    fn frame_size(&self) -> FrameSize;

    /// Backend name for logging.
    fn name(&self) -> &str;
}
