//! Airmouse Hand Model
//!
//! Core data types shared by the capture, detection, processing, and
//! pointer crates:
//! - Hand landmark sets in normalized image coordinates
//! - Frame and screen geometry
//! - Dispatched pointer events with JSONL serialization

pub mod event;
pub mod geometry;
pub mod landmark;

pub use event::{EventKind, EventStreamHeader, MouseButton, PointerEvent};
pub use geometry::{FrameSize, Point2D, ScreenSize};
pub use landmark::{HandLandmarks, Handedness, Landmark};
