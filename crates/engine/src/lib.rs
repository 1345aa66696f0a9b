//! Airmouse Engine
//!
//! The capture-and-map loop: acquire a frame, mirror it, detect hand
//! landmarks, map the fingertip to screen space, dispatch pointer events,
//! classify the pinch, present the preview, and check for exit. One
//! iteration per frame, no buffering, no concurrency.

mod control_loop;

pub use control_loop::{ControlLoop, EngineConfig, LoopStats};
