//! Airmouse Pointer
//!
//! Dispatches cursor movement and click events to the operating system.
//! The OS pointer is global mutable state, so everything goes through the
//! `PointerSink` trait: production backends drive the real pointer, tests
//! substitute a recording stub.
//!
//! - **Enigo:** cross-platform injection (default)
//! - **Uinput:** Linux virtual absolute-pointer device
//! - **Recording:** in-memory stub for tests
//!
//! Dispatched events can additionally be logged to an append-only JSONL
//! file for diagnostics.

pub mod enigo_sink;
pub mod logger;
pub mod recording;
#[cfg(target_os = "linux")]
pub mod uinput;

use airmouse_common::error::AirmouseResult;
use airmouse_hand_model::MouseButton;

pub use enigo_sink::EnigoSink;
pub use logger::EventLogger;
pub use recording::RecordingSink;
#[cfg(target_os = "linux")]
pub use uinput::UinputSink;

/// Trait for pointer injection backends.
///
/// Coordinates are absolute screen pixels. Side effects are global,
/// process-external, and irreversible.
pub trait PointerSink: Send {
    /// Move the pointer to an absolute screen position.
    fn move_to(&mut self, x: f64, y: f64) -> AirmouseResult<()>;

    /// Click (press and release) the given button at the current
    /// pointer position.
    fn click(&mut self, button: MouseButton) -> AirmouseResult<()>;

    /// Backend name for logging.
    fn name(&self) -> &str;
}
