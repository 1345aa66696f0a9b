//! Airmouse Processing
//!
//! Pure per-frame functions between detection and dispatch:
//! - `mapping`: linear frame-space to screen-space interpolation
//! - `gesture`: pinch distance and the fixed-threshold click classifier
//! - `smooth`: optional streaming pointer smoothing
//!
//! Nothing here touches the OS or holds cross-frame state beyond the
//! smoother's short history buffer.

pub mod gesture;
pub mod mapping;
pub mod smooth;

pub use gesture::{pinch_distance, PinchClassifier};
pub use mapping::map_to_screen;
pub use smooth::{PointerSmoother, SmoothingAlgorithm};
