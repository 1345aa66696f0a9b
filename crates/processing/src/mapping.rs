//! Frame-space to screen-space coordinate mapping.

use airmouse_hand_model::{FrameSize, Point2D, ScreenSize};

/// Map a frame-pixel position to an absolute screen-pixel position by
/// linear interpolation on each axis:
///
/// `screen_x = x * screen_width / frame_width`, same for y.
///
/// The mapping is monotonic and maps `[0, frame_width]` onto
/// `[0, screen_width]` exactly.
pub fn map_to_screen(point: Point2D, frame: FrameSize, screen: ScreenSize) -> Point2D {
    Point2D::new(
        point.x * screen.width as f64 / frame.width as f64,
        point.y * screen.height as f64 / frame.height as f64,
    )
}
