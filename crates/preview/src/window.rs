//! Software-rendered preview window using `minifb`.

use minifb::{Key, Window, WindowOptions};

use airmouse_capture::Frame;
use airmouse_common::error::{AirmouseError, AirmouseResult};
use airmouse_hand_model::FrameSize;

use crate::{Overlay, PreviewSink};

/// Marker radius in pixels.
const MARKER_RADIUS: i32 = 8;
/// Index fingertip marker (green).
const INDEX_COLOR: u32 = 0xFF00FF00;
/// Thumb tip marker (yellow).
const THUMB_COLOR: u32 = 0xFFFFFF00;

/// Preview sink backed by a minifb window.
///
/// The exit keys are `Q` and `Escape`; closing the window also requests
/// exit.
pub struct WindowPreview {
    window: Window,
    buf: Vec<u32>,
    width: usize,
    height: usize,
}

impl WindowPreview {
    /// Open a window sized to the camera frame.
    pub fn new(title: &str, size: FrameSize) -> AirmouseResult<Self> {
        let width = size.width as usize;
        let height = size.height as usize;

        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| AirmouseError::preview(format!("failed to open preview window: {e}")))?;

        // The camera paces the loop; don't let minifb throttle it further.
        window.set_target_fps(0);

        Ok(Self {
            window,
            buf: vec![0u32; width * height],
            width,
            height,
        })
    }

    fn blit_frame(&mut self, frame: &Frame) {
        let data = frame.data();
        for (i, px) in self.buf.iter_mut().enumerate() {
            let idx = i * 3;
            let r = data[idx] as u32;
            let g = data[idx + 1] as u32;
            let b = data[idx + 2] as u32;
            *px = 0xFF00_0000 | (r << 16) | (g << 8) | b;
        }
    }

    fn draw_marker(&mut self, cx: f64, cy: f64, color: u32) {
        let cx = cx.round() as i32;
        let cy = cy.round() as i32;
        for dy in -MARKER_RADIUS..=MARKER_RADIUS {
            for dx in -MARKER_RADIUS..=MARKER_RADIUS {
                if dx * dx + dy * dy > MARKER_RADIUS * MARKER_RADIUS {
                    continue;
                }
                let x = cx + dx;
                let y = cy + dy;
                if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
                    continue;
                }
                self.buf[y as usize * self.width + x as usize] = color;
            }
        }
    }
}

impl PreviewSink for WindowPreview {
    fn present(&mut self, frame: &Frame, overlay: &Overlay) -> AirmouseResult<()> {
        if frame.width() as usize != self.width || frame.height() as usize != self.height {
            return Err(AirmouseError::preview(format!(
                "frame size {}x{} does not match preview window {}x{}",
                frame.width(),
                frame.height(),
                self.width,
                self.height
            )));
        }

        self.blit_frame(frame);
        if let Some(tip) = overlay.index_tip {
            self.draw_marker(tip.x, tip.y, INDEX_COLOR);
        }
        if let Some(tip) = overlay.thumb_tip {
            self.draw_marker(tip.x, tip.y, THUMB_COLOR);
        }

        self.window
            .update_with_buffer(&self.buf, self.width, self.height)
            .map_err(|e| AirmouseError::preview(format!("preview update failed: {e}")))
    }

    fn exit_requested(&mut self) -> bool {
        !self.window.is_open()
            || self.window.is_key_down(Key::Q)
            || self.window.is_key_down(Key::Escape)
    }

    fn name(&self) -> &str {
        "window"
    }
}
