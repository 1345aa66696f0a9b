//! Captured frame representation.

use airmouse_common::error::{AirmouseError, AirmouseResult};
use airmouse_hand_model::FrameSize;

/// A single captured image in interleaved RGB8 layout.
///
/// Frames are ephemeral: produced once per loop iteration and discarded
/// after processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    /// Interleaved RGB bytes, row-major, `width * height * 3` long.
    data: Vec<u8>,
}

impl Frame {
    /// Wrap raw RGB8 data, validating the buffer length.
    pub fn from_rgb8(width: u32, height: u32, data: Vec<u8>) -> AirmouseResult<Self> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(AirmouseError::capture_frame(format!(
                "RGB buffer length {} does not match {}x{} frame (expected {})",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A single-color frame, mostly useful in tests.
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for _ in 0..(width as usize * height as usize) {
            data.extend_from_slice(&rgb);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> FrameSize {
        FrameSize::new(self.width, self.height)
    }

    /// Raw interleaved RGB bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The RGB value at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    /// Set the RGB value at `(x, y)`. Out-of-bounds writes are ignored so
    /// overlay drawing near frame edges stays safe.
    pub fn put_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        self.data[idx..idx + 3].copy_from_slice(&rgb);
    }

    /// Mirror the frame horizontally in place, so on-screen motion
    /// matches the user's perceived motion.
    pub fn mirror_horizontal(&mut self) {
        if self.width == 0 {
            return;
        }
        let row_len = self.width as usize * 3;
        for row in self.data.chunks_exact_mut(row_len) {
            let mut left = 0usize;
            let mut right = self.width as usize - 1;
            while left < right {
                for c in 0..3 {
                    row.swap(left * 3 + c, right * 3 + c);
                }
                left += 1;
                right -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb8_validates_length() {
        assert!(Frame::from_rgb8(2, 2, vec![0u8; 12]).is_ok());
        assert!(Frame::from_rgb8(2, 2, vec![0u8; 11]).is_err());
    }

    #[test]
    fn test_mirror_swaps_columns() {
        let mut frame = Frame::solid(3, 1, [0, 0, 0]);
        frame.put_pixel(0, 0, [255, 0, 0]);
        frame.put_pixel(2, 0, [0, 0, 255]);

        frame.mirror_horizontal();

        assert_eq!(frame.pixel(0, 0), [0, 0, 255]);
        assert_eq!(frame.pixel(1, 0), [0, 0, 0]);
        assert_eq!(frame.pixel(2, 0), [255, 0, 0]);
    }

    #[test]
    fn test_mirror_twice_is_identity() {
        let mut frame = Frame::solid(4, 3, [10, 20, 30]);
        frame.put_pixel(1, 2, [1, 2, 3]);
        let original = frame.clone();

        frame.mirror_horizontal();
        frame.mirror_horizontal();

        assert_eq!(frame, original);
    }

    #[test]
    fn test_put_pixel_out_of_bounds_is_ignored() {
        let mut frame = Frame::solid(2, 2, [0, 0, 0]);
        frame.put_pixel(5, 5, [255, 255, 255]);
        assert_eq!(frame.pixel(1, 1), [0, 0, 0]);
    }
}
