//! V4L2 webcam frame source (Linux).
//!
//! Capture runs on a dedicated thread that owns the device stream; decoded
//! frames arrive over a bounded channel. The control loop itself stays
//! synchronous, blocking on `next_frame` exactly like it would on a direct
//! device read.

use std::sync::mpsc::{Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

use airmouse_common::config::CameraConfig;
use airmouse_common::error::{AirmouseError, AirmouseResult};
use airmouse_hand_model::FrameSize;

use crate::{Frame, FrameSource};

const BUFFER_COUNT: u32 = 4;

type FrameResult = AirmouseResult<Frame>;

/// Frame source backed by a V4L2 device in MJPEG mode.
pub struct V4l2Source {
    size: FrameSize,
    device: Option<Device>,
    receiver: Option<Receiver<FrameResult>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for V4l2Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Source")
            .field("size", &self.size)
            .field("device", &self.device.as_ref().map(|_| "Device"))
            .field("receiver", &self.receiver)
            .field("thread_handle", &self.thread_handle)
            .finish()
    }
}

impl V4l2Source {
    /// Open the device and negotiate MJPEG at the requested geometry.
    ///
    /// Fails with `CaptureInit` when the device cannot be opened, rejects
    /// MJPEG, or refuses the format.
    pub fn new(config: &CameraConfig) -> AirmouseResult<Self> {
        let device = Device::with_path(&config.device).map_err(|e| {
            AirmouseError::capture_init(format!(
                "could not open camera device {:?}: {e}",
                config.device
            ))
        })?;

        let requested = Format::new(config.width, config.height, FourCC::new(b"MJPG"));
        let format = Capture::set_format(&device, &requested).map_err(|e| {
            AirmouseError::capture_init(format!("failed to set camera format: {e}"))
        })?;

        // The device may silently substitute another pixel format.
        if format.fourcc != FourCC::new(b"MJPG") {
            return Err(AirmouseError::capture_init(
                "MJPEG format not supported by camera device",
            ));
        }

        let params = v4l::video::capture::Parameters::with_fps(config.fps);
        Capture::set_params(&device, &params).map_err(|e| {
            AirmouseError::capture_init(format!("failed to set camera frame rate: {e}"))
        })?;

        // The device may also adjust the geometry; report what it accepted.
        let size = FrameSize::new(format.width, format.height);
        if size.width != config.width || size.height != config.height {
            tracing::warn!(
                requested_width = config.width,
                requested_height = config.height,
                actual_width = size.width,
                actual_height = size.height,
                "Camera adjusted requested frame geometry"
            );
        }

        Ok(Self {
            size,
            device: Some(device),
            receiver: None,
            thread_handle: None,
        })
    }

    /// Start the capture thread if not already running.
    fn ensure_started(&mut self) -> AirmouseResult<()> {
        if self.receiver.is_some() {
            return Ok(());
        }

        let device = self
            .device
            .take()
            .ok_or_else(|| AirmouseError::capture_frame("camera device already consumed"))?;

        let (tx, rx) = std::sync::mpsc::sync_channel(BUFFER_COUNT as usize);

        let handle = thread::spawn(move || {
            Self::capture_loop(device, tx);
        });

        self.receiver = Some(rx);
        self.thread_handle = Some(handle);

        Ok(())
    }

    /// Background capture loop: read MJPEG buffers, decode to RGB, send.
    ///
    /// Ends when the receiver is dropped or a read fails; a failure is
    /// forwarded through the channel so the control loop sees it.
    fn capture_loop(device: Device, tx: SyncSender<FrameResult>) {
        let mut stream = match MmapStream::with_buffers(&device, Type::VideoCapture, BUFFER_COUNT) {
            Ok(stream) => stream,
            Err(e) => {
                let _ = tx.send(Err(AirmouseError::capture_frame(format!(
                    "failed to start camera stream: {e}"
                ))));
                return;
            }
        };

        loop {
            let frame = match CaptureStream::next(&mut stream) {
                Ok((buffer, _metadata)) => Self::decode_mjpeg(buffer),
                Err(e) => Err(AirmouseError::capture_frame(format!(
                    "camera frame read failed: {e}"
                ))),
            };

            let failed = frame.is_err();
            if tx.send(frame).is_err() {
                // Receiver dropped, source is shutting down.
                break;
            }
            if failed {
                break;
            }
        }
    }

    fn decode_mjpeg(buffer: &[u8]) -> FrameResult {
        let decoded = image::load_from_memory_with_format(buffer, image::ImageFormat::Jpeg)
            .map_err(|e| AirmouseError::capture_frame(format!("MJPEG decode failed: {e}")))?;
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();
        Frame::from_rgb8(width, height, rgb.into_raw())
    }
}

impl FrameSource for V4l2Source {
    fn next_frame(&mut self) -> AirmouseResult<Frame> {
        self.ensure_started()?;

        let receiver = self
            .receiver
            .as_mut()
            .ok_or_else(|| AirmouseError::capture_frame("capture channel not initialized"))?;

        receiver
            .recv()
            .map_err(|_| AirmouseError::capture_frame("capture thread stopped"))?
    }

    fn frame_size(&self) -> FrameSize {
        self.size
    }

    fn name(&self) -> &str {
        "v4l2"
    }
}

impl Drop for V4l2Source {
    fn drop(&mut self) {
        // Dropping the receiver signals the capture thread to stop.
        drop(self.receiver.take());

        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_device_is_capture_init_error() {
        let config = CameraConfig {
            device: PathBuf::from("/dev/video-does-not-exist"),
            width: 640,
            height: 480,
            fps: 30,
        };

        let err = V4l2Source::new(&config).unwrap_err();
        assert!(matches!(err, AirmouseError::CaptureInit { .. }));
    }
}
