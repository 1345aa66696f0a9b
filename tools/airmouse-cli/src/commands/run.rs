//! Track a hand and drive the OS pointer.

use std::path::PathBuf;

use anyhow::Context;

use airmouse_capture::FrameSource;
use airmouse_common::config::AirmouseConfig;
use airmouse_engine::{ControlLoop, EngineConfig};
use airmouse_hand_model::{EventStreamHeader, FrameSize, ScreenSize};
use airmouse_hand_tracker::SubprocessDetector;
use airmouse_pointer::{EnigoSink, EventLogger, PointerSink};
use airmouse_preview::WindowPreview;
use airmouse_processing::SmoothingAlgorithm;

/// Command-line overrides applied on top of the configuration file.
pub struct RunArgs {
    pub device: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub screen_width: Option<u32>,
    pub screen_height: Option<u32>,
    pub click_threshold: Option<f64>,
    pub detection_confidence: Option<f32>,
    pub tracking_confidence: Option<f32>,
    pub helper: Option<PathBuf>,
    pub smoothing: Option<String>,
    pub smoothing_strength: Option<f64>,
    pub sink: String,
    pub log_events: Option<PathBuf>,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let config = effective_config(&args);

    let screen = ScreenSize::new(config.screen.width, config.screen.height);
    let smoothing = SmoothingAlgorithm::from_config(&config.smoothing)?;

    let source = open_camera(&config)?;
    // The device may have negotiated a different geometry than requested;
    // the preview window and the log header must match what it delivers.
    let frame_size = source.frame_size();
    let detector =
        SubprocessDetector::new(&config.detector).context("failed to start the hand detector")?;
    let sink = open_sink(&args.sink, screen)?;
    let preview =
        WindowPreview::new("Airmouse", frame_size).context("failed to open the preview window")?;

    let mut control = ControlLoop::new(
        EngineConfig {
            screen,
            click_threshold_px: config.gesture.click_threshold_px,
            smoothing,
        },
        source,
        Box::new(detector),
        sink,
        Box::new(preview),
    );

    if let Some(path) = args.log_events {
        let header = stream_header(frame_size, screen, control.epoch_wall());
        let logger = EventLogger::new(path, header).context("failed to open the event log")?;
        control = control.with_logger(logger);
    }

    let stats = control.run()?;

    println!("Session finished.");
    println!("  Frames processed:   {}", stats.frames);
    println!("  Frames with a hand: {}", stats.frames_with_hand);
    println!("  Pointer moves:      {}", stats.moves);
    println!("  Clicks:             {}", stats.clicks);

    Ok(())
}

fn stream_header(frame: FrameSize, screen: ScreenSize, epoch_wall: &str) -> EventStreamHeader {
    EventStreamHeader {
        schema_version: "1.0".to_string(),
        epoch_wall: epoch_wall.to_string(),
        frame_width: frame.width,
        frame_height: frame.height,
        screen_width: screen.width,
        screen_height: screen.height,
    }
}

fn effective_config(args: &RunArgs) -> AirmouseConfig {
    let mut config = AirmouseConfig::load();
    if let Some(device) = &args.device {
        config.camera.device = device.clone();
    }
    if let Some(width) = args.width {
        config.camera.width = width;
    }
    if let Some(height) = args.height {
        config.camera.height = height;
    }
    if let Some(width) = args.screen_width {
        config.screen.width = width;
    }
    if let Some(height) = args.screen_height {
        config.screen.height = height;
    }
    if let Some(threshold) = args.click_threshold {
        config.gesture.click_threshold_px = threshold;
    }
    if let Some(confidence) = args.detection_confidence {
        config.detector.min_detection_confidence = confidence;
    }
    if let Some(confidence) = args.tracking_confidence {
        config.detector.min_tracking_confidence = confidence;
    }
    if let Some(helper) = &args.helper {
        config.detector.helper = Some(helper.clone());
    }
    if let Some(algorithm) = &args.smoothing {
        config.smoothing.algorithm = algorithm.clone();
    }
    if let Some(strength) = args.smoothing_strength {
        config.smoothing.strength = strength;
    }
    config
}

#[cfg(target_os = "linux")]
fn open_camera(config: &AirmouseConfig) -> anyhow::Result<Box<dyn FrameSource>> {
    let source = airmouse_capture::V4l2Source::new(&config.camera)
        .with_context(|| format!("failed to open camera {:?}", config.camera.device))?;
    Ok(Box::new(source))
}

#[cfg(not(target_os = "linux"))]
fn open_camera(_config: &AirmouseConfig) -> anyhow::Result<Box<dyn FrameSource>> {
    anyhow::bail!("webcam capture is only supported on Linux (V4L2)")
}

fn open_sink(name: &str, screen: ScreenSize) -> anyhow::Result<Box<dyn PointerSink>> {
    match name {
        "enigo" => Ok(Box::new(EnigoSink::new())),
        #[cfg(target_os = "linux")]
        "uinput" => {
            let sink = airmouse_pointer::UinputSink::new(screen)
                .context("failed to open /dev/uinput (try running as root or joining the input group)")?;
            Ok(Box::new(sink))
        }
        #[cfg(not(target_os = "linux"))]
        "uinput" => anyhow::bail!("the uinput backend is only supported on Linux"),
        other => anyhow::bail!("unknown pointer backend: {other} (expected enigo or uinput)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airmouse_capture::SyntheticSource;

    #[test]
    fn test_header_uses_negotiated_frame_size() {
        // The camera may deliver a different geometry than configured;
        // what the source reports is what the header must carry.
        let config = AirmouseConfig::default();
        let source = SyntheticSource::blank(FrameSize::new(1280, 720), 1);
        assert_ne!(source.frame_size().width, config.camera.width);

        let screen = ScreenSize::new(config.screen.width, config.screen.height);
        let header = stream_header(source.frame_size(), screen, "2026-01-01T00:00:00Z");

        assert_eq!(header.frame_width, 1280);
        assert_eq!(header.frame_height, 720);
        assert_eq!(header.screen_width, 1920);
    }
}
