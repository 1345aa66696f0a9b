//! The per-frame control loop.

use airmouse_capture::FrameSource;
use airmouse_common::clock::RunClock;
use airmouse_common::error::AirmouseResult;
use airmouse_hand_model::{FrameSize, HandLandmarks, MouseButton, PointerEvent, ScreenSize};
use airmouse_hand_tracker::HandDetector;
use airmouse_pointer::{EventLogger, PointerSink};
use airmouse_preview::{Overlay, PreviewSink};
use airmouse_processing::{map_to_screen, pinch_distance, PinchClassifier, PointerSmoother, SmoothingAlgorithm};

/// Parameters the loop reads every iteration.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Target screen geometry for the fingertip mapping.
    pub screen: ScreenSize,

    /// Pinch distance below which a click fires (frame-pixel units,
    /// strict comparison).
    pub click_threshold_px: f64,

    /// Pointer smoothing stage; `None` dispatches the raw mapping.
    pub smoothing: SmoothingAlgorithm,
}

/// Counters accumulated over one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopStats {
    /// Frames acquired and processed.
    pub frames: u64,

    /// Frames in which at least one hand was detected.
    pub frames_with_hand: u64,

    /// Pointer-move events dispatched.
    pub moves: u64,

    /// Click events dispatched.
    pub clicks: u64,
}

/// The capture-and-map loop, wired through the collaborator traits so
/// tests can substitute synthetic frames, scripted landmarks, a recording
/// pointer sink, and a headless preview.
pub struct ControlLoop {
    source: Box<dyn FrameSource>,
    detector: Box<dyn HandDetector>,
    sink: Box<dyn PointerSink>,
    preview: Box<dyn PreviewSink>,
    logger: Option<EventLogger>,
    clock: RunClock,
    classifier: PinchClassifier,
    smoother: PointerSmoother,
    screen: ScreenSize,
    stats: LoopStats,
}

impl ControlLoop {
    pub fn new(
        config: EngineConfig,
        source: Box<dyn FrameSource>,
        detector: Box<dyn HandDetector>,
        sink: Box<dyn PointerSink>,
        preview: Box<dyn PreviewSink>,
    ) -> Self {
        Self {
            source,
            detector,
            sink,
            preview,
            logger: None,
            clock: RunClock::start(),
            classifier: PinchClassifier::new(config.click_threshold_px),
            smoother: PointerSmoother::new(config.smoothing),
            screen: config.screen,
            stats: LoopStats::default(),
        }
    }

    /// Mirror every dispatched event to a JSONL log.
    pub fn with_logger(mut self, logger: EventLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Wall-clock time this run started.
    pub fn epoch_wall(&self) -> &str {
        self.clock.epoch_wall()
    }

    /// Run until the exit key is pressed or capture fails.
    ///
    /// A frame read failure is fatal and surfaces as the returned error;
    /// resources are still released because every collaborator cleans up
    /// on drop. "No hand detected" is a normal iteration, not an error.
    pub fn run(&mut self) -> AirmouseResult<LoopStats> {
        tracing::info!(
            source = %self.source.name(),
            detector = %self.detector.name(),
            sink = %self.sink.name(),
            preview = %self.preview.name(),
            screen_width = self.screen.width,
            screen_height = self.screen.height,
            "Control loop started"
        );

        loop {
            let mut frame = match self.source.next_frame() {
                Ok(frame) => frame,
                Err(e) => {
                    tracing::error!(error = %e, "Frame capture failed, stopping");
                    self.flush_logger();
                    return Err(e);
                }
            };

            // Mirror so on-screen motion matches the user's own motion.
            frame.mirror_horizontal();

            let hands = self.detector.detect(&frame)?;
            let overlay = match hands.first() {
                Some(hand) => self.dispatch(hand, frame.size())?,
                None => {
                    // No hand this frame: nothing moves, nothing clicks.
                    self.smoother.reset();
                    Overlay::none()
                }
            };

            self.preview.present(&frame, &overlay)?;
            self.stats.frames += 1;

            if self.preview.exit_requested() {
                tracing::info!("Exit requested");
                break;
            }
        }

        self.flush_logger();
        tracing::info!(
            frames = self.stats.frames,
            frames_with_hand = self.stats.frames_with_hand,
            moves = self.stats.moves,
            clicks = self.stats.clicks,
            "Control loop stopped"
        );
        Ok(self.stats)
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// Map, move, and classify for one detected hand. Returns the overlay
    /// markers for the preview.
    fn dispatch(&mut self, hand: &HandLandmarks, frame_size: FrameSize) -> AirmouseResult<Overlay> {
        let index_px = hand.index_finger_tip_pixels(frame_size);
        let thumb_px = hand.thumb_tip_pixels(frame_size);

        let mapped = map_to_screen(index_px, frame_size, self.screen);
        let target = self.smoother.apply(mapped);

        self.sink.move_to(target.x, target.y)?;
        self.stats.moves += 1;
        self.log(PointerEvent::moved(
            self.clock.elapsed_ns(),
            target.x,
            target.y,
        ));

        let distance = pinch_distance(index_px, thumb_px);
        if self.classifier.is_click(distance) {
            // One click per qualifying frame: a sustained pinch keeps
            // clicking until the fingers separate.
            self.sink.click(MouseButton::Left)?;
            self.stats.clicks += 1;
            self.log(PointerEvent::click(
                self.clock.elapsed_ns(),
                MouseButton::Left,
                target.x,
                target.y,
            ));
            tracing::debug!(distance_px = distance, "Pinch click dispatched");
        }

        self.stats.frames_with_hand += 1;
        Ok(Overlay::tips(index_px, thumb_px))
    }

    fn log(&mut self, event: PointerEvent) {
        if let Some(logger) = self.logger.as_mut() {
            if let Err(e) = logger.write_event(&event) {
                tracing::warn!(error = %e, "Event log write failed, disabling log");
                self.logger = None;
            }
        }
    }

    fn flush_logger(&mut self) {
        if let Some(logger) = self.logger.as_mut() {
            let _ = logger.flush();
        }
    }
}
