//! End-to-end control loop behavior against stub collaborators.

use airmouse_capture::SyntheticSource;
use airmouse_engine::{ControlLoop, EngineConfig};
use airmouse_hand_model::event::parse_events;
use airmouse_hand_model::{EventStreamHeader, FrameSize, HandLandmarks, ScreenSize};
use airmouse_hand_tracker::ScriptedDetector;
use airmouse_pointer::{EventLogger, RecordingSink};
use airmouse_preview::HeadlessPreview;
use airmouse_processing::SmoothingAlgorithm;

const FRAME: FrameSize = FrameSize {
    width: 640,
    height: 480,
};

fn config() -> EngineConfig {
    EngineConfig {
        screen: ScreenSize {
            width: 1920,
            height: 1080,
        },
        click_threshold_px: 20.0,
        smoothing: SmoothingAlgorithm::None,
    }
}

fn build_loop(
    frames: usize,
    script: Vec<Vec<HandLandmarks>>,
    sink: RecordingSink,
) -> ControlLoop {
    ControlLoop::new(
        config(),
        Box::new(SyntheticSource::blank(FRAME, frames)),
        Box::new(ScriptedDetector::new(script)),
        Box::new(sink),
        Box::new(HeadlessPreview::exit_after(frames)),
    )
}

#[test]
fn test_no_hand_dispatches_nothing() {
    let sink = RecordingSink::new();
    let mut control = build_loop(5, Vec::new(), sink.clone());

    let stats = control.run().unwrap();

    assert_eq!(stats.frames, 5);
    assert_eq!(stats.frames_with_hand, 0);
    assert!(sink.events().is_empty());
}

#[test]
fn test_frame_center_maps_to_screen_center() {
    // Index tip at the frame center, thumb far away so no click fires.
    let script = vec![ScriptedDetector::hand_with_tips((0.5, 0.5), (0.0, 0.0))];
    let sink = RecordingSink::new();
    let mut control = build_loop(1, script, sink.clone());

    let stats = control.run().unwrap();

    assert_eq!(stats.moves, 1);
    assert_eq!(stats.clicks, 0);
    assert_eq!(sink.moves(), vec![(960.0, 540.0)]);
}

#[test]
fn test_sustained_pinch_clicks_every_frame() {
    // Tips one pixel apart in frame space, well under the threshold.
    let pinch = || ScriptedDetector::hand_with_tips((0.5, 0.5), (0.5, 0.5 + 1.0 / 480.0));
    let script = vec![pinch(), pinch(), pinch()];
    let sink = RecordingSink::new();
    let mut control = build_loop(3, script, sink.clone());

    let stats = control.run().unwrap();

    assert_eq!(stats.frames, 3);
    assert_eq!(stats.clicks, 3);
    assert_eq!(sink.click_count(), 3);
}

#[test]
fn test_tips_just_apart_do_not_click() {
    // 3/64 of the frame height is 22.5 px, above the 20 px threshold.
    let script = vec![ScriptedDetector::hand_with_tips(
        (0.5, 0.5),
        (0.5, 0.5 + 0.046875),
    )];
    let sink = RecordingSink::new();
    let mut control = build_loop(1, script, sink.clone());

    let stats = control.run().unwrap();

    assert_eq!(stats.moves, 1);
    assert_eq!(stats.clicks, 0);
}

#[test]
fn test_hand_reappearing_after_gap_still_tracks() {
    let script = vec![
        ScriptedDetector::hand_with_tips((0.25, 0.25), (0.0, 0.0)),
        Vec::new(),
        ScriptedDetector::hand_with_tips((0.75, 0.75), (0.0, 0.0)),
    ];
    let sink = RecordingSink::new();
    let mut control = build_loop(3, script, sink.clone());

    let stats = control.run().unwrap();

    assert_eq!(stats.frames, 3);
    assert_eq!(stats.frames_with_hand, 2);
    assert_eq!(sink.moves(), vec![(480.0, 270.0), (1440.0, 810.0)]);
}

#[test]
fn test_capture_failure_is_fatal() {
    // Preview never requests exit, so the loop only stops when the source
    // runs dry and reports a read failure.
    let mut control = ControlLoop::new(
        config(),
        Box::new(SyntheticSource::blank(FRAME, 2)),
        Box::new(ScriptedDetector::empty()),
        Box::new(RecordingSink::new()),
        Box::new(HeadlessPreview::new()),
    );

    let err = control.run().unwrap_err();
    assert!(err.is_fatal_capture());
    assert_eq!(control.stats().frames, 2);
}

#[test]
fn test_events_are_logged_as_jsonl() {
    let dir = std::env::temp_dir().join("airmouse_test_engine_log");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("events.jsonl");

    let script = vec![
        ScriptedDetector::hand_with_tips((0.5, 0.5), (0.5, 0.5)),
        Vec::new(),
    ];
    let sink = RecordingSink::new();
    let header = EventStreamHeader {
        schema_version: "1.0".to_string(),
        epoch_wall: "2026-01-01T00:00:00Z".to_string(),
        frame_width: FRAME.width,
        frame_height: FRAME.height,
        screen_width: 1920,
        screen_height: 1080,
    };
    let logger = EventLogger::new(path.clone(), header).unwrap();
    let mut control = build_loop(2, script, sink).with_logger(logger);

    control.run().unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with('#'));

    let events = parse_events(&contents).unwrap();
    // One move and one click from the pinch frame, nothing from the
    // empty frame.
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].position(), (960.0, 540.0));
    assert!(events[1].is_click());

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_ema_smoothing_pulls_toward_previous_position() {
    let script = vec![
        ScriptedDetector::hand_with_tips((0.0, 0.0), (0.9, 0.9)),
        ScriptedDetector::hand_with_tips((1.0, 1.0), (0.0, 0.0)),
    ];
    let sink = RecordingSink::new();
    let mut control = ControlLoop::new(
        EngineConfig {
            smoothing: SmoothingAlgorithm::Ema { strength: 0.5 },
            ..config()
        },
        Box::new(SyntheticSource::blank(FRAME, 2)),
        Box::new(ScriptedDetector::new(script)),
        Box::new(sink.clone()),
        Box::new(HeadlessPreview::exit_after(2)),
    );

    control.run().unwrap();

    let moves = sink.moves();
    assert_eq!(moves[0], (0.0, 0.0));
    // Halfway between the previous output and the new raw mapping.
    assert_eq!(moves[1], (960.0, 540.0));
}
