//! MediaPipe hand landmarker via helper subprocess.
//!
//! The helper (`helpers/hand_landmarker.py`) owns the model and speaks a
//! small wire protocol over its stdio:
//!
//! - helper → us: a single `READY` line once the model is loaded
//! - us → helper: 12-byte header (width, height, channels as LE u32)
//!   followed by raw interleaved RGB bytes
//! - helper → us: one JSON line per frame:
//!   `{"hands":[{"handedness":"Right","score":0.93,"landmarks":[{"x":..,"y":..,"z":..},..]}]}`
//!
//! Detection and tracking confidence thresholds are passed to the helper
//! as command-line flags; the score filter is also applied on this side
//! so a misconfigured helper cannot leak low-confidence hands through.

use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdout, Command, Stdio};

use serde::Deserialize;

use airmouse_capture::Frame;
use airmouse_common::config::DetectorConfig;
use airmouse_common::error::{AirmouseError, AirmouseResult};
use airmouse_hand_model::landmark::LANDMARK_COUNT;
use airmouse_hand_model::{HandLandmarks, Handedness, Landmark};

use crate::HandDetector;

const DEFAULT_HELPER: &str = "helpers/hand_landmarker.py";

/// Wire format for one landmark.
#[derive(Deserialize, Debug)]
struct LandmarkWire {
    x: f32,
    y: f32,
    #[serde(default)]
    z: f32,
}

/// Wire format for one detected hand.
#[derive(Deserialize, Debug)]
struct HandWire {
    #[serde(default)]
    handedness: Option<String>,
    score: f32,
    landmarks: Vec<LandmarkWire>,
}

/// Wire format for one frame's detection result.
#[derive(Deserialize, Debug)]
struct DetectionWire {
    hands: Vec<HandWire>,
    #[serde(default)]
    error: Option<String>,
}

/// Hand detector backed by a MediaPipe helper subprocess.
pub struct SubprocessDetector {
    process: Child,
    stdout_reader: BufReader<ChildStdout>,
    min_detection_confidence: f32,
}

impl SubprocessDetector {
    /// Spawn the helper and wait for its ready signal.
    pub fn new(config: &DetectorConfig) -> AirmouseResult<Self> {
        let helper = config
            .helper
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HELPER));

        if !helper.exists() {
            return Err(AirmouseError::FileNotFound { path: helper });
        }

        tracing::info!(helper = %helper.display(), "Starting hand landmarker subprocess");

        let mut process = Command::new("python3")
            .arg(&helper)
            .arg("--max-hands")
            .arg(config.max_hands.to_string())
            .arg("--min-detection-confidence")
            .arg(config.min_detection_confidence.to_string())
            .arg("--min-tracking-confidence")
            .arg(config.min_tracking_confidence.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                AirmouseError::detection(format!("failed to spawn landmarker helper: {e}"))
            })?;

        let stdout = process
            .stdout
            .take()
            .ok_or_else(|| AirmouseError::detection("helper stdout unavailable"))?;
        let mut stdout_reader = BufReader::new(stdout);

        let mut ready_line = String::new();
        stdout_reader
            .read_line(&mut ready_line)
            .map_err(|e| AirmouseError::detection(format!("helper handshake read failed: {e}")))?;
        if ready_line.trim() != "READY" {
            return Err(AirmouseError::detection(format!(
                "helper did not signal ready, got: {}",
                ready_line.trim()
            )));
        }

        tracing::info!("Hand landmarker ready");

        Ok(Self {
            process,
            stdout_reader,
            min_detection_confidence: config.min_detection_confidence,
        })
    }

    fn send_frame(&mut self, frame: &Frame) -> AirmouseResult<()> {
        let stdin = self
            .process
            .stdin
            .as_mut()
            .ok_or_else(|| AirmouseError::detection("helper stdin unavailable"))?;

        stdin
            .write_all(&frame.width().to_le_bytes())
            .and_then(|_| stdin.write_all(&frame.height().to_le_bytes()))
            .and_then(|_| stdin.write_all(&3u32.to_le_bytes()))
            .and_then(|_| stdin.write_all(frame.data()))
            .and_then(|_| stdin.flush())
            .map_err(|e| AirmouseError::detection(format!("failed to send frame to helper: {e}")))
    }

    fn read_result(&mut self) -> AirmouseResult<DetectionWire> {
        let mut response = String::new();
        self.stdout_reader
            .read_line(&mut response)
            .map_err(|e| AirmouseError::detection(format!("failed to read helper result: {e}")))?;
        if response.is_empty() {
            return Err(AirmouseError::detection("helper closed its stdout"));
        }

        serde_json::from_str(&response).map_err(|e| {
            AirmouseError::detection(format!("malformed helper result: {e}: {response}"))
        })
    }

    fn convert(&self, wire: DetectionWire) -> Vec<HandLandmarks> {
        if let Some(error) = wire.error {
            // Helper-side per-frame problems are treated as "no hand
            // visible", matching the collaborator's failure contract.
            tracing::warn!(error = %error, "Landmarker helper reported a frame error");
            return Vec::new();
        }

        let mut hands = Vec::with_capacity(wire.hands.len());
        for hand in wire.hands {
            if hand.score < self.min_detection_confidence {
                continue;
            }
            if hand.landmarks.len() != LANDMARK_COUNT {
                tracing::warn!(
                    got = hand.landmarks.len(),
                    "Helper returned wrong landmark count, skipping hand"
                );
                continue;
            }

            let landmarks: Vec<Landmark> = hand
                .landmarks
                .iter()
                .map(|lm| Landmark {
                    x: lm.x,
                    y: lm.y,
                    z: lm.z,
                })
                .collect();

            let handedness = match hand.handedness.as_deref() {
                Some("Left") => Handedness::Left,
                Some("Right") => Handedness::Right,
                _ => Handedness::Unknown,
            };

            if let Some(hand) = HandLandmarks::from_slice(&landmarks, hand.score, handedness) {
                hands.push(hand);
            }
        }
        hands
    }
}

impl HandDetector for SubprocessDetector {
    fn detect(&mut self, frame: &Frame) -> AirmouseResult<Vec<HandLandmarks>> {
        self.send_frame(frame)?;
        let wire = self.read_result()?;
        Ok(self.convert(wire))
    }

    fn name(&self) -> &str {
        "mediapipe-subprocess"
    }
}

impl Drop for SubprocessDetector {
    fn drop(&mut self) {
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector_for_convert(min_confidence: f32) -> SubprocessDetector {
        // Only `convert` is exercised; build the struct around a dummy
        // child process that exits immediately.
        let mut process = Command::new("true")
            .stdout(Stdio::piped())
            .spawn()
            .unwrap();
        let stdout = process.stdout.take().unwrap();
        SubprocessDetector {
            process,
            stdout_reader: BufReader::new(stdout),
            min_detection_confidence: min_confidence,
        }
    }

    fn wire_hand(score: f32, count: usize) -> HandWire {
        HandWire {
            handedness: Some("Right".to_string()),
            score,
            landmarks: (0..count)
                .map(|i| LandmarkWire {
                    x: i as f32 / 21.0,
                    y: 0.5,
                    z: 0.0,
                })
                .collect(),
        }
    }

    #[test]
    fn test_convert_filters_low_confidence() {
        let detector = detector_for_convert(0.7);
        let wire = DetectionWire {
            hands: vec![wire_hand(0.5, 21), wire_hand(0.9, 21)],
            error: None,
        };
        let hands = detector.convert(wire);
        assert_eq!(hands.len(), 1);
        assert!((hands[0].confidence - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_convert_skips_malformed_hands() {
        let detector = detector_for_convert(0.0);
        let wire = DetectionWire {
            hands: vec![wire_hand(0.9, 20)],
            error: None,
        };
        assert!(detector.convert(wire).is_empty());
    }

    #[test]
    fn test_helper_error_means_no_hands() {
        let detector = detector_for_convert(0.0);
        let wire = DetectionWire {
            hands: vec![wire_hand(0.9, 21)],
            error: Some("model hiccup".to_string()),
        };
        assert!(detector.convert(wire).is_empty());
    }

    #[test]
    fn test_wire_parsing() {
        let raw = r#"{"hands":[{"handedness":"Left","score":0.8,"landmarks":[{"x":0.1,"y":0.2,"z":0.0}]}]}"#;
        let wire: DetectionWire = serde_json::from_str(raw).unwrap();
        assert_eq!(wire.hands.len(), 1);
        assert_eq!(wire.hands[0].handedness.as_deref(), Some("Left"));
    }
}
