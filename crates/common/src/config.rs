//! Application configuration.
//!
//! Every tunable the control loop reads lives here as a named field with a
//! documented default, instead of as an inline literal in the loop itself.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AirmouseConfig {
    /// Target screen geometry for pointer mapping.
    pub screen: ScreenConfig,

    /// Webcam settings.
    pub camera: CameraConfig,

    /// Hand detection collaborator settings.
    pub detector: DetectorConfig,

    /// Gesture classification settings.
    pub gesture: GestureConfig,

    /// Pointer smoothing settings.
    pub smoothing: SmoothingConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Target screen geometry in absolute pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Screen width in pixels.
    pub width: u32,

    /// Screen height in pixels.
    pub height: u32,
}

/// Webcam capture settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Device path (e.g. `/dev/video0`).
    pub device: PathBuf,

    /// Requested capture width in pixels.
    pub width: u32,

    /// Requested capture height in pixels.
    pub height: u32,

    /// Requested frame rate.
    pub fps: u32,
}

/// Configuration surface consumed by the detection collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Path to the detector helper executable or script.
    /// `None` uses the bundled `helpers/hand_landmarker.py`.
    pub helper: Option<PathBuf>,

    /// Maximum number of hands to detect per frame.
    pub max_hands: u32,

    /// Minimum confidence for initial detection.
    pub min_detection_confidence: f32,

    /// Minimum confidence for frame-to-frame tracking.
    pub min_tracking_confidence: f32,
}

/// Gesture classification thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Pinch distance below which a click fires, in source frame-pixel
    /// units. The comparison is strict (`< threshold`). Note this does
    /// not account for frame resolution or camera distance.
    pub click_threshold_px: f64,
}

/// Pointer smoothing settings.
///
/// Smoothing is off by default so the dispatched positions match the raw
/// per-frame mapping exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Algorithm name: "ema", "moving-average", or "none".
    pub algorithm: String,

    /// EMA strength in [0.0, 1.0]; larger means more smoothing.
    pub strength: f64,

    /// Moving-average window size in frames.
    pub window: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "airmouse=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: PathBuf::from("/dev/video0"),
            width: 640,
            height: 480,
            fps: 30,
        }
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            helper: None,
            max_hands: 1,
            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.7,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            click_threshold_px: 20.0,
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            algorithm: "none".to_string(),
            strength: 0.3,
            window: 3,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AirmouseConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("airmouse").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_detector_contract() {
        let config = AirmouseConfig::default();
        assert_eq!(config.detector.max_hands, 1);
        assert!((config.detector.min_detection_confidence - 0.7).abs() < 1e-6);
        assert!((config.detector.min_tracking_confidence - 0.7).abs() < 1e-6);
        assert!((config.gesture.click_threshold_px - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_defaults_smoothing_off() {
        let config = AirmouseConfig::default();
        assert_eq!(config.smoothing.algorithm, "none");
    }

    #[test]
    fn test_config_roundtrip() {
        let config = AirmouseConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AirmouseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.screen.width, config.screen.width);
        assert_eq!(parsed.camera.device, config.camera.device);
    }
}
