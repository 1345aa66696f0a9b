//! Streaming pointer smoothing.
//!
//! An optional stage between mapping and dispatch that operates on a
//! short history of mapped positions. Off (`None`) by default: with no
//! smoothing the dispatched position equals the raw per-frame mapping,
//! which is the contract the rest of the system is specified against.

use std::collections::VecDeque;

use airmouse_common::config::SmoothingConfig;
use airmouse_common::error::{AirmouseError, AirmouseResult};
use airmouse_hand_model::Point2D;

/// Available smoothing algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SmoothingAlgorithm {
    /// Exponential moving average.
    ///
    /// `strength` is in [0.0, 1.0], where larger values mean more
    /// smoothing (`alpha = 1 - strength`).
    Ema { strength: f64 },

    /// Moving average over a window of N samples.
    MovingAverage { window: usize },

    /// No smoothing — pass positions through unchanged.
    None,
}

impl SmoothingAlgorithm {
    /// Parse an algorithm from configuration.
    pub fn from_config(config: &SmoothingConfig) -> AirmouseResult<Self> {
        match config.algorithm.as_str() {
            "ema" => Ok(Self::Ema {
                strength: config.strength.clamp(0.0, 1.0),
            }),
            "moving-average" => {
                if config.window == 0 {
                    return Err(AirmouseError::config(
                        "smoothing window must be at least 1",
                    ));
                }
                Ok(Self::MovingAverage {
                    window: config.window,
                })
            }
            "none" => Ok(Self::None),
            other => Err(AirmouseError::config(format!(
                "unknown smoothing algorithm: {other}"
            ))),
        }
    }
}

/// Streaming smoother holding the short history the algorithm needs.
#[derive(Debug)]
pub struct PointerSmoother {
    algorithm: SmoothingAlgorithm,
    previous: Option<Point2D>,
    history: VecDeque<Point2D>,
}

impl PointerSmoother {
    pub fn new(algorithm: SmoothingAlgorithm) -> Self {
        Self {
            algorithm,
            previous: None,
            history: VecDeque::new(),
        }
    }

    /// Feed the next mapped position and get the smoothed one.
    pub fn apply(&mut self, point: Point2D) -> Point2D {
        match self.algorithm {
            SmoothingAlgorithm::None => point,
            SmoothingAlgorithm::Ema { strength } => {
                let alpha = (1.0 - strength).clamp(0.0, 1.0);
                let smoothed = match self.previous {
                    None => point,
                    Some(prev) => Point2D::new(
                        alpha * point.x + (1.0 - alpha) * prev.x,
                        alpha * point.y + (1.0 - alpha) * prev.y,
                    ),
                };
                self.previous = Some(smoothed);
                smoothed
            }
            SmoothingAlgorithm::MovingAverage { window } => {
                self.history.push_back(point);
                while self.history.len() > window {
                    self.history.pop_front();
                }
                let count = self.history.len() as f64;
                let sum_x: f64 = self.history.iter().map(|p| p.x).sum();
                let sum_y: f64 = self.history.iter().map(|p| p.y).sum();
                Point2D::new(sum_x / count, sum_y / count)
            }
        }
    }

    /// Forget accumulated history.
    ///
    /// Called when the hand disappears so smoothing does not bridge the
    /// gap between two unrelated hand positions.
    pub fn reset(&mut self) {
        self.previous = None;
        self.history.clear();
    }
}
