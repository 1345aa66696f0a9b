//! Pinch gesture classification.
//!
//! The gesture state is never materialized: each frame the Euclidean
//! pixel distance between the index fingertip and thumb tip is compared
//! against a fixed threshold, with no hysteresis, debounce, or history.
//! A sustained pinch produces one click per frame for as long as the
//! distance stays below threshold.

use airmouse_hand_model::Point2D;

/// Euclidean distance between the two tracked points, in source
/// frame-pixel units.
pub fn pinch_distance(index_tip: Point2D, thumb_tip: Point2D) -> f64 {
    index_tip.distance_to(&thumb_tip)
}

/// Fixed-threshold click classifier.
///
/// The threshold is measured in frame-pixel units, so it does not account
/// for frame resolution or camera distance.
#[derive(Debug, Clone, Copy)]
pub struct PinchClassifier {
    threshold_px: f64,
}

impl PinchClassifier {
    pub fn new(threshold_px: f64) -> Self {
        Self { threshold_px }
    }

    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    /// Whether this frame's pinch distance triggers a click.
    ///
    /// The boundary is exclusive: exactly the threshold does not click.
    pub fn is_click(&self, distance_px: f64) -> bool {
        distance_px < self.threshold_px
    }

    /// Classify directly from the two tracked points.
    pub fn classify(&self, index_tip: Point2D, thumb_tip: Point2D) -> bool {
        self.is_click(pinch_distance(index_tip, thumb_tip))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinch_distance_is_euclidean() {
        let d = pinch_distance(Point2D::new(0.0, 0.0), Point2D::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_click_boundary_is_exclusive() {
        let classifier = PinchClassifier::new(20.0);
        assert!(classifier.is_click(19.999));
        assert!(!classifier.is_click(20.0));
        assert!(!classifier.is_click(20.001));
    }

    #[test]
    fn test_zero_distance_clicks() {
        let classifier = PinchClassifier::new(20.0);
        assert!(classifier.is_click(0.0));
    }

    #[test]
    fn test_classify_from_points() {
        let classifier = PinchClassifier::new(20.0);
        assert!(classifier.classify(Point2D::new(100.0, 100.0), Point2D::new(110.0, 100.0)));
        assert!(!classifier.classify(Point2D::new(100.0, 100.0), Point2D::new(120.0, 100.0)));
        assert!(!classifier.classify(Point2D::new(100.0, 100.0), Point2D::new(150.0, 100.0)));
    }
}
