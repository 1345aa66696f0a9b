//! Frame and screen geometry types.
//!
//! Two pixel coordinate systems exist: frame space (the captured image)
//! and screen space (the target display). Both use `Point2D`; the value
//! only makes sense together with the size it was measured against.

use serde::{Deserialize, Serialize};

/// A 2D point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Linear interpolation between two points.
    pub fn lerp(a: &Point2D, b: &Point2D, t: f64) -> Point2D {
        let t = t.clamp(0.0, 1.0);
        Point2D {
            x: a.x + (b.x - a.x) * t,
            y: a.y + (b.y - a.y) * t,
        }
    }
}

/// Captured frame dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Target display dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point2d_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_point2d_lerp() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(1.0, 2.0);
        let mid = Point2D::lerp(&a, &b, 0.5);
        assert!((mid.x - 0.5).abs() < 1e-9);
        assert!((mid.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_lerp_clamps_t() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(1.0, 1.0);
        assert_eq!(Point2D::lerp(&a, &b, 2.0), b);
        assert_eq!(Point2D::lerp(&a, &b, -1.0), a);
    }
}
