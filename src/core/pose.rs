//! 2D pose type for positioned, oriented frames.
//!
//! A pose names a local coordinate frame: the car frame and the parking
//! slot frame are both `Pose2D` values, and every world↔local conversion
//! in the crate goes through this one implementation.

use serde::{Deserialize, Serialize};

use super::math::{angle_diff, lerp, wrap_to_pi};
use super::point::Point2D;

/// A 2D pose: position plus orientation.
///
/// - Position `(x, y)` in meters, world frame
/// - `theta` in radians, counter-clockwise from the world X-axis,
///   wrapped to `(-π, π]`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in meters.
    pub x: f32,
    /// Y position in meters.
    pub y: f32,
    /// Heading angle in radians, wrapped to `(-π, π]`.
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose. `theta` is wrapped to `(-π, π]`.
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self {
            x,
            y,
            theta: wrap_to_pi(theta),
        }
    }

    /// Identity pose (origin, facing along world X).
    #[inline]
    pub const fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        }
    }

    /// Create a pose from a position and heading.
    #[inline]
    pub fn from_position_angle(position: Point2D, theta: f32) -> Self {
        Self::new(position.x, position.y, theta)
    }

    /// Get the position as a `Point2D`.
    #[inline]
    pub fn position(self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Transform a point from this pose's local frame into the world frame.
    ///
    /// Rotates by `theta`, then translates by the pose position.
    #[inline]
    pub fn transform_point(self, point: Point2D) -> Point2D {
        let (sin, cos) = self.theta.sin_cos();
        Point2D {
            x: self.x + point.x * cos - point.y * sin,
            y: self.y + point.x * sin + point.y * cos,
        }
    }

    /// Transform a point from the world frame into this pose's local frame.
    ///
    /// Translates by `-position`, then rotates by `-theta`.
    #[inline]
    pub fn inverse_transform_point(self, point: Point2D) -> Point2D {
        let (sin, cos) = self.theta.sin_cos();
        let dx = point.x - self.x;
        let dy = point.y - self.y;
        Point2D {
            x: dx * cos + dy * sin,
            y: -dx * sin + dy * cos,
        }
    }

    /// Interpolate between two poses.
    ///
    /// Position interpolates linearly; heading takes the shortest angular
    /// path, so blending across the ±π boundary stays continuous.
    #[inline]
    pub fn lerp(self, other: Pose2D, t: f32) -> Self {
        Self::new(
            lerp(self.x, other.x, t),
            lerp(self.y, other.y, t),
            self.theta + angle_diff(self.theta, other.theta) * t,
        )
    }
}
