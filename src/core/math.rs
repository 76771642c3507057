//! Angle and interpolation utilities.
//!
//! All angles are in radians. Coordinate frame follows ROS REP-103:
//! - X-forward, Y-left, Z-up
//! - Counter-clockwise positive rotation

use std::f32::consts::PI;

/// Two times PI (full circle in radians).
pub const TWO_PI: f32 = 2.0 * PI;

/// Wrap an angle into `(-π, π]` by repeated ±2π shifts.
///
/// Idempotent: `wrap_to_pi(wrap_to_pi(a)) == wrap_to_pi(a)`.
///
/// # Example
/// ```
/// use virama_sim::core::math::wrap_to_pi;
/// use std::f32::consts::PI;
///
/// assert!((wrap_to_pi(3.0 * PI) - PI).abs() < 1e-5);
/// assert!((wrap_to_pi(-PI) - PI).abs() < 1e-6);
/// assert!((wrap_to_pi(PI / 2.0) - PI / 2.0).abs() < 1e-6);
/// ```
#[inline]
pub fn wrap_to_pi(angle: f32) -> f32 {
    let mut a = angle;
    while a <= -PI {
        a += TWO_PI;
    }
    while a > PI {
        a -= TWO_PI;
    }
    a
}

/// Compute the signed angular difference between two angles.
///
/// Returns the shortest angular distance from `from` to `to`,
/// in the range `(-π, π]`. Positive means counter-clockwise.
///
/// # Example
/// ```
/// use virama_sim::core::math::angle_diff;
/// use std::f32::consts::PI;
///
/// let diff = angle_diff(0.0, PI / 2.0);
/// assert!((diff - PI / 2.0).abs() < 1e-6);
///
/// // Crossing the -π/π boundary takes the short way
/// let diff = angle_diff(-0.9 * PI, 0.9 * PI);
/// assert!((diff - (-0.2 * PI)).abs() < 1e-5);
/// ```
#[inline]
pub fn angle_diff(from: f32, to: f32) -> f32 {
    wrap_to_pi(to - from)
}

/// Shortest-path interpolation between two headings.
///
/// Walks the wrapped delta `wrap_to_pi(b - a)` scaled by `t`, so
/// interpolating from 179° to -179° moves through 180°, not through 0°.
#[inline]
pub fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
    wrap_to_pi(a + angle_diff(a, b) * t)
}

/// Linear interpolation between two values. `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180.0 / PI
}
