//! Core geometry types used throughout the crate:
//! - [`Point2D`]: world-frame point / vector
//! - [`Pose2D`]: positioned, oriented frame (car frame, slot frame)
//! - [`math`]: angle wrapping and interpolation helpers

pub mod math;

mod point;
mod pose;

pub use math::{angle_diff, lerp, lerp_angle, wrap_to_pi};
pub use point::Point2D;
pub use pose::Pose2D;
