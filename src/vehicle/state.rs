//! Vehicle state and per-step action types.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;

/// Instantaneous vehicle state.
///
/// Owned by the parking environment and mutated only by the bicycle
/// model's integration step. Reset to the spawn pose at episode start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Car center position in the world frame, meters.
    pub pos: Point2D,
    /// Heading in radians, wrapped to `(-π, π]`.
    pub psi: f32,
    /// Signed speed along the heading, m/s.
    pub velocity: f32,
    /// Last applied (clamped) steering angle in radians. Reported for
    /// downstream wheel placement, not used by the integration itself.
    pub delta: f32,
}

/// Driver or agent input for one step.
///
/// Transient: consumed by [`BicycleModel::integrate`] and never stored.
/// Values beyond the model limits are clamped, not rejected.
///
/// [`BicycleModel::integrate`]: crate::vehicle::BicycleModel::integrate
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Longitudinal acceleration, m/s².
    pub acceleration: f32,
    /// Front wheel steering angle, radians, CCW positive.
    pub steering_angle: f32,
}

impl Action {
    /// Create a new action.
    #[inline]
    pub fn new(acceleration: f32, steering_angle: f32) -> Self {
        Self {
            acceleration,
            steering_angle,
        }
    }
}
