//! Vehicle configuration section.

use serde::{Deserialize, Serialize};

use crate::vehicle::{BicycleLimits, VehicleParams, WheelSize};

use super::defaults;

/// Vehicle geometry and model-limit settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VehicleSection {
    /// Car body length in meters.
    #[serde(default = "defaults::car_length")]
    pub car_length: f32,

    /// Car body width in meters.
    #[serde(default = "defaults::car_width")]
    pub car_width: f32,

    /// Wheel length along the car's forward axis.
    #[serde(default = "defaults::wheel_length")]
    pub wheel_length: f32,

    /// Wheel width across the car.
    #[serde(default = "defaults::wheel_width")]
    pub wheel_width: f32,

    /// Wheel inset from the front edge.
    #[serde(default = "defaults::front_margin")]
    pub front_margin: f32,

    /// Wheel inset from the rear edge.
    #[serde(default = "defaults::rear_margin")]
    pub rear_margin: f32,

    /// Wheel inset from the body sides.
    #[serde(default = "defaults::side_margin")]
    pub side_margin: f32,

    /// Maximum steering angle, radians.
    #[serde(default = "defaults::max_steering_angle")]
    pub max_steering_angle: f32,

    /// Maximum steering rate, rad/s (declared, not yet enforced).
    #[serde(default = "defaults::max_steering_rate")]
    pub max_steering_rate: f32,

    /// Maximum acceleration magnitude, m/s².
    #[serde(default = "defaults::max_acceleration")]
    pub max_acceleration: f32,

    /// Maximum speed magnitude, m/s.
    #[serde(default = "defaults::max_speed")]
    pub max_speed: f32,
}

impl Default for VehicleSection {
    fn default() -> Self {
        Self {
            car_length: defaults::car_length(),
            car_width: defaults::car_width(),
            wheel_length: defaults::wheel_length(),
            wheel_width: defaults::wheel_width(),
            front_margin: defaults::front_margin(),
            rear_margin: defaults::rear_margin(),
            side_margin: defaults::side_margin(),
            max_steering_angle: defaults::max_steering_angle(),
            max_steering_rate: defaults::max_steering_rate(),
            max_acceleration: defaults::max_acceleration(),
            max_speed: defaults::max_speed(),
        }
    }
}

impl VehicleSection {
    /// Convert to finalized [`VehicleParams`].
    ///
    /// # Panics
    ///
    /// Panics if the configured wheel does not fit the car body (see
    /// [`VehicleParams::finalize`]).
    pub fn to_params(&self) -> VehicleParams {
        let mut params = VehicleParams {
            car_length: self.car_length,
            car_width: self.car_width,
            wheel: WheelSize {
                length: self.wheel_length,
                width: self.wheel_width,
            },
            front_margin: self.front_margin,
            rear_margin: self.rear_margin,
            side_margin: self.side_margin,
            ..VehicleParams::default()
        };
        params.finalize();
        params
    }

    /// Convert to [`BicycleLimits`].
    pub fn to_limits(&self) -> BicycleLimits {
        BicycleLimits {
            delta_max: self.max_steering_angle,
            delta_rate_max: self.max_steering_rate,
            a_max: self.max_acceleration,
            v_max: self.max_speed,
        }
    }
}
