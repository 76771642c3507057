//! Parking slot configuration section.

use serde::{Deserialize, Serialize};

use crate::core::math::deg_to_rad;
use crate::env::ParkingConfig;

use super::defaults;

/// Slot geometry, spawn ranges, and success tolerances.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParkingSection {
    /// Slot length in meters.
    #[serde(default = "defaults::slot_length")]
    pub slot_length: f32,

    /// Slot width in meters.
    #[serde(default = "defaults::slot_width")]
    pub slot_width: f32,

    /// Soft-center tolerance along the slot axis, meters.
    #[serde(default = "defaults::longitudinal_tolerance")]
    pub longitudinal_tolerance: f32,

    /// Soft-center tolerance across the slot, meters.
    #[serde(default = "defaults::lateral_tolerance")]
    pub lateral_tolerance: f32,

    /// Soft-center heading tolerance in degrees (computed, not enforced).
    #[serde(default = "defaults::yaw_tolerance_deg")]
    pub yaw_tolerance_deg: f32,

    /// Slot center spawn range along world x.
    #[serde(default = "defaults::slot_x_range")]
    pub slot_x_range: (f32, f32),

    /// Slot center spawn range along world y.
    #[serde(default = "defaults::slot_y_range")]
    pub slot_y_range: (f32, f32),

    /// Car spawn offset bound around the slot center, per axis.
    #[serde(default = "defaults::spawn_offset")]
    pub spawn_offset: f32,
}

impl Default for ParkingSection {
    fn default() -> Self {
        Self {
            slot_length: defaults::slot_length(),
            slot_width: defaults::slot_width(),
            longitudinal_tolerance: defaults::longitudinal_tolerance(),
            lateral_tolerance: defaults::lateral_tolerance(),
            yaw_tolerance_deg: defaults::yaw_tolerance_deg(),
            slot_x_range: defaults::slot_x_range(),
            slot_y_range: defaults::slot_y_range(),
            spawn_offset: defaults::spawn_offset(),
        }
    }
}

impl ParkingSection {
    /// Convert to the environment's [`ParkingConfig`] (degrees → radians).
    pub fn to_env_config(&self) -> ParkingConfig {
        ParkingConfig {
            slot_length: self.slot_length,
            slot_width: self.slot_width,
            longitudinal_tolerance: self.longitudinal_tolerance,
            lateral_tolerance: self.lateral_tolerance,
            yaw_tolerance: deg_to_rad(self.yaw_tolerance_deg),
            slot_x_range: self.slot_x_range,
            slot_y_range: self.slot_y_range,
            spawn_offset: self.spawn_offset,
        }
    }
}
