//! Static vehicle geometry.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;

/// Wheel footprint dimensions in meters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WheelSize {
    /// Wheel length along the car's forward axis.
    pub length: f32,
    /// Wheel width across the car.
    pub width: f32,
}

impl Default for WheelSize {
    fn default() -> Self {
        Self {
            length: 0.75,
            width: 0.35,
        }
    }
}

/// Static vehicle geometry: body size, wheel size, and the wheel
/// placement derived from them.
///
/// Call [`finalize`](Self::finalize) once after construction to derive
/// `lf`, `lr` and `track`; the struct is read-only afterwards.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct VehicleParams {
    /// Car body length in meters (car local x, forward).
    pub car_length: f32,
    /// Car body width in meters (car local y, left).
    pub car_width: f32,
    /// Wheel footprint.
    pub wheel: WheelSize,
    /// Wheel inset from the front edge of the body.
    pub front_margin: f32,
    /// Wheel inset from the rear edge of the body.
    pub rear_margin: f32,
    /// Wheel inset from the body sides.
    pub side_margin: f32,
    /// Front axle distance from the car center (derived).
    pub lf: f32,
    /// Rear axle distance from the car center (derived).
    pub lr: f32,
    /// Distance between left and right wheel centers (derived).
    pub track: f32,
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            car_length: 4.0,
            car_width: 2.0,
            wheel: WheelSize::default(),
            front_margin: 0.20,
            rear_margin: 0.20,
            side_margin: 0.10,
            lf: 0.0,
            lr: 0.0,
            track: 0.0,
        }
    }
}

impl VehicleParams {
    /// Derive wheel placement from body size, wheel size and margins.
    ///
    /// # Panics
    ///
    /// Panics if the wheel does not fit inside the car body, i.e. any of
    /// the derived front/rear axle offsets or the wheel track comes out
    /// non-positive. Malformed geometry is a configuration error and must
    /// fail at initialization, not produce nonsense at runtime.
    pub fn finalize(&mut self) {
        self.lf = self.car_length * 0.5 - (self.wheel.length * 0.5 + self.front_margin);
        self.lr = self.car_length * 0.5 - (self.wheel.length * 0.5 + self.rear_margin);
        self.track = self.car_width - (self.wheel.width + 2.0 * self.side_margin);

        assert!(self.lf > 0.0, "front axle offset must be positive");
        assert!(self.lr > 0.0, "rear axle offset must be positive");
        assert!(self.track > 0.0, "wheel track must be positive");
    }

    /// Front-to-rear axle distance, the bicycle model's wheelbase `L`.
    #[inline]
    pub fn wheelbase(&self) -> f32 {
        self.lf + self.lr
    }

    /// Wheel-center anchor points in the car frame.
    ///
    /// Order: front-left, front-right, rear-right, rear-left. Consumed by
    /// the presentation layer to place wheel rectangles; requires
    /// [`finalize`](Self::finalize) to have run.
    pub fn wheel_anchors(&self) -> [Point2D; 4] {
        let half_track = self.track * 0.5;
        [
            Point2D::new(self.lf, half_track),
            Point2D::new(self.lf, -half_track),
            Point2D::new(-self.lr, -half_track),
            Point2D::new(-self.lr, half_track),
        ]
    }
}
