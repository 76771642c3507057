//! Parking environment: episodic vehicle + slot state, observations,
//! and the geometric parking-success test.
//!
//! The environment owns one episode's [`VehicleState`] and slot pose,
//! advances the vehicle through the bicycle model, and judges success
//! with a rectangle-in-rectangle containment test performed in the slot
//! frame. All geometry goes through [`Pose2D`], so presentation and demo
//! code query the environment instead of re-deriving transforms.
//!
//! # Frames
//!
//! - **Car frame**: origin at the car center, x forward, y left.
//! - **Slot frame**: origin at the slot center, x along the slot length,
//!   y across the slot width. Containment checks are axis-aligned here.
//! - **Slot footprint frame**: used only to lay out the slot's corner
//!   rectangle, x across the width, y along the length (matches how the
//!   slot rectangle is drawn).

mod random;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::math::angle_diff;
use crate::core::{Point2D, Pose2D};
use crate::vehicle::{Action, BicycleLimits, BicycleModel, VehicleParams, VehicleState};

pub use random::{RandomSource, SeededRandom};

/// Slot geometry, spawn ranges, and parking tolerances.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParkingConfig {
    /// Slot length in meters (along slot local x).
    pub slot_length: f32,
    /// Slot width in meters (along slot local y).
    pub slot_width: f32,
    /// Soft-center tolerance along the slot axis, meters.
    pub longitudinal_tolerance: f32,
    /// Soft-center tolerance across the slot, meters.
    pub lateral_tolerance: f32,
    /// Soft-center heading tolerance, radians. Computed and logged by
    /// [`ParkingEnv::is_parked_at_center`] but not enforced.
    pub yaw_tolerance: f32,
    /// Slot center spawn range along world x, `(min, max)`.
    pub slot_x_range: (f32, f32),
    /// Slot center spawn range along world y, `(min, max)`.
    pub slot_y_range: (f32, f32),
    /// The car spawns within ± this offset of the slot center, per axis.
    pub spawn_offset: f32,
}

impl Default for ParkingConfig {
    fn default() -> Self {
        Self {
            slot_length: 6.0,
            slot_width: 3.5,
            longitudinal_tolerance: 1.5,
            lateral_tolerance: 1.0,
            yaw_tolerance: 10.0_f32.to_radians(),
            slot_x_range: (-15.0, 15.0),
            slot_y_range: (-10.0, 10.0),
            spawn_offset: 5.0,
        }
    }
}

/// What the agent sees after a step: the slot's four corners expressed
/// in the car frame, plus the raw vehicle state.
///
/// Rebuilt from the current poses every step, never cached across steps.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Observation {
    /// Slot corners in the car frame, fixed order:
    /// front-right, front-left, rear-left, rear-right.
    pub corners_in_car_frame: [Point2D; 4],
    /// Vehicle state at the time of observation.
    pub vehicle_state: VehicleState,
}

/// Episodic parking environment.
///
/// Gymnasium-style surface: [`reset`](Self::reset) starts an episode,
/// [`step`](Self::step) advances one fixed step and returns an
/// [`Observation`], [`reward`](Self::reward) reports parking success.
/// Termination policy is the caller's responsibility; there is no
/// internal done flag.
pub struct ParkingEnv {
    model: BicycleModel,
    params: VehicleParams,
    config: ParkingConfig,
    rng: Box<dyn RandomSource>,
    vehicle_state: VehicleState,
    slot_pose: Pose2D,
    observation: Observation,
    last_reward: f32,
}

impl ParkingEnv {
    /// Create an environment from finalized vehicle geometry, slot
    /// configuration, model limits, and an injected randomness source.
    pub fn new(
        params: VehicleParams,
        config: ParkingConfig,
        limits: BicycleLimits,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let model = BicycleModel::with_limits(params.wheelbase(), limits);
        Self {
            model,
            params,
            config,
            rng,
            vehicle_state: VehicleState::default(),
            slot_pose: Pose2D::identity(),
            observation: Observation::default(),
            last_reward: 0.0,
        }
    }

    /// Start a new episode.
    ///
    /// Draws the slot center uniformly from the configured ranges, the
    /// slot yaw from {0°, 90°}, and the car spawn as slot center plus a
    /// uniform per-axis offset. Velocity, heading and steering are
    /// zeroed. All randomness comes from the injected source.
    pub fn reset(&mut self) {
        let (min_x, max_x) = self.config.slot_x_range;
        let (min_y, max_y) = self.config.slot_y_range;
        let slot_pos = Point2D::new(
            self.rng.rand_float(min_x, max_x),
            self.rng.rand_float(min_y, max_y),
        );
        let slot_yaw = if self.rng.rand_int(0, 1) == 0 {
            0.0
        } else {
            std::f32::consts::FRAC_PI_2
        };
        self.slot_pose = Pose2D::from_position_angle(slot_pos, slot_yaw);

        let offset = self.config.spawn_offset;
        let spawn = Point2D::new(
            slot_pos.x + self.rng.rand_float(-offset, offset),
            slot_pos.y + self.rng.rand_float(-offset, offset),
        );

        self.vehicle_state = VehicleState {
            pos: spawn,
            psi: 0.0,
            velocity: 0.0,
            delta: 0.0,
        };
        self.last_reward = 0.0;
        self.observation = self.build_observation();
    }

    /// Advance the vehicle by one fixed step `dt` under `action`.
    ///
    /// Delegates motion to the bicycle model (which clamps the action),
    /// recomputes the reward, and returns the fresh observation.
    pub fn step(&mut self, action: Action, dt: f32) -> Observation {
        self.model.integrate(action, &mut self.vehicle_state, dt);
        self.last_reward = self.reward();
        self.observation = self.build_observation();
        self.observation
    }

    /// Parking reward for the current state: `1.0` if the car rectangle
    /// is fully contained in the slot, else `0.0`. No shaping.
    pub fn reward(&self) -> f32 {
        let car_pose = self.car_pose();
        if self.is_parked(car_pose, self.slot_pose) {
            debug!("parking success, reward 1.0");
            1.0
        } else {
            debug!("parking fail, reward 0.0");
            0.0
        }
    }

    /// The slot's four corners in the car frame.
    ///
    /// Corners are laid out in the slot footprint frame as
    /// `(±half_width, ±half_length)` in the fixed order front-right,
    /// front-left, rear-left, rear-right, taken to the world frame by the
    /// slot pose, then into the car frame.
    pub fn relative_corners(&self, car_pose: Pose2D, slot_pose: Pose2D) -> [Point2D; 4] {
        let half_len = self.config.slot_length * 0.5;
        let half_wid = self.config.slot_width * 0.5;

        let footprint = [
            Point2D::new(half_wid, half_len),   // front-right
            Point2D::new(half_wid, -half_len),  // front-left
            Point2D::new(-half_wid, -half_len), // rear-left
            Point2D::new(-half_wid, half_len),  // rear-right
        ];

        footprint.map(|corner| {
            let world = slot_pose.transform_point(corner);
            car_pose.inverse_transform_point(world)
        })
    }

    /// Strict geometric parking test: every car body corner must lie
    /// inside the slot rectangle.
    ///
    /// The car corners `(±half_car_len, ±half_car_wid)` are taken from
    /// the car frame into the slot frame; containment there is an
    /// axis-aligned bound check `|x'| <= half_slot_len` and
    /// `|y'| <= half_slot_wid`, valid for any car/slot orientation.
    /// Returns `false` on the first corner outside either bound.
    pub fn is_parked(&self, car_pose: Pose2D, slot_pose: Pose2D) -> bool {
        let half_car_len = self.params.car_length * 0.5;
        let half_car_wid = self.params.car_width * 0.5;
        let half_slot_len = self.config.slot_length * 0.5;
        let half_slot_wid = self.config.slot_width * 0.5;

        let body = [
            Point2D::new(half_car_len, half_car_wid),
            Point2D::new(half_car_len, -half_car_wid),
            Point2D::new(-half_car_len, -half_car_wid),
            Point2D::new(-half_car_len, half_car_wid),
        ];

        for local in body {
            let world = car_pose.transform_point(local);
            let slot = slot_pose.inverse_transform_point(world);
            if slot.x.abs() > half_slot_len || slot.y.abs() > half_slot_wid {
                return false;
            }
        }
        true
    }

    /// Soft parking check: is the car *center* within the slot-frame
    /// position tolerances?
    ///
    /// The heading error against the yaw tolerance is computed and
    /// logged, but does not affect the returned boolean.
    pub fn is_parked_at_center(&self, car_pose: Pose2D, slot_pose: Pose2D) -> bool {
        let rel = slot_pose.inverse_transform_point(car_pose.position());
        let psi_rel = angle_diff(slot_pose.theta, car_pose.theta);

        let pos_ok = rel.x.abs() <= self.config.longitudinal_tolerance
            && rel.y.abs() <= self.config.lateral_tolerance;
        let yaw_ok = psi_rel.abs() <= self.config.yaw_tolerance;

        trace!(
            "soft center check: rel=({:.3}, {:.3}) pos_ok={} |psi_rel|={:.3} yaw_ok={} (yaw not enforced)",
            rel.x, rel.y, pos_ok, psi_rel.abs(), yaw_ok
        );

        pos_ok
    }

    /// Current vehicle state.
    #[inline]
    pub fn vehicle_state(&self) -> VehicleState {
        self.vehicle_state
    }

    /// Current car pose (position + heading) as a frame.
    #[inline]
    pub fn car_pose(&self) -> Pose2D {
        Pose2D::from_position_angle(self.vehicle_state.pos, self.vehicle_state.psi)
    }

    /// The slot pose drawn at the last reset.
    #[inline]
    pub fn slot_pose(&self) -> Pose2D {
        self.slot_pose
    }

    /// The observation from the last reset or step.
    #[inline]
    pub fn observation(&self) -> Observation {
        self.observation
    }

    /// Reward computed during the last step.
    #[inline]
    pub fn last_reward(&self) -> f32 {
        self.last_reward
    }

    /// Vehicle geometry the environment was built with.
    #[inline]
    pub fn vehicle_params(&self) -> &VehicleParams {
        &self.params
    }

    /// Slot and tolerance configuration.
    #[inline]
    pub fn config(&self) -> &ParkingConfig {
        &self.config
    }

    fn build_observation(&self) -> Observation {
        Observation {
            corners_in_car_frame: self.relative_corners(self.car_pose(), self.slot_pose),
            vehicle_state: self.vehicle_state,
        }
    }
}
