//! Kinematic bicycle model.
//!
//! Treats the car as two wheels (front steerable, rear fixed) joined by a
//! rigid wheelbase, ignoring tire slip:
//!
//! ```text
//! x_dot   = v * cos(psi)
//! y_dot   = v * sin(psi)
//! v_dot   = acceleration
//! psi_dot = v * tan(steering_angle) / wheelbase
//! ```

use serde::{Deserialize, Serialize};

use super::state::{Action, VehicleState};
use crate::core::math::wrap_to_pi;

/// Physical limits applied to every integration step.
///
/// Inputs beyond these bounds are clamped, never rejected.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BicycleLimits {
    /// Maximum steering angle, radians (default π/4 = 45°).
    pub delta_max: f32,
    /// Maximum steering rate, rad/s. Declared but not yet enforced:
    /// steering changes between steps are not rate-limited.
    pub delta_rate_max: f32,
    /// Maximum acceleration magnitude, m/s².
    pub a_max: f32,
    /// Maximum speed magnitude, m/s (default ~10 km/h).
    pub v_max: f32,
}

impl Default for BicycleLimits {
    fn default() -> Self {
        Self {
            delta_max: std::f32::consts::FRAC_PI_4,
            delta_rate_max: 0.6,
            a_max: 1.0,
            v_max: 2.78,
        }
    }
}

/// Kinematic bicycle model with a fixed wheelbase.
///
/// Stateless apart from the construction-time geometry; safe to share by
/// reference across episodes.
#[derive(Clone, Copy, Debug)]
pub struct BicycleModel {
    /// Front-to-rear axle distance, meters.
    wheelbase: f32,
    limits: BicycleLimits,
}

impl BicycleModel {
    /// Create a model with the given wheelbase and default limits.
    ///
    /// # Panics
    ///
    /// Panics if `wheelbase` is not positive.
    pub fn new(wheelbase: f32) -> Self {
        Self::with_limits(wheelbase, BicycleLimits::default())
    }

    /// Create a model with explicit limits.
    ///
    /// # Panics
    ///
    /// Panics if `wheelbase` is not positive.
    pub fn with_limits(wheelbase: f32, limits: BicycleLimits) -> Self {
        assert!(wheelbase > 0.0, "wheelbase must be positive");
        Self { wheelbase, limits }
    }

    /// Get the wheelbase in meters.
    #[inline]
    pub fn wheelbase(&self) -> f32 {
        self.wheelbase
    }

    /// Get the model limits.
    #[inline]
    pub fn limits(&self) -> &BicycleLimits {
        &self.limits
    }

    /// Advance `state` by one fixed step `dt` under `action`.
    ///
    /// Clamps the action to the model limits, Euler-integrates position,
    /// heading and velocity, wraps the heading to `(-π, π]`, and records
    /// the applied steering angle in `state.delta`.
    ///
    /// Deterministic: identical `(action, state, dt)` always produce the
    /// same output. At zero velocity steering produces no rotation.
    pub fn integrate(&self, action: Action, state: &mut VehicleState, dt: f32) {
        let limits = &self.limits;

        // Clamp inputs rather than reject them
        let steering = action
            .steering_angle
            .clamp(-limits.delta_max, limits.delta_max);
        let acceleration = action.acceleration.clamp(-limits.a_max, limits.a_max);

        state.velocity += acceleration * dt;
        state.velocity = state.velocity.clamp(-limits.v_max, limits.v_max);

        let x_dot = state.velocity * state.psi.cos();
        let y_dot = state.velocity * state.psi.sin();
        let psi_dot = state.velocity * steering.tan() / self.wheelbase;

        state.pos.x += dt * x_dot;
        state.pos.y += dt * y_dot;
        state.psi = wrap_to_pi(state.psi + dt * psi_dot);

        state.delta = steering;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    fn model() -> BicycleModel {
        BicycleModel::new(2.85)
    }

    #[test]
    #[should_panic(expected = "wheelbase must be positive")]
    fn test_new_invalid_wheelbase() {
        BicycleModel::new(0.0);
    }

    #[test]
    fn test_straight_acceleration() {
        let model = model();
        let mut state = VehicleState::default();
        let action = Action::new(1.0, 0.0);

        // 1 s at 0.01 s steps with a = 1 m/s²
        for _ in 0..100 {
            model.integrate(action, &mut state, 0.01);
        }

        assert_relative_eq!(state.velocity, 1.0, epsilon = 1e-4);
        // Forward Euler: x = dt * sum(v_k) ≈ 0.505
        assert_relative_eq!(state.pos.x, 0.505, epsilon = 1e-3);
        assert_relative_eq!(state.pos.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(state.psi, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_velocity_clamped_at_max() {
        let model = model();
        let mut state = VehicleState::default();
        let action = Action::new(100.0, 0.0); // way past a_max

        for _ in 0..10_000 {
            model.integrate(action, &mut state, 0.01);
            assert!(state.velocity.abs() <= model.limits().v_max + 1e-6);
        }
        assert_relative_eq!(state.velocity, model.limits().v_max, epsilon = 1e-5);
    }

    #[test]
    fn test_reverse_velocity_clamped() {
        let model = model();
        let mut state = VehicleState::default();
        let action = Action::new(-100.0, 0.0);

        for _ in 0..10_000 {
            model.integrate(action, &mut state, 0.01);
        }
        assert_relative_eq!(state.velocity, -model.limits().v_max, epsilon = 1e-5);
    }

    #[test]
    fn test_steering_clamped_and_recorded() {
        let model = model();
        let mut state = VehicleState::default();

        model.integrate(Action::new(0.0, 2.0), &mut state, 0.01);
        assert_relative_eq!(state.delta, model.limits().delta_max, epsilon = 1e-6);

        model.integrate(Action::new(0.0, -2.0), &mut state, 0.01);
        assert_relative_eq!(state.delta, -model.limits().delta_max, epsilon = 1e-6);
    }

    #[test]
    fn test_heading_stays_wrapped_under_constant_steering() {
        let model = model();
        let mut state = VehicleState::default();
        let action = Action::new(1.0, 0.4);

        // Long run with constant steering: psi must never leave (-π, π]
        for _ in 0..50_000 {
            model.integrate(action, &mut state, 0.01);
            assert!(
                state.psi > -PI && state.psi <= PI,
                "psi escaped range: {}",
                state.psi
            );
        }
    }

    #[test]
    fn test_no_rotation_at_zero_velocity() {
        let model = model();
        let mut state = VehicleState::default();
        let action = Action::new(0.0, 0.5);

        for _ in 0..100 {
            model.integrate(action, &mut state, 0.01);
        }

        // Full steering at standstill: no spin-in-place
        assert_relative_eq!(state.psi, 0.0, epsilon = 1e-6);
        assert_eq!(state.pos, crate::core::Point2D::ZERO);
    }

    #[test]
    fn test_deterministic() {
        let model = model();
        let action = Action::new(0.7, 0.2);

        let mut a = VehicleState::default();
        let mut b = VehicleState::default();
        for _ in 0..1000 {
            model.integrate(action, &mut a, 0.01);
            model.integrate(action, &mut b, 0.01);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_turning_direction() {
        let model = model();
        let mut state = VehicleState::default();

        // Positive steering with forward velocity turns counter-clockwise
        for _ in 0..100 {
            model.integrate(Action::new(1.0, 0.3), &mut state, 0.01);
        }
        assert!(state.psi > 0.0);
        assert!(state.pos.y > 0.0);
    }
}
