//! Fixed-step scheduling and the simulation driver.
//!
//! Physics runs at a constant `sim_dt` regardless of how fast the host
//! renders. Leftover frame time sits in an accumulator; the fraction of a
//! step still pending becomes the interpolation alpha the presentation
//! layer uses to blend between the previous and current physics states.

use crate::core::math::lerp;
use crate::core::Pose2D;
use crate::env::{Observation, ParkingEnv};
use crate::vehicle::{Action, VehicleState};

/// Time accumulator driving fixed physics steps.
///
/// Owns nothing but the accumulator: callers feed it wall-clock frame
/// deltas and drain whole steps from it.
#[derive(Clone, Copy, Debug)]
pub struct FixedStepClock {
    sim_dt: f64,
    max_catch_up_steps: u32,
    accumulator: f64,
}

impl FixedStepClock {
    /// Create a clock with the given fixed step and catch-up bound.
    ///
    /// # Panics
    ///
    /// Panics if `sim_dt` is not positive or `max_catch_up_steps` is zero.
    pub fn new(sim_dt: f64, max_catch_up_steps: u32) -> Self {
        assert!(sim_dt > 0.0, "sim_dt must be positive");
        assert!(max_catch_up_steps > 0, "max_catch_up_steps must be positive");
        Self {
            sim_dt,
            max_catch_up_steps,
            accumulator: 0.0,
        }
    }

    /// Add one frame's elapsed wall-clock time, then clamp.
    ///
    /// The accumulator is truncated at `sim_dt * max_catch_up_steps`:
    /// after a host stall (breakpoint, slow frame) the simulation drops
    /// the excess elapsed time instead of running thousands of catch-up
    /// steps.
    pub fn advance(&mut self, frame_dt: f64) {
        self.accumulator += frame_dt;
        let max_accum = self.sim_dt * f64::from(self.max_catch_up_steps);
        if self.accumulator > max_accum {
            self.accumulator = max_accum;
        }
    }

    /// Consume one fixed step if a full one is available.
    #[inline]
    pub fn try_consume(&mut self) -> bool {
        if self.accumulator >= self.sim_dt {
            self.accumulator -= self.sim_dt;
            true
        } else {
            false
        }
    }

    /// Fraction of a step still pending, in `[0, 1)`.
    ///
    /// Presentation code blends previous→current physics state at this
    /// alpha for jitter-free display.
    #[inline]
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.sim_dt) as f32
    }

    /// The fixed physics step in seconds.
    #[inline]
    pub fn sim_dt(&self) -> f64 {
        self.sim_dt
    }
}

/// Simulation driver: environment plus fixed-step clock plus the
/// previous/current state pair the renderer interpolates between.
pub struct Simulation {
    env: ParkingEnv,
    clock: FixedStepClock,
    previous: VehicleState,
    current: VehicleState,
}

impl Simulation {
    /// Wrap an environment with a fixed-step clock.
    ///
    /// Resets the environment so the interpolation pair starts from a
    /// valid episode state.
    pub fn new(mut env: ParkingEnv, clock: FixedStepClock) -> Self {
        env.reset();
        let state = env.vehicle_state();
        Self {
            env,
            clock,
            previous: state,
            current: state,
        }
    }

    /// Run one frame: accumulate `frame_dt`, then drain zero or more
    /// fixed steps under `action`.
    ///
    /// Before each step the current state is snapshotted as the previous
    /// one, so [`presentation_state`](Self::presentation_state) always
    /// has a pair one `sim_dt` apart. Returns the number of physics
    /// steps executed (zero when the frame was faster than `sim_dt`).
    pub fn tick(&mut self, action: Action, frame_dt: f64) -> usize {
        self.clock.advance(frame_dt);

        let sim_dt = self.clock.sim_dt() as f32;
        let mut steps = 0;
        while self.clock.try_consume() {
            self.previous = self.current;
            let obs: Observation = self.env.step(action, sim_dt);
            self.current = obs.vehicle_state;
            steps += 1;
        }
        steps
    }

    /// Start a new episode and reset the interpolation pair.
    pub fn reset(&mut self) {
        self.env.reset();
        self.previous = self.env.vehicle_state();
        self.current = self.previous;
    }

    /// Vehicle state blended for display at the current alpha.
    ///
    /// Position and steering interpolate linearly; heading takes the
    /// shortest angular path. Velocity is reported from the current
    /// state (it has no visual continuity requirement).
    pub fn presentation_state(&self) -> VehicleState {
        let alpha = self.clock.alpha();
        let prev_pose = Pose2D::from_position_angle(self.previous.pos, self.previous.psi);
        let cur_pose = Pose2D::from_position_angle(self.current.pos, self.current.psi);
        let blended = prev_pose.lerp(cur_pose, alpha);

        VehicleState {
            pos: blended.position(),
            psi: blended.theta,
            velocity: self.current.velocity,
            delta: lerp(self.previous.delta, self.current.delta, alpha),
        }
    }

    /// Interpolation fraction of the underlying clock, in `[0, 1)`.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.clock.alpha()
    }

    /// The wrapped environment.
    #[inline]
    pub fn env(&self) -> &ParkingEnv {
        &self.env
    }

    /// Mutable access to the wrapped environment.
    #[inline]
    pub fn env_mut(&mut self) -> &mut ParkingEnv {
        &mut self.env
    }
}
