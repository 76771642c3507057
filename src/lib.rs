//! # Virama-Sim: Fixed-Step Parking Simulation
//!
//! A planar vehicle simulation for interactive and RL-style parking
//! exercises: a kinematic bicycle model advanced at a fixed physics
//! step, an episodic parking environment with slot-relative
//! observations, and a geometric rectangle-in-rectangle success test.
//!
//! ## Quick Start
//!
//! ```rust
//! use virama_sim::config::SimConfig;
//! use virama_sim::vehicle::Action;
//!
//! let config = SimConfig::from_yaml("simulation:\n  seed: 42\n").unwrap();
//! let mut sim = config.to_simulation();
//!
//! // One rendered frame: 16 ms of wall-clock time, forward + left input
//! let action = Action::new(1.0, 0.3);
//! let steps = sim.tick(action, 0.016);
//!
//! let shown = sim.presentation_state();
//! println!("ran {steps} steps, car at ({:.2}, {:.2})", shown.pos.x, shown.pos.y);
//! ```
//!
//! ## Coordinate Frame
//!
//! All coordinates follow the ROS REP-103 convention:
//! - **X-forward**, **Y-left**, counter-clockwise positive rotation
//! - Headings in radians, wrapped to `(-π, π]`
//!
//! ## Architecture
//!
//! - [`core`]: geometry leaf types (`Point2D`, `Pose2D`, angle math)
//! - [`vehicle`]: vehicle state, static geometry, bicycle kinematics
//! - [`env`]: episodic parking environment and injected randomness
//! - [`scheduler`]: fixed-step clock and the simulation driver
//! - [`config`]: YAML configuration with per-field defaults
//!
//! ## Data Flow
//!
//! ```text
//! driver input          wall-clock frame time
//!      │                        │
//!      ▼                        ▼
//!  ┌────────┐        ┌───────────────────┐
//!  │ Action │───────►│    Simulation     │  accumulate, clamp,
//!  └────────┘        │ (FixedStepClock)  │  drain fixed steps
//!                    └─────────┬─────────┘
//!                              │ step(action, sim_dt)
//!                              ▼
//!                    ┌───────────────────┐
//!                    │    ParkingEnv     │──► reward (0 / 1)
//!                    │  (BicycleModel)   │──► Observation
//!                    └─────────┬─────────┘      (slot corners in
//!                              │                 car frame)
//!                              ▼
//!                     presentation_state()
//!                     (prev/cur blend at alpha)
//! ```
//!
//! The crate exposes plain data only: rendering, window management,
//! and input mapping live in the host application.

pub mod config;
pub mod core;
pub mod env;
pub mod scheduler;
pub mod vehicle;

// Re-export main types at crate root
pub use crate::config::{ConfigLoadError, SimConfig};
pub use crate::core::{Point2D, Pose2D};
pub use crate::env::{Observation, ParkingConfig, ParkingEnv, RandomSource, SeededRandom};
pub use crate::scheduler::{FixedStepClock, Simulation};
pub use crate::vehicle::{
    Action, BicycleLimits, BicycleModel, VehicleParams, VehicleState, WheelSize,
};
