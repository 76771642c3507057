//! Simulation timing configuration section.

use serde::{Deserialize, Serialize};

use crate::scheduler::FixedStepClock;

use super::defaults;

/// Fixed-step timing and seeding settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationSection {
    /// Fixed physics step, seconds.
    #[serde(default = "defaults::sim_dt")]
    pub sim_dt: f64,

    /// Accumulator clamp: at most this many catch-up steps per frame.
    #[serde(default = "defaults::max_catch_up_steps")]
    pub max_catch_up_steps: u32,

    /// RNG seed for episode randomization (`0` = entropy).
    #[serde(default)]
    pub seed: u64,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            sim_dt: defaults::sim_dt(),
            max_catch_up_steps: defaults::max_catch_up_steps(),
            seed: 0,
        }
    }
}

impl SimulationSection {
    /// Convert to a [`FixedStepClock`].
    pub fn to_clock(&self) -> FixedStepClock {
        FixedStepClock::new(self.sim_dt, self.max_catch_up_steps)
    }
}
