//! Unified YAML configuration.
//!
//! Loads every setting from a single YAML file; each section and every
//! field falls back to built-in defaults when omitted.

mod defaults;
mod error;
mod parking;
mod simulation;
mod vehicle;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::ConfigLoadError;
pub use parking::ParkingSection;
pub use simulation::SimulationSection;
pub use vehicle::VehicleSection;

use crate::env::{ParkingEnv, RandomSource, SeededRandom};
use crate::scheduler::Simulation;

/// Full simulation configuration loaded from YAML.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct SimConfig {
    /// Vehicle geometry and limits.
    #[serde(default)]
    pub vehicle: VehicleSection,

    /// Slot geometry, spawn ranges, tolerances.
    #[serde(default)]
    pub parking: ParkingSection,

    /// Fixed-step timing and seeding.
    #[serde(default)]
    pub simulation: SimulationSection,
}

impl SimConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from the default path (`configs/config.yaml`), falling back
    /// to built-in defaults when the file does not exist.
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Build a [`ParkingEnv`] from this configuration, with randomness
    /// seeded per the `simulation.seed` setting.
    pub fn to_env(&self) -> ParkingEnv {
        self.to_env_with_rng(Box::new(SeededRandom::new(self.simulation.seed)))
    }

    /// Build a [`ParkingEnv`] with an explicitly injected randomness
    /// source.
    pub fn to_env_with_rng(&self, rng: Box<dyn RandomSource>) -> ParkingEnv {
        ParkingEnv::new(
            self.vehicle.to_params(),
            self.parking.to_env_config(),
            self.vehicle.to_limits(),
            rng,
        )
    }

    /// Build a ready-to-tick [`Simulation`] (environment + clock).
    pub fn to_simulation(&self) -> Simulation {
        Simulation::new(self.to_env(), self.simulation.to_clock())
    }
}
