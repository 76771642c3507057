//! Vehicle state, static geometry, and the kinematic bicycle model.

mod bicycle;
mod params;
mod state;

pub use bicycle::{BicycleLimits, BicycleModel};
pub use params::{VehicleParams, WheelSize};
pub use state::{Action, VehicleState};
