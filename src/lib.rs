//! Two circles bouncing in a walled 2D arena with elastic collisions.
//!
//! - `simulation`: bodies, collision resolution, the engine and its drivers
//! - `configuration`: YAML scenario types
//! - `visualization`: Bevy 2D viewer (feature `viewer`)

pub mod error;
pub mod simulation;
pub mod configuration;
#[cfg(feature = "viewer")]
pub mod visualization;

pub use error::{Result, SimError};
pub use simulation::states::{Body, Bounds, System, NVec2};
pub use simulation::collision::{resolve, Contact};
pub use simulation::engine::Engine;
pub use simulation::params::{BodyParams, Parameters};
pub use simulation::scenario::Scenario;
pub use simulation::runner::{run_headless, RunSummary};

pub use configuration::config::{ArenaConfig, ParametersConfig, BodyConfig, ScenarioConfig};

#[cfg(feature = "viewer")]
pub use visualization::arena_vis2d::run_2d;
