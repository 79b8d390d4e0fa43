//! Configuration types for loading arena scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ArenaConfig`]      – the wall rectangle
//! - [`ParametersConfig`] – driver settings (step size, frame cap, autostart)
//! - [`BodyConfig`]       – start conditions for each of the two bodies
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! arena:
//!   left: 5.0
//!   top: 5.0
//!   width: 480.0
//!   height: 450.0
//!
//! parameters:
//!   h0: 0.01          # headless step size (s)
//!   t_end: 10.0       # headless end time (s)
//!   max_dt: 0.1       # optional, cap on a single frame delta
//!   autostart: true   # optional, start without waiting for the operator
//!
//! bodies:
//!   - mass: 1.0
//!     position: [100.0, 100.0]
//!     speed: 250.0
//!     angle: 36.87    # degrees, y grows downward
//!     radius: 20.0
//!   - mass: 2.0
//!     position: [300.0, 200.0]
//!     speed: 180.0
//!     angle: 146.3
//!     radius: 30.0
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::simulation::params::BodyParams;

/// Wall rectangle, top-left corner plus size
#[derive(Deserialize, Debug, Clone)]
pub struct ArenaConfig {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub h0: f64, // headless time step
    pub t_end: f64, // headless end time
    pub max_dt: Option<f64>, // cap on one frame's dt, defaults to 0.1
    pub autostart: Option<bool>, // defaults to true
}

/// Start conditions of one body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub mass: f64,
    pub position: [f64; 2], // center, arena coordinates
    pub speed: f64,
    pub angle: f64, // heading in degrees
    pub radius: f64,
}

impl BodyConfig {
    pub fn to_params(&self) -> BodyParams {
        BodyParams {
            mass: self.mass,
            x: self.position[0],
            y: self.position[1],
            speed: self.speed,
            angle_deg: self.angle,
            radius: self.radius,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub arena: ArenaConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>, // must hold exactly two entries
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
