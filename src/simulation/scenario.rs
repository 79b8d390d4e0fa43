//! Build a fully-initialized arena scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - the engine (`Engine`) with its arena bounds
//! - driver parameters (`Parameters`)
//! - the two start descriptions used by every (re)start
//!
//! With the `viewer` feature the scenario is inserted into Bevy as a `Resource`

use log::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::{Result, SimError};
use crate::simulation::engine::Engine;
use crate::simulation::params::{BodyParams, Parameters};
use crate::simulation::states::Bounds;

const DEFAULT_MAX_DT: f64 = 0.1;

/// Runtime bundle built from a [`ScenarioConfig`]
#[cfg_attr(feature = "viewer", derive(bevy::prelude::Resource))]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub start: [BodyParams; 2], // what `restart` feeds into Engine::start
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let [first, second] = body_pair(&cfg.bodies)?;

        // Arena bounds from ArenaConfig
        let a = &cfg.arena;
        let bounds = Bounds::from_rect(a.left, a.top, a.width, a.height)?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        if !p_cfg.h0.is_finite() || p_cfg.h0 <= 0.0 {
            return Err(SimError::invalid("parameters.h0", "must be finite and > 0"));
        }
        if !p_cfg.t_end.is_finite() || p_cfg.t_end < 0.0 {
            return Err(SimError::invalid("parameters.t_end", "must be finite and >= 0"));
        }
        let max_dt = p_cfg.max_dt.unwrap_or(DEFAULT_MAX_DT);
        if !max_dt.is_finite() || max_dt <= 0.0 {
            return Err(SimError::invalid("parameters.max_dt", "must be finite and > 0"));
        }
        let parameters = Parameters {
            h0: p_cfg.h0,
            t_end: p_cfg.t_end,
            max_dt,
            autostart: p_cfg.autostart.unwrap_or(true),
        };

        // Bodies shown before the first start, already validated
        first.validate()?;
        second.validate()?;
        let engine = Engine::new(bounds, [first.to_body(), second.to_body()]);

        let mut scenario = Self {
            engine,
            parameters,
            start: [first, second],
        };
        if scenario.parameters.autostart {
            scenario.restart()?;
        }
        info!(
            "scenario ready: arena {}x{}, autostart={}",
            bounds.width(),
            bounds.height(),
            scenario.parameters.autostart
        );
        Ok(scenario)
    }

    /// Override one of the two start descriptions (e.g. from the command line)
    pub fn set_start(&mut self, index: usize, params: BodyParams) -> Result<()> {
        params.validate()?;
        let slot = self
            .start
            .get_mut(index)
            .ok_or_else(|| SimError::invalid("body", format!("index {index} out of range")))?;
        *slot = params;
        Ok(())
    }

    /// Start (or restart) the engine from the stored start descriptions
    pub fn restart(&mut self) -> Result<()> {
        let [first, second] = self.start;
        self.engine.start(first, second)
    }

    /// Feed one measured frame delta to the engine, clamped by `max_dt`
    pub fn advance_frame(&mut self, measured_dt: f64) {
        let dt = self.parameters.frame_dt(measured_dt);
        self.engine.tick(dt);
    }
}

fn body_pair(bodies: &[BodyConfig]) -> Result<[BodyParams; 2]> {
    match bodies {
        [first, second] => Ok([first.to_params(), second.to_params()]),
        _ => Err(SimError::invalid(
            "bodies",
            format!("expected exactly 2 bodies, found {}", bodies.len()),
        )),
    }
}
