//! Fixed-step driver used when no window is wanted
//!
//! Calls `tick(h0)` the requested number of times and keeps a few counters
//! so the binary (and tests) can report what happened.

use log::{debug, info};

use crate::error::Result;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

/// How often (in steps) progress is logged
const LOG_EVERY: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub steps: usize,
    pub t: f64, // simulated time reached
    pub collisions: usize, // ball-ball contacts resolved
    pub kinetic_energy: (f64, f64), // before, after
    pub momentum: (NVec2, NVec2), // before, after (walls do not conserve it)
}

/// Run `steps` fixed steps of `parameters.h0`, starting the engine first if idle
pub fn run_headless(scenario: &mut Scenario, steps: usize) -> Result<RunSummary> {
    if !scenario.engine.is_running() {
        scenario.restart()?;
    }

    let h0 = scenario.parameters.h0;
    let e0 = scenario.engine.kinetic_energy();
    let p0 = scenario.engine.momentum();
    let mut collisions = 0;

    info!("headless run: {} steps of {} s", steps, h0);
    for step in 1..=steps {
        if scenario.engine.tick(h0).is_collision() {
            collisions += 1;
        }
        if step % LOG_EVERY == 0 {
            let [a, b] = scenario.engine.bodies();
            debug!(
                "step {} t={:.3} a=({:.2}, {:.2}) b=({:.2}, {:.2}) ke={:.4}",
                step,
                scenario.engine.time(),
                a.x.x,
                a.x.y,
                b.x.x,
                b.x.y,
                scenario.engine.kinetic_energy()
            );
        }
    }

    Ok(RunSummary {
        steps,
        t: scenario.engine.time(),
        collisions,
        kinetic_energy: (e0, scenario.engine.kinetic_energy()),
        momentum: (p0, scenario.engine.momentum()),
    })
}
