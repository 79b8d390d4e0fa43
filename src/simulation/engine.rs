//! Runtime engine for the two-body arena
//!
//! Owns the arena bounds, the current `System` and the running flag.
//! Drivers (headless loop, viewer) call `start` when the operator
//! (re)launches the simulation and `tick` once per frame.

use log::{debug, info, warn};

use crate::error::Result;
use crate::simulation::collision::{self, Contact};
use crate::simulation::params::BodyParams;
use crate::simulation::states::{Body, Bounds, NVec2, System};

#[derive(Debug, Clone)]
pub struct Engine {
    bounds: Bounds, // arena, fixed for the engine lifetime
    system: System, // the pair currently on screen
    running: bool, // gates tick
}

impl Engine {
    /// Engine showing `initial` but not yet running
    pub fn new(bounds: Bounds, initial: [Body; 2]) -> Self {
        Self {
            bounds,
            system: System::new(initial),
            running: false,
        }
    }

    /// Validate both bodies, build them, and replace the current state.
    ///
    /// On error nothing changes, the previous bodies and running flag stay.
    pub fn start(&mut self, first: BodyParams, second: BodyParams) -> Result<()> {
        first.validate()?;
        second.validate()?;

        let a = first.to_body();
        let mut b = second.to_body();
        place_touching(&a, &mut b);

        for body in [&a, &b] {
            if !self.bounds.contains(body) {
                warn!(
                    "body at ({:.2}, {:.2}) r={} starts outside the arena, walls will push it in",
                    body.x.x, body.x.y, body.radius
                );
            }
        }

        self.system = System::new([a, b]);
        self.running = true;
        info!(
            "simulation started, kinetic energy {:.4}",
            self.system.kinetic_energy()
        );
        Ok(())
    }

    /// Pause; bodies keep their state until `resume` or the next start
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Continue a paused run from where it stopped
    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Flip between paused and running, returns the new running flag
    pub fn toggle_pause(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Order per frame:
    /// 1. integrate both bodies
    /// 2. resolve the ball-ball collision
    /// 3. reflect each body off the walls
    ///
    /// Swapping 2 and 3 or integrating after the collision changes trajectories.
    pub fn tick(&mut self, dt: f64) -> Contact {
        if !self.running {
            return Contact::Separated;
        }

        let [a, b] = &mut self.system.bodies;

        a.integrate(dt);
        b.integrate(dt);

        let contact = collision::resolve(a, b);
        if contact.is_collision() {
            debug!("t={:.4} contact {:?}", self.system.t, contact);
        }

        a.reflect_off_walls(&self.bounds);
        b.reflect_off_walls(&self.bounds);

        self.system.t += dt;
        contact
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn bodies(&self) -> &[Body; 2] {
        &self.system.bodies
    }

    pub fn body(&self, i: usize) -> Option<&Body> {
        self.system.bodies.get(i)
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    /// Simulated seconds since the last start
    pub fn time(&self) -> f64 {
        self.system.t
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.system.kinetic_energy()
    }

    pub fn momentum(&self) -> NVec2 {
        self.system.momentum()
    }
}

/// Move `b` so it touches `a` if the two start overlapping or touching.
///
/// `b` slides along the line from `a` to `b` until the centers are exactly
/// `ra + rb` apart. Coincident centers give atan2(0, 0) = 0, so `b` lands on +x.
/// The placed distance is never below `ra + rb`, even after rounding, so the
/// first `tick` cannot see an overlap.
pub fn place_touching(a: &Body, b: &mut Body) {
    let d = b.x - a.x;
    let min_distance = a.radius + b.radius;
    if d.norm() > min_distance {
        return;
    }
    let angle = d.y.atan2(d.x);
    let dir = NVec2::new(angle.cos(), angle.sin());

    // Rounding in cos/sin and the addition can land a hair short; lengthen until it doesn't
    let mut reach = min_distance;
    let mut step = min_distance * f64::EPSILON;
    loop {
        b.x = a.x + reach * dir;
        if (a.x - b.x).norm() >= min_distance {
            break;
        }
        reach += step;
        step *= 2.0;
    }
    debug!(
        "second body moved to ({:.3}, {:.3}) to remove initial overlap",
        b.x.x, b.x.y
    );
}
