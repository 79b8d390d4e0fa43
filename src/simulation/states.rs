//! Core state types for the two-body arena simulation.
//!
//! - `Body`   a circle with mass moving under inertia
//! - `Bounds` the axis-aligned arena rectangle (y grows downward, like screen space)
//! - `System` the pair of bodies plus the elapsed simulated time `t`

use nalgebra::Vector2;

use crate::error::{Result, SimError};

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position of the center
    pub v: NVec2, // velocity, units per second
    pub m: f64, // mass
    pub radius: f64, // radius
}

impl Body {
    pub fn new(x: NVec2, v: NVec2, m: f64, radius: f64) -> Self {
        Self { x, v, m, radius }
    }

    /// Explicit Euler step: x += v * dt
    pub fn integrate(&mut self, dt: f64) {
        self.x += self.v * dt;
    }

    /// Bounce off the arena walls.
    ///
    /// Each axis is checked on its own, so a body pushed into a corner
    /// flips both velocity components in the same call. A penetrating body is
    /// clamped back so that it touches the wall it crossed.
    pub fn reflect_off_walls(&mut self, bounds: &Bounds) {
        let r = self.radius;

        if self.x.x - r < bounds.left || self.x.x + r > bounds.right {
            self.v.x = -self.v.x;
            self.x.x = clamp_axis(self.x.x, bounds.left + r, bounds.right - r);
        }

        if self.x.y - r < bounds.top || self.x.y + r > bounds.bottom {
            self.v.y = -self.v.y;
            self.x.y = clamp_axis(self.x.y, bounds.top + r, bounds.bottom - r);
        }
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.x - other.x).norm()
    }
}

// lo wins when the body is wider than the arena, f64::clamp would panic there
fn clamp_axis(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}

/// Arena rectangle, fixed for the lifetime of an `Engine`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    /// Build bounds from the top-left corner and the rectangle size
    pub fn from_rect(left: f64, top: f64, width: f64, height: f64) -> Result<Self> {
        if !left.is_finite() || !top.is_finite() {
            return Err(SimError::invalid("arena", "corner must be finite"));
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(SimError::invalid("arena.width", "must be finite and > 0"));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(SimError::invalid("arena.height", "must be finite and > 0"));
        }
        Ok(Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        })
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> NVec2 {
        NVec2::new(
            0.5 * (self.left + self.right),
            0.5 * (self.top + self.bottom),
        )
    }

    /// True if the whole circle lies inside the rectangle
    pub fn contains(&self, body: &Body) -> bool {
        let r = body.radius;
        body.x.x - r >= self.left
            && body.x.x + r <= self.right
            && body.x.y - r >= self.top
            && body.x.y + r <= self.bottom
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: [Body; 2], // the colliding pair
    pub t: f64, // simulated time since the last start
}

impl System {
    pub fn new(bodies: [Body; 2]) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn momentum(&self) -> NVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Bounds {
        Bounds::from_rect(5.0, 5.0, 400.0, 300.0).unwrap()
    }

    #[test]
    fn integrate_moves_along_velocity() {
        let mut b = Body::new(NVec2::new(1.0, 2.0), NVec2::new(3.0, -4.0), 1.0, 1.0);
        b.integrate(0.5);
        assert_eq!(b.x, NVec2::new(2.5, 0.0));
        assert_eq!(b.v, NVec2::new(3.0, -4.0));
    }

    #[test]
    fn integrate_zero_dt_is_noop() {
        let mut b = Body::new(NVec2::new(1.0, 2.0), NVec2::new(3.0, -4.0), 1.0, 1.0);
        b.integrate(0.0);
        assert_eq!(b.x, NVec2::new(1.0, 2.0));
    }

    #[test]
    fn left_wall_flips_and_clamps() {
        let mut b = Body::new(NVec2::new(3.0, 100.0), NVec2::new(-10.0, 2.0), 1.0, 20.0);
        b.reflect_off_walls(&arena());
        assert_eq!(b.x.x, 25.0);
        assert_eq!(b.v.x, 10.0);
        // y untouched
        assert_eq!(b.x.y, 100.0);
        assert_eq!(b.v.y, 2.0);
    }

    #[test]
    fn corner_bounces_both_axes() {
        let bounds = arena();
        let mut b = Body::new(NVec2::new(404.0, 304.0), NVec2::new(7.0, 9.0), 1.0, 10.0);
        b.reflect_off_walls(&bounds);
        assert_eq!(b.v, NVec2::new(-7.0, -9.0));
        assert_eq!(b.x, NVec2::new(bounds.right - 10.0, bounds.bottom - 10.0));
        assert!(bounds.contains(&b));
    }

    #[test]
    fn body_inside_is_untouched() {
        let mut b = Body::new(NVec2::new(100.0, 100.0), NVec2::new(-7.0, 9.0), 1.0, 10.0);
        let before = b.clone();
        b.reflect_off_walls(&arena());
        assert_eq!(b, before);
    }

    #[test]
    fn oversized_body_does_not_panic() {
        let bounds = Bounds::from_rect(0.0, 0.0, 10.0, 10.0).unwrap();
        let mut b = Body::new(NVec2::new(5.0, 5.0), NVec2::new(1.0, 1.0), 1.0, 8.0);
        b.reflect_off_walls(&bounds);
        assert_eq!(b.x, NVec2::new(8.0, 8.0));
    }

    #[test]
    fn bounds_reject_empty_rect() {
        assert!(Bounds::from_rect(0.0, 0.0, 0.0, 10.0).is_err());
        assert!(Bounds::from_rect(0.0, 0.0, 10.0, -1.0).is_err());
        assert!(Bounds::from_rect(f64::NAN, 0.0, 10.0, 10.0).is_err());
    }

    #[test]
    fn system_totals() {
        let sys = System::new([
            Body::new(NVec2::zeros(), NVec2::new(3.0, 4.0), 2.0, 1.0),
            Body::new(NVec2::new(10.0, 0.0), NVec2::new(-1.0, 0.0), 1.0, 1.0),
        ]);
        assert!((sys.kinetic_energy() - 25.5).abs() < 1e-12);
        assert_eq!(sys.momentum(), NVec2::new(5.0, 8.0));
    }
}
