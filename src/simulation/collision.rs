//! Pairwise elastic collision between two bodies
//!
//! Detection is a plain overlap test on the current positions (discrete time,
//! no swept circles). Resolution splits both velocities along the contact
//! normal and tangent, exchanges the normal parts with the 1-D elastic
//! formula, then pushes the bodies apart by half the overlap each.

use log::warn;

use super::states::{Body, NVec2};

/// What `resolve` did to the pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    /// Centers at least `r1 + r2` apart, bodies untouched
    Separated,
    /// Overlapping bodies, velocities exchanged and positions corrected
    Resolved { overlap: f64 },
    /// Coincident centers, resolved along the fallback normal
    Degenerate { overlap: f64 },
}

impl Contact {
    pub fn is_collision(&self) -> bool {
        !matches!(self, Contact::Separated)
    }
}

/// Normal used when the two centers coincide and no direction can be derived
pub fn fallback_normal() -> NVec2 {
    NVec2::new(1.0, 0.0)
}

/// Resolve a possible collision between `a` and `b` in place.
pub fn resolve(a: &mut Body, b: &mut Body) -> Contact {
    // d points from b to a
    let d = a.x - b.x;
    let distance = d.norm();
    let min_distance = a.radius + b.radius;

    if distance >= min_distance {
        return Contact::Separated;
    }

    let overlap = min_distance - distance;

    // Unit normal along the line of centers; zero length has no direction
    let degenerate = !(distance > f64::EPSILON);
    let n = if degenerate {
        warn!(
            "coincident body centers at ({:.3}, {:.3}), resolving along +x",
            a.x.x, a.x.y
        );
        fallback_normal()
    } else {
        d / distance
    };
    let t = NVec2::new(-n.y, n.x);

    // Tangential parts pass through unchanged
    let tan_a = a.v.dot(&t);
    let tan_b = b.v.dot(&t);

    // Normal parts go through the 1-D elastic exchange
    let norm_a = a.v.dot(&n);
    let norm_b = b.v.dot(&n);
    let (ma, mb) = (a.m, b.m);
    let total = ma + mb;
    let norm_a_new = (norm_a * (ma - mb) + 2.0 * mb * norm_b) / total;
    let norm_b_new = (norm_b * (mb - ma) + 2.0 * ma * norm_a) / total;

    a.v = tan_a * t + norm_a_new * n;
    b.v = tan_b * t + norm_b_new * n;

    // Split the penetration evenly, a moves along +n and b along -n
    let push = 0.5 * overlap * n;
    a.x += push;
    b.x -= push;

    if degenerate {
        Contact::Degenerate { overlap }
    } else {
        Contact::Resolved { overlap }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn body(x: f64, y: f64, vx: f64, vy: f64, m: f64, r: f64) -> Body {
        Body::new(NVec2::new(x, y), NVec2::new(vx, vy), m, r)
    }

    #[test]
    fn equal_masses_swap_head_on() {
        let mut a = body(0.0, 0.0, 5.0, 0.0, 1.0, 10.0);
        let mut b = body(15.0, 0.0, -5.0, 0.0, 1.0, 10.0);
        let contact = resolve(&mut a, &mut b);
        assert_eq!(contact, Contact::Resolved { overlap: 5.0 });
        assert!((a.v.x + 5.0).abs() < TOL);
        assert!((b.v.x - 5.0).abs() < TOL);
        assert!(a.v.y.abs() < TOL && b.v.y.abs() < TOL);
    }

    #[test]
    fn overlap_is_split_evenly() {
        let mut a = body(0.0, 0.0, 0.0, 0.0, 1.0, 10.0);
        let mut b = body(15.0, 0.0, 0.0, 0.0, 3.0, 10.0);
        resolve(&mut a, &mut b);
        assert!((a.x.x + 2.5).abs() < TOL);
        assert!((b.x.x - 17.5).abs() < TOL);
        assert!((a.distance_to(&b) - 20.0).abs() < TOL);
    }

    #[test]
    fn touching_is_not_a_collision() {
        let mut a = body(0.0, 0.0, 5.0, 0.0, 1.0, 10.0);
        let mut b = body(20.0, 0.0, -5.0, 0.0, 1.0, 10.0);
        let (a0, b0) = (a.clone(), b.clone());
        assert_eq!(resolve(&mut a, &mut b), Contact::Separated);
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn oblique_hit_conserves_momentum_and_energy() {
        let mut a = body(0.0, 0.0, 30.0, 10.0, 2.0, 10.0);
        let mut b = body(12.0, 9.0, -20.0, 5.0, 5.0, 8.0);
        let p0 = a.momentum() + b.momentum();
        let e0 = a.kinetic_energy() + b.kinetic_energy();

        assert!(resolve(&mut a, &mut b).is_collision());

        let p1 = a.momentum() + b.momentum();
        let e1 = a.kinetic_energy() + b.kinetic_energy();
        assert!((p1 - p0).norm() < TOL, "momentum drift {:?}", p1 - p0);
        assert!((e1 - e0).abs() < TOL * e0, "energy drift {}", e1 - e0);
    }

    #[test]
    fn coincident_centers_stay_finite() {
        let mut a = body(50.0, 50.0, 1.0, 2.0, 1.0, 10.0);
        let mut b = body(50.0, 50.0, -3.0, 4.0, 2.0, 10.0);
        let contact = resolve(&mut a, &mut b);
        assert_eq!(contact, Contact::Degenerate { overlap: 20.0 });
        for v in [a.x, a.v, b.x, b.v] {
            assert!(v.iter().all(|c| c.is_finite()));
        }
        // pushed apart along the fallback normal
        assert!((a.x.x - 60.0).abs() < TOL);
        assert!((b.x.x - 40.0).abs() < TOL);
    }
}
