//! Start conditions and driver settings
//!
//! `BodyParams` is what an operator types in for one body
//! (mass, position, speed, heading in degrees, radius).
//! `Parameters` holds the driver-side settings:
//! - fixed step size and end time for headless runs,
//! - the cap applied to measured frame deltas,
//! - whether the viewer starts the simulation right away

use std::str::FromStr;

use crate::error::{Result, SimError};
use crate::simulation::states::{Body, NVec2};

/// Field names, in the order `BodyParams::from_str` expects them
pub const BODY_FIELDS: [&str; 6] = ["mass", "x", "y", "speed", "angle", "radius"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyParams {
    pub mass: f64,
    pub x: f64, // center x, arena coordinates
    pub y: f64, // center y, arena coordinates
    pub speed: f64, // units per second
    pub angle_deg: f64, // heading, degrees from +x toward +y
    pub radius: f64,
}

impl BodyParams {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let values = [
            self.mass,
            self.x,
            self.y,
            self.speed,
            self.angle_deg,
            self.radius,
        ];
        for (name, value) in BODY_FIELDS.iter().zip(values) {
            if !value.is_finite() {
                return Err(SimError::invalid(*name, "must be finite"));
            }
        }
        if self.mass <= 0.0 {
            return Err(SimError::invalid("mass", "must be > 0"));
        }
        if self.radius <= 0.0 {
            return Err(SimError::invalid("radius", "must be > 0"));
        }
        Ok(())
    }

    /// Velocity vector from speed and heading
    pub fn velocity(&self) -> NVec2 {
        let a = self.angle_deg.to_radians();
        NVec2::new(self.speed * a.cos(), self.speed * a.sin())
    }

    pub fn to_body(&self) -> Body {
        Body::new(NVec2::new(self.x, self.y), self.velocity(), self.mass, self.radius)
    }
}

impl FromStr for BodyParams {
    type Err = SimError;

    /// Parse `"mass,x,y,speed,angle,radius"`
    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        if fields.len() != BODY_FIELDS.len() {
            return Err(SimError::Parse {
                field: BODY_FIELDS.join(","),
                value: s.to_string(),
                source: None,
            });
        }

        let mut values = [0.0_f64; 6];
        for ((slot, name), text) in values.iter_mut().zip(BODY_FIELDS).zip(&fields) {
            *slot = text.parse::<f64>().map_err(|e| SimError::Parse {
                field: name.to_string(),
                value: text.to_string(),
                source: Some(e),
            })?;
        }

        let [mass, x, y, speed, angle_deg, radius] = values;
        Ok(Self {
            mass,
            x,
            y,
            speed,
            angle_deg,
            radius,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64, // fixed step size for headless runs
    pub t_end: f64, // headless end time
    pub max_dt: f64, // largest frame delta handed to tick
    pub autostart: bool, // start on launch instead of waiting for the operator
}

impl Parameters {
    /// Clamp a measured frame delta into [0, max_dt]
    pub fn frame_dt(&self, measured: f64) -> f64 {
        if measured.is_nan() {
            return 0.0;
        }
        measured.max(0.0).min(self.max_dt)
    }

    /// Number of fixed steps a headless run takes to reach `t_end`
    pub fn steps(&self) -> usize {
        (self.t_end / self.h0).ceil() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_fields() {
        let p: BodyParams = "1.5, 10, 20, 100, 90, 5".parse().unwrap();
        assert_eq!(p.mass, 1.5);
        assert_eq!((p.x, p.y), (10.0, 20.0));
        assert_eq!(p.radius, 5.0);
        let v = p.velocity();
        assert!(v.x.abs() < 1e-9);
        assert!((v.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn bad_field_is_named() {
        let err = "1, 2, 3, fast, 0, 5".parse::<BodyParams>().unwrap_err();
        match err {
            SimError::Parse { field, value, .. } => {
                assert_eq!(field, "speed");
                assert_eq!(value, "fast");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn wrong_field_count() {
        assert!("1, 2, 3".parse::<BodyParams>().is_err());
    }

    #[test]
    fn non_positive_mass_and_radius_rejected() {
        let mut p: BodyParams = "1, 0, 0, 0, 0, 1".parse().unwrap();
        assert!(p.validate().is_ok());
        p.mass = 0.0;
        assert!(p.validate().unwrap_err().to_string().contains("mass"));
        p.mass = 1.0;
        p.radius = -2.0;
        assert!(p.validate().unwrap_err().to_string().contains("radius"));
    }

    #[test]
    fn infinite_values_rejected() {
        let p: BodyParams = "1, inf, 0, 0, 0, 1".parse().unwrap();
        assert!(p.validate().is_err());
    }

    #[test]
    fn frame_dt_is_clamped() {
        let params = Parameters {
            h0: 0.01,
            t_end: 1.0,
            max_dt: 0.1,
            autostart: true,
        };
        assert_eq!(params.frame_dt(0.05), 0.05);
        assert_eq!(params.frame_dt(3.0), 0.1);
        assert_eq!(params.frame_dt(-1.0), 0.0);
        assert_eq!(params.frame_dt(f64::NAN), 0.0);
        assert_eq!(params.steps(), 100);
    }
}
