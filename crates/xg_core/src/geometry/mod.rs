//! # Shot Geometry
//!
//! Distance to the goal centre and the angle subtended by the goal mouth.
//!
//! Both features share one implementation; the [`CoordinateConvention`]
//! only decides how the incoming x coordinate is rebased before the formulas
//! run.
//!
//! ## Angle
//! `atan(w·x / (x² + y² − (w/2)²))` with `w` the goal width. A negative
//! result is shifted by π so shots close to the goal line get the obtuse angle.
//! The formula is singular on the circle `x² + y² = (w/2)²`; that case is a
//! [`XgError::Domain`].

mod convention;

pub use convention::CoordinateConvention;

use crate::config::GeometryConfig;
use crate::error::{Result, XgError};
use std::f64::consts::PI;

/// Shot geometry for one coordinate convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotGeometry {
    config: GeometryConfig,
}

impl Default for ShotGeometry {
    fn default() -> Self {
        Self::new(GeometryConfig::default())
    }
}

impl ShotGeometry {
    pub fn new(config: GeometryConfig) -> Self {
        Self { config }
    }

    pub fn goal_centered() -> Self {
        Self::with_convention(CoordinateConvention::GoalCentered)
    }

    pub fn midfield_centered() -> Self {
        Self::with_convention(CoordinateConvention::MidfieldCentered)
    }

    pub fn with_convention(convention: CoordinateConvention) -> Self {
        Self::new(GeometryConfig { convention, ..GeometryConfig::default() })
    }

    pub fn convention(&self) -> CoordinateConvention {
        self.config.convention
    }

    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    #[inline]
    fn goal_relative_x(&self, x: f64) -> f64 {
        self.config.convention.to_goal_relative_x(x, self.config.half_length_m)
    }

    /// Euclidean distance from the shot to the goal centre, in meters.
    pub fn distance(&self, x: f64, y: f64) -> f64 {
        let x = self.goal_relative_x(x);
        (x * x + y * y).sqrt()
    }

    /// Angle subtended by the goal mouth, in radians.
    pub fn shot_angle(&self, x: f64, y: f64) -> Result<f64> {
        if !x.is_finite() || !y.is_finite() {
            return Err(XgError::Domain { x, y, reason: "non-finite coordinate" });
        }
        let gx = self.goal_relative_x(x);
        let width = self.config.goal_width_m;
        let half = width / 2.0;
        let denom = gx * gx + y * y - half * half;
        if denom == 0.0 {
            return Err(XgError::Domain { x, y, reason: "shot lies on the goal-width circle" });
        }

        // On the goal line the quotient is a signed zero: inside the posts the
        // mouth spans a straight angle, outside it spans nothing.
        if gx == 0.0 {
            return Ok(if denom < 0.0 { PI } else { 0.0 });
        }

        let angle = (width * gx / denom).atan();
        Ok(if angle < 0.0 { angle + PI } else { angle })
    }

    /// `(distance, angle)` in the order the shot model consumes them.
    pub fn features(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let angle = self.shot_angle(x, y)?;
        Ok((self.distance(x, y), angle))
    }
}

/// Distance for goal-centred coordinates.
pub fn distance(x: f64, y: f64) -> f64 {
    ShotGeometry::goal_centered().distance(x, y)
}

/// Shot angle for goal-centred coordinates.
pub fn shot_angle(x: f64, y: f64) -> Result<f64> {
    ShotGeometry::goal_centered().shot_angle(x, y)
}

/// Distance for midfield-centred coordinates.
pub fn distance_midfield(x: f64, y: f64) -> f64 {
    ShotGeometry::midfield_centered().distance(x, y)
}

/// Shot angle for midfield-centred coordinates.
pub fn shot_angle_midfield(x: f64, y: f64) -> Result<f64> {
    ShotGeometry::midfield_centered().shot_angle(x, y)
}
