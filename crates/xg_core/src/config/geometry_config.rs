//! Geometry Configuration

use crate::error::{Result, XgError};
use crate::geometry::CoordinateConvention;
use crate::pitch_constants::{field, goal};
use serde::{Deserialize, Serialize};

/// Shot geometry parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeometryConfig {
    /// How incoming shot coordinates are measured (default: goal-centred)
    pub convention: CoordinateConvention,
    /// Goal mouth width in meters (default: 7.32)
    pub goal_width_m: f64,
    /// Halfway line to goal line distance, used by the midfield convention (default: 53.0)
    pub half_length_m: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            convention: CoordinateConvention::GoalCentered,
            goal_width_m: goal::WIDTH_M,
            half_length_m: field::HALF_LENGTH_M,
        }
    }
}

impl GeometryConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.goal_width_m.is_finite() && self.goal_width_m > 0.0) {
            return Err(XgError::Config(format!(
                "goal_width_m must be positive, got {}",
                self.goal_width_m
            )));
        }
        if !(self.half_length_m.is_finite() && self.half_length_m > 0.0) {
            return Err(XgError::Config(format!(
                "half_length_m must be positive, got {}",
                self.half_length_m
            )));
        }
        Ok(())
    }
}
