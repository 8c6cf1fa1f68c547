//! Shot coordinate conventions
//!
//! **Goal-centred** (event data already projected onto the goal):
//! - x: distance out from the goal line, 0 = on the line
//! - y: lateral offset from the goal centre
//!
//! **Midfield-centred** (Metrica-style pitch coordinates):
//! - x: signed offset from the halfway line, either half of the pitch
//! - y: lateral offset from the centre line of the pitch
//!
//! Midfield-centred x is reflected by absolute value so that both halves
//! attack the same goal, then rebased onto the goal line.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateConvention {
    #[default]
    GoalCentered,
    MidfieldCentered,
}

impl CoordinateConvention {
    /// Convert an incoming x coordinate into goal-relative meters.
    #[inline]
    pub fn to_goal_relative_x(self, x: f64, half_length_m: f64) -> f64 {
        match self {
            CoordinateConvention::GoalCentered => x,
            CoordinateConvention::MidfieldCentered => half_length_m - x.abs(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CoordinateConvention::GoalCentered => "goal_centered",
            CoordinateConvention::MidfieldCentered => "midfield_centered",
        }
    }
}
