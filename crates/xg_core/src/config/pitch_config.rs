//! Pitch diagram configuration

use crate::error::{Result, XgError};
use crate::pitch_constants::{field, markings};
use serde::{Deserialize, Serialize};

/// Portion of the pitch visible in the figure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PitchView {
    #[default]
    Full,
    /// Halfway line to the right-hand goal line
    AttackingHalf,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PitchConfig {
    /// Field length in meters (default: 106)
    pub length_m: f64,
    /// Field width in meters (default: 68)
    pub width_m: f64,
    /// Figure width in pixels (default: 1200)
    pub figure_width_px: u32,
    /// Figure height in pixels (default: 800)
    pub figure_height_px: u32,
    /// Padding around the field, in meters
    pub margin_m: f64,
    pub face_color: String,
    pub line_color: String,
    pub shot_color: String,
    pub view: PitchView,
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            length_m: field::LENGTH_M,
            width_m: field::WIDTH_M,
            figure_width_px: 1200,
            figure_height_px: 800,
            margin_m: 2.0,
            face_color: "mediumseagreen".to_string(),
            line_color: "white".to_string(),
            shot_color: "crimson".to_string(),
            view: PitchView::Full,
        }
    }
}

impl PitchConfig {
    pub fn with_field_size(length_m: f64, width_m: f64) -> Self {
        Self { length_m, width_m, ..Self::default() }
    }

    pub fn validate(&self) -> Result<()> {
        // The boxes are drawn at fixed real-world sizes, so the field must hold them.
        let min_length = 2.0 * markings::PENALTY_AREA_LENGTH_M;
        let min_width = 2.0 * markings::PENALTY_AREA_HALF_WIDTH_M;
        if !(self.length_m.is_finite() && self.length_m > min_length) {
            return Err(XgError::Config(format!(
                "length_m must exceed {}, got {}",
                min_length, self.length_m
            )));
        }
        if !(self.width_m.is_finite() && self.width_m > min_width) {
            return Err(XgError::Config(format!(
                "width_m must exceed {}, got {}",
                min_width, self.width_m
            )));
        }
        if self.figure_width_px == 0 || self.figure_height_px == 0 {
            return Err(XgError::Config("figure size must be non-zero".to_string()));
        }
        if !(self.margin_m.is_finite() && self.margin_m >= 0.0) {
            return Err(XgError::Config(format!(
                "margin_m must be non-negative, got {}",
                self.margin_m
            )));
        }
        Ok(())
    }
}
