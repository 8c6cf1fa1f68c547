//! Pitch dimensions used by the shot geometry and the pitch diagram.
//!
//! All values are in meters.

pub mod field {
    /// Default field length in meters
    pub const LENGTH_M: f64 = 106.0;
    /// Default field width in meters
    pub const WIDTH_M: f64 = 68.0;
    /// Distance from the halfway line to either goal line.
    ///
    /// Midfield-centred shot coordinates are rebased against this value.
    pub const HALF_LENGTH_M: f64 = 53.0;
    /// Center circle radius (meters)
    pub const CENTER_CIRCLE_RADIUS_M: f64 = 9.15;
}

pub mod goal {
    /// Goal width in meters (FIFA standard)
    pub const WIDTH_M: f64 = 7.32;
    /// Goal half-width
    pub const HALF_WIDTH_M: f64 = WIDTH_M / 2.0;
}

pub mod markings {
    /// Penalty area depth from the goal line
    pub const PENALTY_AREA_LENGTH_M: f64 = 16.5;
    /// Penalty area half-width (either side of the goal centre)
    pub const PENALTY_AREA_HALF_WIDTH_M: f64 = 20.15;
    /// Six-yard box depth from the goal line
    pub const SIX_YARD_LENGTH_M: f64 = 5.5;
    /// Six-yard box half-width
    pub const SIX_YARD_HALF_WIDTH_M: f64 = 9.0;
    /// Penalty spot distance from goal line (meters)
    pub const PENALTY_SPOT_M: f64 = 11.0;
    /// Radius used to draw the centre and penalty spots
    pub const SPOT_RADIUS_M: f64 = 0.8;
    /// Penalty arc radius (same as the centre circle)
    pub const PENALTY_ARC_RADIUS_M: f64 = 9.15;
    /// Left penalty arc sweep, degrees counter-clockwise
    pub const LEFT_ARC_DEG: (f64, f64) = (310.0, 50.0);
    /// Right penalty arc sweep, degrees counter-clockwise
    pub const RIGHT_ARC_DEG: (f64, f64) = (130.0, 230.0);
}
