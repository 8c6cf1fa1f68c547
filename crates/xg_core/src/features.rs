//! # Shot Features
//!
//! The row handed to the probability model. Column names and order are the
//! ones the classifier was trained on; the model reads columns by position,
//! so [`FEATURE_NAMES`] and [`FeatureVector::values`] must never diverge.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of model input columns.
pub const FEATURE_COUNT: usize = 10;

/// Model input columns, in order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "DistanceToGoal",
    "ShotAngle",
    "Number_Intervening_Opponents",
    "Pressure",
    "BodyPart_Foot",
    "BodyPart_Head",
    "BodyPart_Other",
    "play_type_Direct freekick",
    "play_type_Open Play",
    "play_type_Penalty",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    #[default]
    Foot,
    Head,
    Other,
}

impl BodyPart {
    /// One-hot encoding as (foot, head, other).
    pub fn one_hot(self) -> [f64; 3] {
        match self {
            BodyPart::Foot => [1.0, 0.0, 0.0],
            BodyPart::Head => [0.0, 1.0, 0.0],
            BodyPart::Other => [0.0, 0.0, 1.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlayType {
    DirectFreeKick,
    #[default]
    OpenPlay,
    Penalty,
}

impl PlayType {
    /// One-hot encoding as (direct free kick, open play, penalty).
    pub fn one_hot(self) -> [f64; 3] {
        match self {
            PlayType::DirectFreeKick => [1.0, 0.0, 0.0],
            PlayType::OpenPlay => [0.0, 1.0, 0.0],
            PlayType::Penalty => [0.0, 0.0, 1.0],
        }
    }
}

/// Situational flags of a shot, besides its location.
///
/// The default is an open-play foot shot under pressure with nobody between
/// the shooter and the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotContext {
    pub intervening_opponents: u32,
    pub pressure: bool,
    pub body_part: BodyPart,
    pub play_type: PlayType,
}

impl Default for ShotContext {
    fn default() -> Self {
        Self {
            intervening_opponents: 0,
            pressure: true,
            body_part: BodyPart::Foot,
            play_type: PlayType::OpenPlay,
        }
    }
}

impl ShotContext {
    pub fn with_opponents(mut self, count: u32) -> Self {
        self.intervening_opponents = count;
        self
    }

    pub fn with_pressure(mut self, pressure: bool) -> Self {
        self.pressure = pressure;
        self
    }

    pub fn with_body_part(mut self, body_part: BodyPart) -> Self {
        self.body_part = body_part;
        self
    }

    pub fn with_play_type(mut self, play_type: PlayType) -> Self {
        self.play_type = play_type;
        self
    }
}

/// One model input row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub distance_to_goal: f64,
    pub shot_angle: f64,
    pub intervening_opponents: f64,
    pub pressure: f64,
    pub body_part_foot: f64,
    pub body_part_head: f64,
    pub body_part_other: f64,
    pub play_type_direct_freekick: f64,
    pub play_type_open_play: f64,
    pub play_type_penalty: f64,
}

impl FeatureVector {
    pub fn new(distance_to_goal: f64, shot_angle: f64, context: &ShotContext) -> Self {
        let [foot, head, other] = context.body_part.one_hot();
        let [freekick, open_play, penalty] = context.play_type.one_hot();
        Self {
            distance_to_goal,
            shot_angle,
            intervening_opponents: f64::from(context.intervening_opponents),
            pressure: if context.pressure { 1.0 } else { 0.0 },
            body_part_foot: foot,
            body_part_head: head,
            body_part_other: other,
            play_type_direct_freekick: freekick,
            play_type_open_play: open_play,
            play_type_penalty: penalty,
        }
    }

    pub fn names() -> &'static [&'static str; FEATURE_COUNT] {
        &FEATURE_NAMES
    }

    /// Values in [`FEATURE_NAMES`] order.
    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        [
            self.distance_to_goal,
            self.shot_angle,
            self.intervening_opponents,
            self.pressure,
            self.body_part_foot,
            self.body_part_head,
            self.body_part_other,
            self.play_type_direct_freekick,
            self.play_type_open_play,
            self.play_type_penalty,
        ]
    }

    /// `(name, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.values())
    }

    /// Value of a named column.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={:.4}", name, value)?;
        }
        Ok(())
    }
}
