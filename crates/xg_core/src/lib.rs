//! # xg_core - Expected Goals Shot Model
//!
//! Scores football shots against an externally trained classifier and draws
//! pitch diagrams for shot maps.
//!
//! ## Pipeline
//! - event log -> [`events::PlayTypeExtractor`] (set-piece labels)
//! - shot location -> [`geometry::ShotGeometry`] (distance, angle)
//! - [`features::FeatureVector`] -> [`model::ProbabilityModel`] -> xG
//!
//! [`pitch::PitchRenderer`] is an independent consumer used only for
//! visualisation.

pub mod config;
pub mod error;
pub mod estimator;
pub mod events;
pub mod features;
pub mod geometry;
pub mod model;
pub mod pitch;
pub mod pitch_constants;

pub use config::{ExtractionConfig, GeometryConfig, PitchConfig, PitchView, SubtypeMatching, XgConfig};
pub use error::{Result, XgError};
pub use estimator::{calculate_xg, check_schema, XgEstimator};
pub use events::{extract_play_types, EventLog, EventRecord, PlayTypeExtractor, SetPiece};
pub use features::{BodyPart, FeatureVector, PlayType, ShotContext, FEATURE_NAMES};
pub use geometry::{
    distance, distance_midfield, shot_angle, shot_angle_midfield, CoordinateConvention,
    ShotGeometry,
};
pub use model::{LogisticModel, ProbabilityModel};
pub use pitch::{create_pitch, Figure, PitchRenderer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
