//! # Event Module
//!
//! - `record` - Event rows and CSV event logs
//! - `play_type` - Set-piece labelling of shots

pub mod play_type;
pub mod record;

pub use play_type::{
    extract_play_types, play_type_at, LabelledShot, PlayTypeExtractor, SetPiece,
    FREE_KICK_SUBTYPE, PENALTY_SUBTYPE,
};
pub use record::{EventLog, EventRecord, SHOT_TYPE};
