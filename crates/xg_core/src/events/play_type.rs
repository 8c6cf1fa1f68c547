//! # Play-Type Extractor
//!
//! Labels shots that came from a set piece.
//!
//! ## Algorithm
//! 1. Find every row whose `Type` is `SHOT`
//! 2. Look at the row immediately before it
//! 3. If that row's `Subtype` is `PENALTY` or `FREE KICK`, emit
//!    `(shot index, label)`; otherwise the shot is open play and is omitted
//!
//! A shot in the first row has no predecessor and fails with
//! [`XgError::OutOfRange`].

use crate::config::{ExtractionConfig, SubtypeMatching};
use crate::error::{Result, XgError};
use crate::events::record::{EventRecord, SHOT_TYPE};
use crate::features::PlayType;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PENALTY_SUBTYPE: &str = "PENALTY";
pub const FREE_KICK_SUBTYPE: &str = "FREE KICK";

/// Set piece a shot was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetPiece {
    Penalty,
    FreeKick,
}

impl SetPiece {
    pub fn from_subtype(subtype: &str, matching: SubtypeMatching) -> Option<Self> {
        let matches = |expected: &str| match matching {
            SubtypeMatching::Exact => subtype == expected,
            SubtypeMatching::CaseInsensitive => subtype.trim().eq_ignore_ascii_case(expected),
        };
        if matches(PENALTY_SUBTYPE) {
            Some(SetPiece::Penalty)
        } else if matches(FREE_KICK_SUBTYPE) {
            Some(SetPiece::FreeKick)
        } else {
            None
        }
    }

    /// Title-cased subtype, e.g. `"Free Kick"`.
    pub fn label(self) -> &'static str {
        match self {
            SetPiece::Penalty => "Penalty",
            SetPiece::FreeKick => "Free Kick",
        }
    }

    /// Model play-type column this set piece maps to.
    pub fn play_type(self) -> PlayType {
        match self {
            SetPiece::Penalty => PlayType::Penalty,
            SetPiece::FreeKick => PlayType::DirectFreeKick,
        }
    }
}

impl fmt::Display for SetPiece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A shot index paired with the set piece that preceded it.
pub type LabelledShot = (usize, SetPiece);

#[derive(Debug, Clone, Copy, Default)]
pub struct PlayTypeExtractor {
    matching: SubtypeMatching,
}

impl PlayTypeExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { matching: config.matching }
    }

    fn is_shot(&self, record: &EventRecord) -> bool {
        match self.matching {
            SubtypeMatching::Exact => record.is_shot(),
            SubtypeMatching::CaseInsensitive => {
                record.event_type.trim().eq_ignore_ascii_case(SHOT_TYPE)
            }
        }
    }

    /// Set-piece shots in ascending index order. The log is not modified.
    pub fn extract(&self, events: &[EventRecord]) -> Result<Vec<LabelledShot>> {
        let mut labelled = Vec::new();
        for (idx, record) in events.iter().enumerate() {
            if !self.is_shot(record) {
                continue;
            }
            let previous = idx
                .checked_sub(1)
                .and_then(|prev| events.get(prev))
                .ok_or(XgError::OutOfRange { index: idx })?;

            if let Some(set_piece) = SetPiece::from_subtype(&previous.subtype, self.matching) {
                log::debug!("shot {} follows a {}", idx, set_piece);
                labelled.push((idx, set_piece));
            }
        }
        log::debug!("{} set-piece shots in {} events", labelled.len(), events.len());
        Ok(labelled)
    }
}

/// Set-piece shots using exact, upper-case subtype matching.
pub fn extract_play_types(events: &[EventRecord]) -> Result<Vec<LabelledShot>> {
    PlayTypeExtractor::default().extract(events)
}

/// Play type of the shot at `index`; shots without a label are open play.
pub fn play_type_at(labels: &[LabelledShot], index: usize) -> PlayType {
    labels
        .iter()
        .find(|(idx, _)| *idx == index)
        .map(|(_, set_piece)| set_piece.play_type())
        .unwrap_or(PlayType::OpenPlay)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(event_type: &str, subtype: &str) -> EventRecord {
        EventRecord::new(event_type, subtype)
    }

    #[test]
    fn test_penalty_before_shot() {
        let log = vec![ev("PASS", "PENALTY"), ev("SHOT", "OPEN PLAY")];
        let labels = extract_play_types(&log).unwrap();
        assert_eq!(labels, vec![(1, SetPiece::Penalty)]);
        assert_eq!(labels[0].1.label(), "Penalty");
    }

    #[test]
    fn test_free_kick_label_is_title_cased() {
        let log = vec![ev("SET PIECE", "FREE KICK"), ev("SHOT", "ON TARGET-SAVED")];
        let labels = extract_play_types(&log).unwrap();
        assert_eq!(labels, vec![(1, SetPiece::FreeKick)]);
        assert_eq!(labels[0].1.to_string(), "Free Kick");
    }

    #[test]
    fn test_open_play_shots_omitted() {
        let log = vec![
            ev("SET PIECE", "KICK OFF"),
            ev("PASS", ""),
            ev("SHOT", "OFF TARGET-OUT"),
            ev("BALL OUT", ""),
            ev("SET PIECE", "GOAL KICK"),
            ev("SHOT", "ON TARGET-GOAL"),
        ];
        assert!(extract_play_types(&log).unwrap().is_empty());
    }

    #[test]
    fn test_ascending_order_mixed() {
        let log = vec![
            ev("SET PIECE", "KICK OFF"),
            ev("SET PIECE", "FREE KICK"),
            ev("SHOT", "OFF TARGET"),
            ev("PASS", ""),
            ev("SHOT", "BLOCKED"),
            ev("SET PIECE", "PENALTY"),
            ev("SHOT", "ON TARGET-GOAL"),
        ];
        let labels = extract_play_types(&log).unwrap();
        assert_eq!(labels, vec![(2, SetPiece::FreeKick), (6, SetPiece::Penalty)]);
    }

    #[test]
    fn test_shot_in_first_row_is_out_of_range() {
        let log = vec![ev("SHOT", "ON TARGET"), ev("PASS", "")];
        let err = extract_play_types(&log).unwrap_err();
        assert_eq!(err, XgError::OutOfRange { index: 0 });
    }

    #[test]
    fn test_empty_log() {
        assert!(extract_play_types(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_exact_matching_is_case_sensitive() {
        let log = vec![ev("SET PIECE", "Penalty"), ev("SHOT", ""), ev("PASS", "free kick"), ev("SHOT", "")];
        assert!(extract_play_types(&log).unwrap().is_empty());
    }

    #[test]
    fn test_case_insensitive_matching() {
        let extractor = PlayTypeExtractor::new(ExtractionConfig {
            matching: SubtypeMatching::CaseInsensitive,
        });
        let log = vec![ev("SET PIECE", "Penalty"), ev("shot", ""), ev("PASS", " free kick "), ev("SHOT", "")];
        let labels = extractor.extract(&log).unwrap();
        assert_eq!(labels, vec![(1, SetPiece::Penalty), (3, SetPiece::FreeKick)]);
    }

    #[test]
    fn test_input_not_mutated() {
        let log = vec![ev("PASS", "PENALTY"), ev("SHOT", "OPEN PLAY")];
        let before = log.clone();
        extract_play_types(&log).unwrap();
        assert_eq!(log, before);
    }

    #[test]
    fn test_play_type_lookup() {
        let labels = vec![(2, SetPiece::FreeKick), (6, SetPiece::Penalty)];
        assert_eq!(play_type_at(&labels, 2), PlayType::DirectFreeKick);
        assert_eq!(play_type_at(&labels, 6), PlayType::Penalty);
        assert_eq!(play_type_at(&labels, 4), PlayType::OpenPlay);
    }
}
