//! # Event Log
//!
//! Ordered match events as exported by Metrica (`Team`, `Type`, `Subtype`,
//! `Period`, `Start Frame`, ...). Only `Type` is required; the other columns
//! are kept when present and anything else in the file is ignored.
//!
//! Row order is meaningful: a shot's provenance is read from the row right
//! before it, so logs must be contiguous and chronological.

use crate::error::{Result, XgError};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

pub const SHOT_TYPE: &str = "SHOT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EventRecord {
    #[serde(rename = "Team", default)]
    pub team: Option<String>,
    #[serde(rename = "Type")]
    pub event_type: String,
    #[serde(rename = "Subtype", default)]
    pub subtype: String,
    #[serde(rename = "Period", default)]
    pub period: Option<u8>,
    #[serde(rename = "Start Frame", default)]
    pub start_frame: Option<u64>,
    #[serde(rename = "Start Time [s]", default)]
    pub start_time_s: Option<f64>,
    #[serde(rename = "From", default)]
    pub from: Option<String>,
    /// Normalized (0-1) along the pitch length
    #[serde(rename = "Start X", default)]
    pub start_x: Option<f64>,
    /// Normalized (0-1) across the pitch width
    #[serde(rename = "Start Y", default)]
    pub start_y: Option<f64>,
}

impl EventRecord {
    pub fn new(event_type: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self { event_type: event_type.into(), subtype: subtype.into(), ..Self::default() }
    }

    pub fn with_start(mut self, x: f64, y: f64) -> Self {
        self.start_x = Some(x);
        self.start_y = Some(y);
        self
    }

    pub fn is_shot(&self) -> bool {
        self.event_type == SHOT_TYPE
    }

    /// Start location in midfield-centred meters, for a pitch of the given size.
    ///
    /// `None` when the export has no start coordinates for this row.
    pub fn start_position_m(&self, length_m: f64, width_m: f64) -> Option<(f64, f64)> {
        match (self.start_x, self.start_y) {
            (Some(x), Some(y)) => Some(((x - 0.5) * length_m, (y - 0.5) * width_m)),
            _ => None,
        }
    }
}

/// An ordered, read-only sequence of events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    pub fn new(records: Vec<EventRecord>) -> Self {
        Self { records }
    }

    /// Parse CSV with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
        let mut records = Vec::new();
        for (row, result) in reader.deserialize::<EventRecord>().enumerate() {
            let record = result.map_err(|e| XgError::EventLog(format!("row {}: {}", row, e)))?;
            records.push(record);
        }
        log::debug!("Parsed {} events", records.len());
        Ok(Self { records })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| XgError::EventLog(format!("{}: {}", path.display(), e)))?;
        let log = Self::from_reader(file)?;
        log::info!("Loaded {} events from {}", log.len(), path.display());
        Ok(log)
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&EventRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Indices of `SHOT` rows, ascending.
    pub fn shot_indices(&self) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.is_shot())
            .map(|(idx, _)| idx)
            .collect()
    }
}

impl AsRef<[EventRecord]> for EventLog {
    fn as_ref(&self) -> &[EventRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const METRICA_SAMPLE: &str = "\
Team,Type,Subtype,Period,Start Frame,Start Time [s],End Frame,End Time [s],From,To,Start X,Start Y,End X,End Y
Away,SET PIECE,KICK OFF,1,1,0.04,0,0.0,Player23,,,,,
Away,PASS,,1,1,0.04,3,0.12,Player23,Player20,0.5,0.5,0.4,0.51
Home,SET PIECE,PENALTY,1,5000,200.0,5000,200.0,Player9,,0.9,0.5,,
Home,SHOT,ON TARGET-GOAL,1,5010,200.4,5030,201.2,Player9,,0.9,0.5,1.0,0.52
";

    #[test]
    fn test_parse_metrica_layout() {
        let log = EventLog::from_reader(METRICA_SAMPLE.as_bytes()).unwrap();
        assert_eq!(log.len(), 4);

        let first = log.get(0).unwrap();
        assert_eq!(first.team.as_deref(), Some("Away"));
        assert_eq!(first.event_type, "SET PIECE");
        assert_eq!(first.subtype, "KICK OFF");
        assert_eq!(first.start_x, None);

        assert_eq!(log.get(1).unwrap().subtype, "");
        assert_eq!(log.get(2).unwrap().subtype, "PENALTY");
        assert_eq!(log.get(3).unwrap().start_frame, Some(5010));
        assert_eq!(log.shot_indices(), vec![3]);
    }

    #[test]
    fn test_minimal_columns() {
        let log = EventLog::from_reader("Type,Subtype\nPASS,PENALTY\nSHOT,OPEN PLAY\n".as_bytes())
            .unwrap();
        assert_eq!(
            log.records(),
            &[EventRecord::new("PASS", "PENALTY"), EventRecord::new("SHOT", "OPEN PLAY")]
        );
    }

    #[test]
    fn test_missing_type_column_is_error() {
        let err = EventLog::from_reader("Team,Subtype\nHome,PENALTY\n".as_bytes()).unwrap_err();
        assert!(matches!(err, XgError::EventLog(_)));
    }

    #[test]
    fn test_start_position_is_midfield_centred() {
        let record = EventRecord::new("SHOT", "").with_start(0.9, 0.5);
        let (x, y) = record.start_position_m(106.0, 68.0).unwrap();
        assert!((x - 42.4).abs() < 1e-9);
        assert!(y.abs() < 1e-12);
        assert_eq!(EventRecord::new("SHOT", "").start_position_m(106.0, 68.0), None);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", METRICA_SAMPLE).unwrap();
        let log = EventLog::from_path(file.path()).unwrap();
        assert_eq!(log.len(), 4);

        let err = EventLog::from_path("/nonexistent/events.csv").unwrap_err();
        assert!(matches!(err, XgError::EventLog(_)));
    }
}
