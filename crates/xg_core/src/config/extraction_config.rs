//! Play-type extraction settings

use serde::{Deserialize, Serialize};

/// How an event `Subtype` is compared against `PENALTY` / `FREE KICK`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubtypeMatching {
    /// Byte-for-byte, upper case only
    #[default]
    Exact,
    /// Trimmed and upper-cased before comparison
    CaseInsensitive,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ExtractionConfig {
    pub matching: SubtypeMatching,
}
