//! Violations found in a station map.

use crate::core::{Seal, StationIndex};
use thiserror::Error;

/// A single reason a station map can not back a bypass list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StationMapViolation {
    #[error("At least 2 stations are required (got {count})")]
    TooFewStations { count: usize },

    #[error("Station index {index} is outside 1..={count}")]
    IndexOutOfRange { index: StationIndex, count: usize },

    #[error("Station {station} points to station {target}, outside 1..={count}")]
    TargetOutOfRange {
        station: StationIndex,
        target: StationIndex,
        count: usize,
    },

    #[error("Terminal station {station} points to station {target}, below 1")]
    TerminalTargetBelowOne {
        station: StationIndex,
        target: StationIndex,
    },

    #[error("Station {station} references seal {seal}, below 1")]
    SealBelowOne { station: StationIndex, seal: Seal },
}
