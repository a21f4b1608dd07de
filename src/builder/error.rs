//! Errors raised while assembling a bypass list.

use crate::core::{StationError, StationIndex};
use crate::validation::StationMapViolation;
use thiserror::Error;

/// Errors that can occur when building a bypass list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Station map is invalid: {}", summarize(.violations))]
    InvalidStations { violations: Vec<StationMapViolation> },

    #[error("Station {index} is defined more than once")]
    DuplicateStation { index: StationIndex },

    #[error(transparent)]
    InvalidStation(#[from] StationError),
}

fn summarize(violations: &[StationMapViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
