//! Departments of the bypass list.

use super::rule::{Rule, StationIndex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when creating a single department.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StationError {
    #[error("Station index can not be less than 1 (got {index})")]
    IndexBelowOne { index: StationIndex },
}

/// A department: a 1-based index paired with the rule applied there.
///
/// # Example
///
/// ```rust
/// use bypass::core::{Rule, Station, StationError};
///
/// let station = Station::new(1, Rule::unconditional(1, 2, 2)).unwrap();
/// assert_eq!(station.index(), 1);
///
/// let err = Station::new(0, Rule::unconditional(1, 2, 2)).unwrap_err();
/// assert_eq!(err, StationError::IndexBelowOne { index: 0 });
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    index: StationIndex,
    rule: Rule,
}

impl Station {
    pub fn new(index: StationIndex, rule: Rule) -> Result<Self, StationError> {
        if index < 1 {
            return Err(StationError::IndexBelowOne { index });
        }
        Ok(Self { index, rule })
    }

    pub fn index(&self) -> StationIndex {
        self.index
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn into_parts(self) -> (StationIndex, Rule) {
        (self.index, self.rule)
    }
}
