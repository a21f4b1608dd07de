//! Builder for constructing bypass lists.

use crate::builder::error::BuildError;
use crate::core::{Rule, Station, StationIndex};
use crate::engine::BypassList;

/// Builder for constructing bypass lists with a fluent API.
///
/// # Example
///
/// ```rust
/// use bypass::builder::BypassListBuilder;
/// use bypass::core::Rule;
///
/// let bypass = BypassListBuilder::new()
///     .station(1, Rule::unconditional(1, 2, 2))?
///     .station(2, Rule::conditional(1, (3, 1, 1), (2, 2, 1)))?
///     .build()?;
///
/// assert_eq!(bypass.station_count(), 2);
/// # Ok::<(), bypass::builder::BuildError>(())
/// ```
#[derive(Debug, Default)]
pub struct BypassListBuilder {
    stations: Vec<Station>,
}

impl BypassListBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a department.
    /// Returns an error if the index is below 1.
    pub fn station(mut self, index: StationIndex, rule: Rule) -> Result<Self, BuildError> {
        self.stations.push(Station::new(index, rule)?);
        Ok(self)
    }

    /// Add a pre-built department.
    pub fn add_station(mut self, station: Station) -> Self {
        self.stations.push(station);
        self
    }

    /// Add multiple departments at once.
    pub fn stations(mut self, stations: impl IntoIterator<Item = Station>) -> Self {
        self.stations.extend(stations);
        self
    }

    /// Build the bypass list.
    /// Returns an error on duplicate indices or an invalid station map.
    pub fn build(self) -> Result<BypassList, BuildError> {
        BypassList::from_stations(self.stations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SealSet, StationError};
    use crate::validation::StationMapViolation;

    #[test]
    fn empty_builder_is_rejected() {
        let result = BypassListBuilder::new().build();

        assert!(matches!(
            result,
            Err(BuildError::InvalidStations { ref violations })
                if violations == &[StationMapViolation::TooFewStations { count: 0 }]
        ));
    }

    #[test]
    fn zero_index_fails_fast() {
        let result = BypassListBuilder::new().station(0, Rule::unconditional(1, 1, 1));

        assert!(matches!(
            result,
            Err(BuildError::InvalidStation(StationError::IndexBelowOne { index: 0 }))
        ));
    }

    #[test]
    fn fluent_api_builds_bypass_list() {
        let bypass = BypassListBuilder::new()
            .station(1, Rule::unconditional(1, 1, 2))
            .unwrap()
            .station(2, Rule::unconditional(2, 2, 1))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(bypass.uncrossed_seals(1), (Some(false), Some(vec![SealSet::new()])));
    }

    #[test]
    fn add_multiple_stations() {
        let stations = vec![
            Station::new(1, Rule::unconditional(1, 2, 2)).unwrap(),
            Station::new(2, Rule::unconditional(2, 2, 1)).unwrap(),
        ];

        let bypass = BypassListBuilder::new()
            .stations(stations)
            .add_station(Station::new(3, Rule::unconditional(1, 2, 1)).unwrap())
            .build()
            .unwrap();

        assert_eq!(bypass.station_count(), 3);
        assert!(bypass.loop_detected());
    }

    #[test]
    fn duplicate_station_is_rejected() {
        let result = BypassListBuilder::new()
            .station(1, Rule::unconditional(1, 2, 2))
            .unwrap()
            .station(1, Rule::unconditional(2, 2, 1))
            .unwrap()
            .build();

        assert!(matches!(
            result,
            Err(BuildError::DuplicateStation { index: 1 })
        ));
    }
}
