//! Bypass list that walks its departments once and answers many queries.

use crate::builder::BuildError;
use crate::core::{Rule, SealSet, Station, StationIndex, StationMap};
use crate::engine::query::QueryResult;
use crate::engine::walk::WalkOutcome;
use crate::validation::validate;
use std::collections::btree_map::Entry;
use std::sync::OnceLock;
use stillwater::validation::Validation;
use tracing::warn;

/// A validated set of departments plus the memoized result of walking them.
///
/// The walk is run by the first query, on whichever thread issues it. Other
/// threads querying at the same time block until it is done; every later
/// query reads the frozen result without locking. `OnceLock` publishes the
/// result with release ordering and reads its completion state with acquire
/// ordering, so a caller that sees the walk as completed also sees the whole
/// visit log.
///
/// # Example
///
/// ```rust
/// use bypass::core::{Rule, SealSet, StationMap};
/// use bypass::engine::{BypassList, QueryResult};
///
/// let mut stations = StationMap::new();
/// stations.insert(1, Rule::unconditional(1, 2, 2));
/// stations.insert(2, Rule::unconditional(2, 2, 1));
///
/// let bypass = BypassList::new(stations).expect("stations are valid");
///
/// assert_eq!(
///     bypass.query(1),
///     QueryResult::Resolved {
///         loop_detected: false,
///         snapshots: Some(&[SealSet::from([1])][..]),
///     }
/// );
/// assert_eq!(bypass.query(0), QueryResult::Invalid);
/// ```
#[derive(Debug)]
pub struct BypassList {
    stations: StationMap,
    outcome: OnceLock<WalkOutcome>,
}

impl BypassList {
    /// Build a bypass list, or `None` if the stations are malformed.
    ///
    /// Use [`try_new`](Self::try_new) to learn what was wrong.
    pub fn new(stations: StationMap) -> Option<Self> {
        Self::try_new(stations).ok()
    }

    /// Build a bypass list, reporting every problem with the stations.
    pub fn try_new(stations: StationMap) -> Result<Self, BuildError> {
        match validate(&stations) {
            Validation::Success(_) => Ok(Self {
                stations,
                outcome: OnceLock::new(),
            }),
            Validation::Failure(errors) => {
                let violations: Vec<_> = errors.iter().cloned().collect();
                warn!(
                    count = violations.len(),
                    first = %violations[0],
                    "rejected station map"
                );
                Err(BuildError::InvalidStations { violations })
            }
        }
    }

    /// Build a bypass list from individual departments.
    ///
    /// Two departments sharing an index are rejected before the map is
    /// validated.
    pub fn from_stations<I>(stations: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = Station>,
    {
        let mut map = StationMap::new();
        for station in stations {
            let (index, rule) = station.into_parts();
            match map.entry(index) {
                Entry::Vacant(slot) => {
                    slot.insert(rule);
                }
                Entry::Occupied(_) => {
                    warn!(index, "duplicate station");
                    return Err(BuildError::DuplicateStation { index });
                }
            }
        }
        Self::try_new(map)
    }

    /// Seals the visitor held on leaving `station_to_exit`.
    ///
    /// Runs the walk if no caller has yet. The loop flag in every resolved
    /// answer is the outcome of the whole walk, not of the one department.
    pub fn query(&self, station_to_exit: StationIndex) -> QueryResult<'_> {
        if !self.contains(station_to_exit) {
            return QueryResult::Invalid;
        }
        let outcome = self.outcome();
        QueryResult::Resolved {
            loop_detected: outcome.loop_detected(),
            snapshots: outcome.snapshots(station_to_exit),
        }
    }

    /// Owned form of [`query`](Self::query): `(loop_detected, snapshots)`.
    ///
    /// Both are `None` iff `station_to_exit` is outside `1..=N`. The returned
    /// sets are copies; changing them never affects later answers.
    pub fn uncrossed_seals(
        &self,
        station_to_exit: StationIndex,
    ) -> (Option<bool>, Option<Vec<SealSet>>) {
        self.query(station_to_exit).into_owned()
    }

    /// The walk result, running the walk first if needed.
    pub fn outcome(&self) -> &WalkOutcome {
        self.outcome.get_or_init(|| WalkOutcome::run(&self.stations))
    }

    pub fn loop_detected(&self) -> bool {
        self.outcome().loop_detected()
    }

    /// Whether the walk has already run. Never triggers it.
    pub fn walk_completed(&self) -> bool {
        self.outcome.get().is_some()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn rule(&self, station: StationIndex) -> Option<&Rule> {
        self.stations.get(&station)
    }

    pub fn stations(&self) -> &StationMap {
        &self.stations
    }

    fn contains(&self, station: StationIndex) -> bool {
        (1..=self.stations.len()).contains(&station)
    }
}
