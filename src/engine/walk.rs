//! The single deterministic walk through the departments.

use crate::core::{SealSet, StationIndex, StationMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Distinct seal snapshots observed at each department, in order of first
/// occurrence.
pub type VisitLog = BTreeMap<StationIndex, Vec<SealSet>>;

/// One step of the walk: the seals as the visitor left `station`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub station: StationIndex,
    pub seals: SealSet,
}

/// Frozen result of the walk.
///
/// # Example
///
/// ```rust
/// use bypass::core::{Rule, SealSet, StationMap};
/// use bypass::engine::WalkOutcome;
///
/// let mut stations = StationMap::new();
/// stations.insert(1, Rule::unconditional(1, 2, 2));
/// stations.insert(2, Rule::unconditional(2, 2, 1));
///
/// let outcome = WalkOutcome::run(&stations);
///
/// assert!(!outcome.loop_detected());
/// assert_eq!(outcome.path_stations(), vec![1, 2]);
/// assert_eq!(outcome.snapshots(2), Some(&[SealSet::from([1])][..]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkOutcome {
    visits: VisitLog,
    path: Vec<Visit>,
    loop_at: Option<StationIndex>,
}

impl WalkOutcome {
    /// Walk `stations` from department 1 with no seals.
    ///
    /// The walk stops the first time a department leaves the visitor with
    /// seals it has already produced (a loop), or right after the last
    /// department is processed. Every recorded snapshot is fresh, and each
    /// department has finitely many seal configurations, so the walk ends.
    ///
    /// # Panics
    ///
    /// Panics if a rule sends the visitor to a department that is not in
    /// `stations`. Validated maps never do.
    pub fn run(stations: &StationMap) -> Self {
        let terminal = stations.len();
        let mut seals = SealSet::new();
        let mut visits = VisitLog::new();
        let mut path = Vec::new();
        let mut current: StationIndex = 1;

        let loop_at = loop {
            let rule = stations.get(&current).unwrap_or_else(|| {
                panic!("walk reached station {current}, which is not in the station map")
            });
            let next = rule.apply(&mut seals);

            let seen = visits.entry(current).or_default();
            if seen.contains(&seals) {
                debug!(station = current, seals = ?seals, "seals repeated, loop detected");
                break Some(current);
            }
            seen.push(seals.clone());
            path.push(Visit {
                station: current,
                seals: seals.clone(),
            });
            debug!(station = current, next, seals = ?seals, "left station");

            if current == terminal {
                break None;
            }
            current = next;
        };

        info!(
            steps = path.len(),
            loop_detected = loop_at.is_some(),
            "bypass walk finished"
        );

        Self {
            visits,
            path,
            loop_at,
        }
    }

    pub fn loop_detected(&self) -> bool {
        self.loop_at.is_some()
    }

    /// Department where a repeated seal configuration stopped the walk.
    pub fn loop_at(&self) -> Option<StationIndex> {
        self.loop_at
    }

    /// Snapshots recorded at `station`, or `None` if the walk never left it.
    pub fn snapshots(&self, station: StationIndex) -> Option<&[SealSet]> {
        self.visits.get(&station).map(Vec::as_slice)
    }

    pub fn visits(&self) -> &VisitLog {
        &self.visits
    }

    /// Every recorded step in walk order.
    pub fn path(&self) -> &[Visit] {
        &self.path
    }

    /// Departments in the order the walk left them.
    pub fn path_stations(&self) -> Vec<StationIndex> {
        self.path.iter().map(|visit| visit.station).collect()
    }
}
