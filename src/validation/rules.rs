//! Construction-time checks for station maps using Validation.

use crate::core::{Rule, StationIndex, StationMap};
use crate::validation::violations::StationMapViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<StationMapViolation>>;

fn check(violation: Option<StationMapViolation>) -> Check {
    match violation {
        Some(violation) => Validation::fail(violation),
        None => Validation::success(()),
    }
}

/// Validate a station map, accumulating ALL violations.
///
/// Checks run in this order:
/// 1. at least two stations,
/// 2. keys are exactly `1..=N`,
/// 3. every non-terminal target lies in `1..=N` (terminal targets only need
///    to be at least 1, since the walk never follows them),
/// 4. every referenced seal is at least 1.
///
/// # Example
///
/// ```rust
/// use bypass::core::{Rule, StationMap};
/// use bypass::validation::validate;
///
/// let mut stations = StationMap::new();
/// stations.insert(1, Rule::unconditional(1, 2, 2));
/// stations.insert(2, Rule::unconditional(2, 2, 1));
///
/// assert!(validate(&stations).is_success());
///
/// stations.insert(4, Rule::unconditional(1, 1, 1));
/// assert!(validate(&stations).is_failure());
/// ```
pub fn validate(stations: &StationMap) -> Check {
    let count = stations.len();
    let mut checks: Vec<Check> = Vec::new();

    checks.push(check(
        (count < 2).then_some(StationMapViolation::TooFewStations { count }),
    ));

    for &index in stations.keys() {
        checks.push(check((!(1..=count).contains(&index)).then_some(
            StationMapViolation::IndexOutOfRange { index, count },
        )));
    }

    for (&station, rule) in stations {
        for target in rule.referenced_stations() {
            checks.push(check(target_violation(station, target, count)));
        }
    }

    for (&station, rule) in stations {
        checks.extend(seal_checks(station, rule));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn target_violation(
    station: StationIndex,
    target: StationIndex,
    count: usize,
) -> Option<StationMapViolation> {
    if station == count {
        return (target < 1).then_some(StationMapViolation::TerminalTargetBelowOne {
            station,
            target,
        });
    }
    (!(1..=count).contains(&target)).then_some(StationMapViolation::TargetOutOfRange {
        station,
        target,
        count,
    })
}

fn seal_checks(station: StationIndex, rule: &Rule) -> impl Iterator<Item = Check> + '_ {
    rule.referenced_seals().into_iter().map(move |seal| {
        check((seal < 1).then_some(StationMapViolation::SealBelowOne { station, seal }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violations(stations: &StationMap) -> Vec<StationMapViolation> {
        match validate(stations) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    fn map(rules: Vec<(StationIndex, Rule)>) -> StationMap {
        rules.into_iter().collect()
    }

    #[test]
    fn valid_map_passes() {
        let stations = map(vec![
            (1, Rule::unconditional(1, 2, 2)),
            (2, Rule::unconditional(2, 2, 1)),
        ]);

        assert!(validate(&stations).is_success());
    }

    #[test]
    fn single_station_is_rejected() {
        let stations = map(vec![(1, Rule::unconditional(1, 2, 1))]);

        assert_eq!(
            violations(&stations),
            vec![StationMapViolation::TooFewStations { count: 1 }]
        );
    }

    #[test]
    fn empty_map_is_rejected() {
        assert_eq!(
            violations(&StationMap::new()),
            vec![StationMapViolation::TooFewStations { count: 0 }]
        );
    }

    #[test]
    fn gap_in_keys_is_rejected() {
        let stations = map(vec![
            (1, Rule::unconditional(1, 2, 2)),
            (3, Rule::unconditional(2, 2, 1)),
        ]);

        assert!(violations(&stations)
            .contains(&StationMapViolation::IndexOutOfRange { index: 3, count: 2 }));
    }

    #[test]
    fn zero_key_is_rejected() {
        let stations = map(vec![
            (0, Rule::unconditional(1, 2, 1)),
            (1, Rule::unconditional(2, 2, 0)),
        ]);

        let found = violations(&stations);
        assert!(found.contains(&StationMapViolation::IndexOutOfRange { index: 0, count: 2 }));
    }

    #[test]
    fn non_terminal_target_out_of_range_is_rejected() {
        let stations = map(vec![
            (1, Rule::conditional(1, (1, 2, 2), (1, 2, 3))),
            (2, Rule::unconditional(2, 2, 1)),
        ]);

        assert_eq!(
            violations(&stations),
            vec![StationMapViolation::TargetOutOfRange {
                station: 1,
                target: 3,
                count: 2
            }]
        );
    }

    #[test]
    fn non_terminal_zero_target_is_rejected() {
        let stations = map(vec![
            (1, Rule::unconditional(1, 2, 0)),
            (2, Rule::unconditional(2, 2, 1)),
        ]);

        assert_eq!(
            violations(&stations),
            vec![StationMapViolation::TargetOutOfRange {
                station: 1,
                target: 0,
                count: 2
            }]
        );
    }

    #[test]
    fn terminal_target_above_range_is_accepted() {
        let stations = map(vec![
            (1, Rule::unconditional(1, 2, 2)),
            (2, Rule::unconditional(2, 2, 42)),
        ]);

        assert!(validate(&stations).is_success());
    }

    #[test]
    fn terminal_target_below_one_is_rejected() {
        let stations = map(vec![
            (1, Rule::unconditional(1, 2, 2)),
            (2, Rule::conditional(1, (2, 2, 1), (2, 2, 0))),
        ]);

        assert_eq!(
            violations(&stations),
            vec![StationMapViolation::TerminalTargetBelowOne {
                station: 2,
                target: 0
            }]
        );
    }

    #[test]
    fn zero_seal_is_rejected_on_every_station() {
        let stations = map(vec![
            (1, Rule::conditional(0, (1, 2, 2), (1, 2, 2))),
            (2, Rule::unconditional(0, 2, 1)),
        ]);

        let found = violations(&stations);
        assert_eq!(found.len(), 2);
        assert!(found.contains(&StationMapViolation::SealBelowOne { station: 1, seal: 0 }));
        assert!(found.contains(&StationMapViolation::SealBelowOne { station: 2, seal: 0 }));
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let stations = map(vec![
            (1, Rule::unconditional(0, 2, 7)),
            (5, Rule::unconditional(1, 2, 1)),
        ]);

        let found = violations(&stations);

        assert_eq!(
            found,
            vec![
                StationMapViolation::IndexOutOfRange { index: 5, count: 2 },
                StationMapViolation::TargetOutOfRange {
                    station: 1,
                    target: 7,
                    count: 2
                },
                StationMapViolation::SealBelowOne { station: 1, seal: 0 },
            ]
        );
    }
}
