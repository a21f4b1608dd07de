//! Rules that departments apply to the bypass list.
//!
//! A rule is a pure function of the current seals: it stamps one seal,
//! crosses out another and names the next department to visit. The set of
//! rule kinds is closed, so rules are a plain enum dispatched by `match`.

use super::seals::{Seal, SealSet};
use serde::{Deserialize, Serialize};

/// 1-based index of a department.
pub type StationIndex = usize;

/// One stamp/cross-out/move triple.
///
/// The seal is stamped before the other one is crossed out, so a branch that
/// stamps and crosses out the same seal leaves it absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleBranch {
    /// Seal stamped when the branch fires
    pub seal_to_add: Seal,
    /// Seal crossed out when the branch fires
    pub seal_to_remove: Seal,
    /// Department visited next
    pub next_station: StationIndex,
}

impl RuleBranch {
    pub fn new(seal_to_add: Seal, seal_to_remove: Seal, next_station: StationIndex) -> Self {
        Self {
            seal_to_add,
            seal_to_remove,
            next_station,
        }
    }

    fn fire(&self, seals: &mut SealSet) -> StationIndex {
        seals.stamp(self.seal_to_add);
        seals.cross_out(self.seal_to_remove);
        self.next_station
    }
}

impl From<(Seal, Seal, StationIndex)> for RuleBranch {
    fn from((add, remove, next): (Seal, Seal, StationIndex)) -> Self {
        Self::new(add, remove, next)
    }
}

/// Deterministic rule attached to a department.
///
/// # Example
///
/// ```rust
/// use bypass::core::{Rule, SealSet};
///
/// let rule = Rule::conditional(7, (1, 2, 3), (2, 1, 4));
///
/// let mut seals = SealSet::from([7]);
/// assert_eq!(rule.apply(&mut seals), 3);
/// assert_eq!(seals, SealSet::from([1, 7]));
///
/// let mut seals = SealSet::new();
/// assert_eq!(rule.apply(&mut seals), 4);
/// assert_eq!(seals, SealSet::from([2]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// Always fires the same branch
    Unconditional(RuleBranch),

    /// Fires `present` if `seal_to_check` is stamped, otherwise `absent`
    Conditional {
        seal_to_check: Seal,
        present: RuleBranch,
        absent: RuleBranch,
    },
}

impl Rule {
    /// Rule that stamps `add`, crosses out `remove` and moves to `next`.
    pub fn unconditional(add: Seal, remove: Seal, next: StationIndex) -> Self {
        Self::Unconditional(RuleBranch::new(add, remove, next))
    }

    /// Rule that branches on whether `check` is stamped.
    ///
    /// Each branch is an `(add, remove, next)` triple.
    pub fn conditional(
        check: Seal,
        present: impl Into<RuleBranch>,
        absent: impl Into<RuleBranch>,
    ) -> Self {
        Self::Conditional {
            seal_to_check: check,
            present: present.into(),
            absent: absent.into(),
        }
    }

    /// Mutate `seals` in place and return the next department.
    pub fn apply(&self, seals: &mut SealSet) -> StationIndex {
        match self {
            Self::Unconditional(branch) => branch.fire(seals),
            Self::Conditional {
                seal_to_check,
                present,
                absent,
            } => {
                if seals.contains(*seal_to_check) {
                    present.fire(seals)
                } else {
                    absent.fire(seals)
                }
            }
        }
    }

    /// Every department this rule can send the visitor to.
    pub fn referenced_stations(&self) -> Vec<StationIndex> {
        self.branches().map(|b| b.next_station).collect()
    }

    /// Every seal this rule stamps, crosses out or checks.
    pub fn referenced_seals(&self) -> Vec<Seal> {
        let mut seals = Vec::new();
        if let Self::Conditional { seal_to_check, .. } = self {
            seals.push(*seal_to_check);
        }
        for branch in self.branches() {
            seals.push(branch.seal_to_add);
            seals.push(branch.seal_to_remove);
        }
        seals
    }

    fn branches(&self) -> impl Iterator<Item = &RuleBranch> {
        let (first, second) = match self {
            Self::Unconditional(branch) => (branch, None),
            Self::Conditional {
                present, absent, ..
            } => (present, Some(absent)),
        };
        std::iter::once(first).chain(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconditional_stamps_then_crosses_out() {
        let rule = Rule::unconditional(1, 2, 2);
        let mut seals = SealSet::from([2]);

        let next = rule.apply(&mut seals);

        assert_eq!(next, 2);
        assert_eq!(seals, SealSet::from([1]));
    }

    #[test]
    fn same_seal_added_and_removed_ends_absent() {
        let rule = Rule::unconditional(1, 1, 2);
        let mut seals = SealSet::new();

        rule.apply(&mut seals);

        assert!(seals.is_empty());
    }

    #[test]
    fn conditional_takes_present_branch() {
        let rule = Rule::conditional(5, (1, 5, 3), (2, 2, 4));
        let mut seals = SealSet::from([5]);

        assert_eq!(rule.apply(&mut seals), 3);
        assert_eq!(seals, SealSet::from([1]));
    }

    #[test]
    fn conditional_takes_absent_branch() {
        let rule = Rule::conditional(5, (1, 5, 3), (2, 9, 4));
        let mut seals = SealSet::from([9]);

        assert_eq!(rule.apply(&mut seals), 4);
        assert_eq!(seals, SealSet::from([2]));
    }

    #[test]
    fn apply_is_deterministic() {
        let rule = Rule::conditional(1, (2, 1, 1), (1, 3, 2));
        let mut a = SealSet::from([3]);
        let mut b = SealSet::from([3]);

        assert_eq!(rule.apply(&mut a), rule.apply(&mut b));
        assert_eq!(a, b);
    }

    #[test]
    fn referenced_indices_cover_both_branches() {
        let rule = Rule::conditional(8, (1, 2, 3), (4, 5, 6));

        assert_eq!(rule.referenced_stations(), vec![3, 6]);
        assert_eq!(rule.referenced_seals(), vec![8, 1, 2, 4, 5]);
    }

    #[test]
    fn unconditional_references_single_branch() {
        let rule = Rule::unconditional(4, 0, 9);

        assert_eq!(rule.referenced_stations(), vec![9]);
        assert_eq!(rule.referenced_seals(), vec![4, 0]);
    }

    #[test]
    fn rule_deserializes_from_tagged_json() {
        let json = r#"{
            "kind": "conditional",
            "seal_to_check": 3,
            "present": { "seal_to_add": 1, "seal_to_remove": 3, "next_station": 2 },
            "absent": { "seal_to_add": 3, "seal_to_remove": 1, "next_station": 1 }
        }"#;

        let rule: Rule = serde_json::from_str(json).unwrap();

        assert_eq!(rule, Rule::conditional(3, (1, 3, 2), (3, 1, 1)));
    }
}
