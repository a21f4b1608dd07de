//! Answers to "what seals did the visitor leave this department with?".

use crate::core::SealSet;

/// Result of [`BypassList::query`](crate::engine::BypassList::query).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryResult<'a> {
    /// The requested department is outside `1..=N`
    Invalid,

    /// The walk has run; `snapshots` is `None` if it never left the department
    Resolved {
        loop_detected: bool,
        snapshots: Option<&'a [SealSet]>,
    },
}

impl<'a> QueryResult<'a> {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Global loop flag, or `None` for an invalid query.
    pub fn loop_detected(&self) -> Option<bool> {
        match self {
            Self::Invalid => None,
            Self::Resolved { loop_detected, .. } => Some(*loop_detected),
        }
    }

    pub fn snapshots(&self) -> Option<&'a [SealSet]> {
        match self {
            Self::Invalid => None,
            Self::Resolved { snapshots, .. } => *snapshots,
        }
    }

    /// Detach from the engine as `(loop_detected, snapshots)`.
    ///
    /// Both halves are `None` together iff the query was invalid.
    pub fn into_owned(self) -> (Option<bool>, Option<Vec<SealSet>>) {
        (self.loop_detected(), self.snapshots().map(<[SealSet]>::to_vec))
    }
}
