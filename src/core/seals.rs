//! The set of seals carried by the visitor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier of a single seal.
pub type Seal = u32;

/// Unordered collection of seals currently stamped on the bypass list.
///
/// Two sets are equal iff they hold the same seals. Storage is ordered so
/// that hashing, debug output and serialization are deterministic.
///
/// # Example
///
/// ```rust
/// use bypass::core::SealSet;
///
/// let mut seals = SealSet::new();
/// seals.stamp(3);
/// seals.stamp(1);
/// seals.cross_out(3);
///
/// assert_eq!(seals, SealSet::from([1]));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SealSet {
    seals: BTreeSet<Seal>,
}

impl SealSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a seal. Stamping a seal that is already present is a no-op.
    pub fn stamp(&mut self, seal: Seal) {
        self.seals.insert(seal);
    }

    /// Remove a seal. Crossing out an absent seal is a no-op.
    pub fn cross_out(&mut self, seal: Seal) {
        self.seals.remove(&seal);
    }

    pub fn contains(&self, seal: Seal) -> bool {
        self.seals.contains(&seal)
    }

    pub fn len(&self) -> usize {
        self.seals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seals.is_empty()
    }

    /// Seals in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Seal> + '_ {
        self.seals.iter().copied()
    }
}

impl fmt::Debug for SealSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.seals.iter()).finish()
    }
}

impl FromIterator<Seal> for SealSet {
    fn from_iter<I: IntoIterator<Item = Seal>>(iter: I) -> Self {
        Self {
            seals: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[Seal; N]> for SealSet {
    fn from(seals: [Seal; N]) -> Self {
        seals.into_iter().collect()
    }
}
