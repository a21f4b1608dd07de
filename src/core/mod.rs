//! Core bypass-list types.
//!
//! This module contains the pure building blocks of a bypass list:
//! - Seal sets carried by the visitor
//! - Rules that departments apply to those seals
//! - Departments pairing an index with a rule
//!
//! Nothing here holds hidden state; applying a rule is a pure function of
//! the rule and the seals it is given.

mod rule;
mod seals;
mod station;

pub use rule::{Rule, RuleBranch, StationIndex};
pub use seals::{Seal, SealSet};
pub use station::{Station, StationError};

use std::collections::BTreeMap;

/// Departments keyed by their 1-based index.
pub type StationMap = BTreeMap<StationIndex, Rule>;
