//! Bypass: a deterministic walk through numbered departments.
//!
//! A visitor carries a bypass list of seals through a fixed sequence of
//! departments. Each department applies a rule that stamps one seal, crosses
//! out another and names the next department. The walk is computed once, on
//! first demand, and then answers any number of concurrent queries.
//!
//! # Core Concepts
//!
//! - **Seals**: value-compared sets of seal identifiers via `SealSet`
//! - **Rules**: unconditional or seal-conditional steps via `Rule`
//! - **Validation**: every problem in a station map reported in one pass
//! - **Engine**: the memoized walk with loop detection via `BypassList`
//!
//! # Example
//!
//! ```rust
//! use bypass::{stations, BypassList, SealSet};
//!
//! let bypass = BypassList::new(stations! {
//!     1 => unconditional(1, 2, 2),
//!     2 => unconditional(2, 2, 1),
//!     3 => unconditional(1, 2, 1),
//! })
//! .expect("stations are valid");
//!
//! // 1 -> 2 -> 1 leaves station 1 holding {1} twice: a loop.
//! assert_eq!(bypass.uncrossed_seals(2), (Some(true), Some(vec![SealSet::from([1])])));
//! assert_eq!(bypass.uncrossed_seals(3), (Some(true), None));
//! assert_eq!(bypass.uncrossed_seals(4), (None, None));
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, BypassListBuilder};
pub use crate::core::{Rule, RuleBranch, Seal, SealSet, Station, StationIndex, StationMap};
pub use engine::{BypassList, QueryResult, WalkOutcome};
pub use validation::StationMapViolation;
